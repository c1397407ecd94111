//! Line-oriented rendering of routes and operation details.

use crate::query::view::{OperationDetail, ParameterView, ResponseView, Route};

/// Placeholder printed for a missing name, location or type.
const ABSENT: &str = "None";

/// Renders one `"{METHOD} {path}"` line per route.
pub fn render_routes(routes: &[Route]) -> Vec<String> {
    routes.iter().map(Route::to_string).collect()
}

/// Renders the header, parameter block and response block of an operation.
///
/// # Example
///
/// ```
/// use openapi_inspect::output::render_operation;
/// use openapi_inspect::query::OperationDetail;
///
/// let detail = OperationDetail {
///     method: "GET".to_string(),
///     path: "/health".to_string(),
///     parameters: vec![],
///     responses: vec![],
/// };
/// assert_eq!(
///     render_operation(&detail),
///     vec!["--- GET /health ---", "No parameters.", "No responses defined."]
/// );
/// ```
pub fn render_operation(detail: &OperationDetail) -> Vec<String> {
    let mut lines = vec![format!("--- {} {} ---", detail.method, detail.path)];

    if detail.parameters.is_empty() {
        lines.push("No parameters.".to_string());
    } else {
        lines.push("Parameters:".to_string());
        lines.extend(detail.parameters.iter().map(render_parameter));
    }

    if detail.responses.is_empty() {
        lines.push("No responses defined.".to_string());
    } else {
        lines.push("Responses:".to_string());
        lines.extend(detail.responses.iter().map(render_response));
    }

    lines
}

fn render_parameter(param: &ParameterView) -> String {
    format!(
        "  - {} ({}, {}, type={}): {}",
        param.name.as_deref().unwrap_or(ABSENT),
        param.location.as_deref().unwrap_or(ABSENT),
        if param.required { "required" } else { "optional" },
        param.schema_type.as_deref().unwrap_or(ABSENT),
        param.description
    )
}

fn render_response(response: &ResponseView) -> String {
    if response.has_content() {
        format!(
            "  - {}: {} [content: {}]",
            response.status_code,
            response.description,
            response.media_types.join(", ")
        )
    } else {
        format!("  - {}: {}", response.status_code, response.description)
    }
}
