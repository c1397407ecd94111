use super::error::QueryError;
use super::view::{OperationDetail, ParameterView, ResponseView, Route};
use crate::document::node::Node;
use crate::document::tree::Document;
use indexmap::IndexMap;

/// Answers route, operation and schema queries against one document.
pub struct QueryEngine<'a> {
    document: &'a Document,
}

impl<'a> QueryEngine<'a> {
    pub fn new(document: &'a Document) -> Self {
        QueryEngine { document }
    }

    /// Lists every (method, path) pair in document order.
    ///
    /// Paths come in the order they appear under `paths`, and methods in the
    /// order they appear within each path. A missing `paths` section, or a
    /// path entry that is not a mapping, contributes nothing.
    pub fn list_routes(&self) -> Vec<Route> {
        let Some(paths) = self.document.paths() else {
            return vec![];
        };

        paths
            .iter()
            .filter_map(|(path, item)| item.as_mapping().map(|methods| (path, methods)))
            .flat_map(|(path, methods)| {
                methods.keys().map(move |method| Route {
                    method: method.to_uppercase(),
                    path: path.clone(),
                })
            })
            .collect()
    }

    /// Builds the parameter and response view of one operation.
    ///
    /// `path` must match a key under `paths` exactly. `method` is compared
    /// case-insensitively, with an exact key match taking precedence.
    pub fn describe_operation(
        &self,
        path: &str,
        method: &str,
    ) -> Result<OperationDetail, QueryError> {
        let item = self
            .document
            .paths()
            .and_then(|paths| paths.get(path))
            .ok_or_else(|| QueryError::PathNotFound {
                path: path.to_string(),
            })?;

        let methods = match item {
            Node::Null => None,
            Node::Mapping(methods) => Some(methods),
            other => return Err(QueryError::malformed(&["paths", path], "mapping", other)),
        };

        let (method_key, operation) = methods
            .and_then(|methods| find_method(methods, method))
            .ok_or_else(|| QueryError::MethodNotFound {
                method: method.to_string(),
                path: path.to_string(),
            })?;

        let location = ["paths", path, method_key.as_str()];
        if !matches!(operation, Node::Null | Node::Mapping(_)) {
            return Err(QueryError::malformed(&location, "mapping", operation));
        }

        Ok(OperationDetail {
            method: method.to_uppercase(),
            path: path.to_string(),
            parameters: collect_parameters(operation, &location)?,
            responses: collect_responses(operation, &location)?,
        })
    }

    /// Returns the raw sub-tree stored under `components.schemas.<name>`.
    ///
    /// The name is matched case-sensitively and `$ref` pointers inside the
    /// schema are left untouched.
    pub fn get_schema(&self, name: &str) -> Result<&'a Node, QueryError> {
        self.document
            .schemas()
            .and_then(|schemas| schemas.get(name))
            .ok_or_else(|| QueryError::SchemaNotFound {
                name: name.to_string(),
            })
    }
}

fn find_method<'m>(
    methods: &'m IndexMap<String, Node>,
    method: &str,
) -> Option<(&'m String, &'m Node)> {
    methods
        .get_key_value(method)
        .or_else(|| methods.iter().find(|(key, _)| key.eq_ignore_ascii_case(method)))
}

fn join<'s>(location: &[&'s str], tail: &[&'s str]) -> Vec<&'s str> {
    location.iter().chain(tail).copied().collect()
}

fn collect_parameters(
    operation: &Node,
    location: &[&str],
) -> Result<Vec<ParameterView>, QueryError> {
    let items = match operation.get("parameters") {
        None | Some(Node::Null) => return Ok(vec![]),
        Some(Node::Sequence(items)) => items,
        Some(other) => {
            return Err(QueryError::malformed(
                &join(location, &["parameters"]),
                "sequence",
                other,
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, param)| {
            if param.as_mapping().is_none() {
                let index = index.to_string();
                return Err(QueryError::malformed(
                    &join(location, &["parameters", index.as_str()]),
                    "mapping",
                    param,
                ));
            }
            Ok(project_parameter(param))
        })
        .collect()
}

fn project_parameter(param: &Node) -> ParameterView {
    ParameterView {
        name: param.get("name").and_then(Node::to_text),
        location: param.get("in").and_then(Node::to_text),
        required: param.get("required").is_some_and(Node::is_truthy),
        schema_type: param.lookup(&["schema", "type"]).and_then(Node::to_text),
        description: param
            .get("description")
            .and_then(Node::to_text)
            .unwrap_or_default(),
    }
}

fn collect_responses(
    operation: &Node,
    location: &[&str],
) -> Result<Vec<ResponseView>, QueryError> {
    let responses = match operation.get("responses") {
        None | Some(Node::Null) => return Ok(vec![]),
        Some(Node::Mapping(responses)) => responses,
        Some(other) => {
            return Err(QueryError::malformed(
                &join(location, &["responses"]),
                "mapping",
                other,
            ))
        }
    };

    responses
        .iter()
        .map(|(code, response)| {
            let response_location = join(location, &["responses", code.as_str()]);
            match response {
                Node::Null => Ok(ResponseView {
                    status_code: code.clone(),
                    ..ResponseView::default()
                }),
                Node::Mapping(_) => Ok(ResponseView {
                    status_code: code.clone(),
                    description: response
                        .get("description")
                        .and_then(Node::to_text)
                        .unwrap_or_default(),
                    media_types: media_types(response, &response_location)?,
                }),
                other => Err(QueryError::malformed(&response_location, "mapping", other)),
            }
        })
        .collect()
}

fn media_types(response: &Node, location: &[&str]) -> Result<Vec<String>, QueryError> {
    match response.get("content") {
        None | Some(Node::Null) => Ok(vec![]),
        Some(Node::Mapping(content)) => Ok(content.keys().cloned().collect()),
        Some(other) => Err(QueryError::malformed(
            &join(location, &["content"]),
            "mapping",
            other,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::Number;

    fn string(s: &str) -> Node {
        Node::String(s.to_string())
    }

    fn mapping(entries: Vec<(&str, Node)>) -> Node {
        Node::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    fn document_with_operation(operation: Node) -> Document {
        Document::new(mapping(vec![(
            "paths",
            mapping(vec![("/foo", mapping(vec![("get", operation)]))]),
        )]))
    }

    #[test]
    fn test_list_routes_order() {
        let doc = Document::new(mapping(vec![(
            "paths",
            mapping(vec![
                (
                    "/b",
                    mapping(vec![("post", mapping(vec![])), ("get", mapping(vec![]))]),
                ),
                ("/a", mapping(vec![("delete", mapping(vec![]))])),
            ]),
        )]));
        let routes: Vec<String> = QueryEngine::new(&doc)
            .list_routes()
            .iter()
            .map(Route::to_string)
            .collect();
        assert_eq!(routes, vec!["POST /b", "GET /b", "DELETE /a"]);
    }

    #[test]
    fn test_list_routes_without_paths() {
        let doc = Document::new(mapping(vec![("openapi", string("3.0.0"))]));
        assert!(QueryEngine::new(&doc).list_routes().is_empty());

        let doc = Document::new(Node::Null);
        assert!(QueryEngine::new(&doc).list_routes().is_empty());
    }

    #[test]
    fn test_list_routes_skips_non_mapping_items() {
        let doc = Document::new(mapping(vec![(
            "paths",
            mapping(vec![
                ("/a", Node::Null),
                ("/b", string("oops")),
                ("/c", mapping(vec![("put", Node::Null)])),
            ]),
        )]));
        let routes = QueryEngine::new(&doc).list_routes();
        assert_eq!(
            routes,
            vec![Route {
                method: "PUT".to_string(),
                path: "/c".to_string()
            }]
        );
    }

    #[test]
    fn test_describe_parameter_defaults() {
        let doc = document_with_operation(mapping(vec![(
            "parameters",
            Node::Sequence(vec![mapping(vec![("name", string("q"))])]),
        )]));
        let detail = QueryEngine::new(&doc).describe_operation("/foo", "get").unwrap();
        assert_eq!(
            detail.parameters,
            vec![ParameterView {
                name: Some("q".to_string()),
                location: None,
                required: false,
                schema_type: None,
                description: String::new(),
            }]
        );
    }

    #[test]
    fn test_describe_required_truthiness() {
        let doc = document_with_operation(mapping(vec![(
            "parameters",
            Node::Sequence(vec![
                mapping(vec![("required", Node::Bool(true))]),
                mapping(vec![("required", Node::Number(Number::Integer(0)))]),
                mapping(vec![("required", string("yes"))]),
            ]),
        )]));
        let detail = QueryEngine::new(&doc).describe_operation("/foo", "get").unwrap();
        let required: Vec<bool> = detail.parameters.iter().map(|p| p.required).collect();
        assert_eq!(required, vec![true, false, true]);
    }

    #[test]
    fn test_describe_method_case_insensitive() {
        let doc = document_with_operation(mapping(vec![]));
        let engine = QueryEngine::new(&doc);
        let detail = engine.describe_operation("/foo", "GeT").unwrap();
        assert_eq!(detail.method, "GET");
        assert_eq!(detail.path, "/foo");
    }

    #[test]
    fn test_describe_null_operation_is_empty() {
        let doc = document_with_operation(Node::Null);
        let detail = QueryEngine::new(&doc).describe_operation("/foo", "get").unwrap();
        assert!(detail.parameters.is_empty());
        assert!(detail.responses.is_empty());
    }

    #[test]
    fn test_describe_null_path_item_has_no_methods() {
        let doc = Document::new(mapping(vec![("paths", mapping(vec![("/foo", Node::Null)]))]));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap_err();
        assert!(matches!(err, QueryError::MethodNotFound { .. }));
    }

    #[test]
    fn test_describe_path_is_exact_match() {
        let doc = document_with_operation(mapping(vec![]));
        let engine = QueryEngine::new(&doc);
        assert!(matches!(
            engine.describe_operation("/foo/", "get"),
            Err(QueryError::PathNotFound { .. })
        ));
        assert!(matches!(
            engine.describe_operation("/FOO", "get"),
            Err(QueryError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_describe_malformed_parameters() {
        let doc = document_with_operation(mapping(vec![("parameters", string("nope"))]));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::Malformed {
                location: "/paths/~1foo/get/parameters".to_string(),
                expected: "sequence",
                found: "string",
            }
        );
    }

    #[test]
    fn test_describe_malformed_parameter_entry() {
        let doc = document_with_operation(mapping(vec![(
            "parameters",
            Node::Sequence(vec![mapping(vec![]), Node::Number(Number::Integer(1))]),
        )]));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap_err();
        assert!(err.to_string().contains("/paths/~1foo/get/parameters/1"));
    }

    #[test]
    fn test_describe_malformed_content() {
        let doc = document_with_operation(mapping(vec![(
            "responses",
            mapping(vec![(
                "200",
                mapping(vec![("content", Node::Sequence(vec![]))]),
            )]),
        )]));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Malformed document at /paths/~1foo/get/responses/200/content"));
    }

    #[test]
    fn test_describe_malformed_path_item() {
        for (item, found) in [
            (string("oops"), "string"),
            (Node::Sequence(vec![string("get")]), "sequence"),
        ] {
            let doc = Document::new(mapping(vec![("paths", mapping(vec![("/foo", item)]))]));
            let err = QueryEngine::new(&doc)
                .describe_operation("/foo", "get")
                .unwrap_err();
            assert_eq!(
                err,
                QueryError::Malformed {
                    location: "/paths/~1foo".to_string(),
                    expected: "mapping",
                    found,
                }
            );
        }
    }

    #[test]
    fn test_describe_malformed_operation() {
        let doc = document_with_operation(Node::Bool(true));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "GET")
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::Malformed {
                location: "/paths/~1foo/get".to_string(),
                expected: "mapping",
                found: "boolean",
            }
        );
    }

    #[test]
    fn test_describe_malformed_responses() {
        let doc = document_with_operation(mapping(vec![(
            "responses",
            Node::Sequence(vec![string("200")]),
        )]));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::Malformed {
                location: "/paths/~1foo/get/responses".to_string(),
                expected: "mapping",
                found: "sequence",
            }
        );
    }

    #[test]
    fn test_describe_malformed_response_entry() {
        let doc = document_with_operation(mapping(vec![(
            "responses",
            mapping(vec![("200", string("ok"))]),
        )]));
        let err = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::Malformed {
                location: "/paths/~1foo/get/responses/200".to_string(),
                expected: "mapping",
                found: "string",
            }
        );
    }

    #[test]
    fn test_describe_null_description_is_empty() {
        let doc = document_with_operation(mapping(vec![(
            "responses",
            mapping(vec![("200", mapping(vec![("description", Node::Null)]))]),
        )]));
        let detail = QueryEngine::new(&doc)
            .describe_operation("/foo", "get")
            .unwrap();
        assert_eq!(detail.responses[0].description, "");
    }

    #[test]
    fn test_describe_null_response() {
        let doc = document_with_operation(mapping(vec![(
            "responses",
            mapping(vec![("204", Node::Null)]),
        )]));
        let detail = QueryEngine::new(&doc).describe_operation("/foo", "get").unwrap();
        assert_eq!(
            detail.responses,
            vec![ResponseView {
                status_code: "204".to_string(),
                description: String::new(),
                media_types: vec![],
            }]
        );
    }

    #[test]
    fn test_get_schema_is_case_sensitive() {
        let doc = Document::new(mapping(vec![(
            "components",
            mapping(vec![(
                "schemas",
                mapping(vec![("User", mapping(vec![("type", string("object"))]))]),
            )]),
        )]));
        let engine = QueryEngine::new(&doc);
        assert!(engine.get_schema("User").is_ok());
        assert_eq!(
            engine.get_schema("user"),
            Err(QueryError::SchemaNotFound {
                name: "user".to_string()
            })
        );
    }
}
