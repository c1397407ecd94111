//! Error types for document queries.

use crate::document::node::Node;
use std::fmt;

/// Errors that can occur while querying a document.
///
/// The three not-found variants are expected outcomes of user input and carry
/// the exact text shown to the user. `Malformed` is raised when a section the
/// query must descend into has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested path has no entry under `paths`.
    PathNotFound { path: String },
    /// The path exists but declares no matching method.
    MethodNotFound { method: String, path: String },
    /// No entry under `components.schemas` has the requested name.
    SchemaNotFound { name: String },
    /// A section has an unusable shape.
    Malformed {
        location: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl QueryError {
    /// Returns true for the path, method and schema not-found outcomes.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, QueryError::Malformed { .. })
    }

    pub(crate) fn malformed(segments: &[&str], expected: &'static str, found: &Node) -> Self {
        QueryError::Malformed {
            location: pointer(segments),
            expected,
            found: found.kind(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::PathNotFound { path } => write!(f, "Path not found: {}", path),
            QueryError::MethodNotFound { method, path } => {
                write!(f, "Method {} not found for path {}", method, path)
            }
            QueryError::SchemaNotFound { name } => write!(f, "Schema not found: {}", name),
            QueryError::Malformed {
                location,
                expected,
                found,
            } => write!(
                f,
                "Malformed document at {}: expected {}, found {}",
                location, expected, found
            ),
        }
    }
}

impl std::error::Error for QueryError {}

/// Builds a JSON pointer (RFC 6901) from unescaped segments.
pub(crate) fn pointer(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect()
}
