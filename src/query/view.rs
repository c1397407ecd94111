//! Structured results produced by the query engine.

use std::fmt;

/// One declared (method, path) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The method key, upper-cased
    pub method: String,
    pub path: String,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A projection of one entry of an operation's `parameters`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterView {
    pub name: Option<String>,
    /// The `in` field: query, path, header or cookie
    pub location: Option<String>,
    pub required: bool,
    /// `schema.type`, absent when there is no schema or no type
    pub schema_type: Option<String>,
    pub description: String,
}

/// A projection of one entry of an operation's `responses`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseView {
    pub status_code: String,
    pub description: String,
    /// Keys of `content`, in document order
    pub media_types: Vec<String>,
}

impl ResponseView {
    pub fn has_content(&self) -> bool {
        !self.media_types.is_empty()
    }
}

/// Everything shown for a single path + method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDetail {
    /// The requested method, upper-cased
    pub method: String,
    pub path: String,
    pub parameters: Vec<ParameterView>,
    pub responses: Vec<ResponseView>,
}
