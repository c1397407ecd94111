//! Read-only queries over a parsed OpenAPI document.
//!
//! The engine answers three questions about a `Document`:
//!
//! - which (method, path) pairs are declared (`list_routes`)
//! - what one operation's parameters and responses look like (`describe_operation`)
//! - what a named entry under `components.schemas` contains (`get_schema`)
//!
//! Every query is a pure function of the document and its arguments. Missing
//! optional fields fall back to defaults; only a missing path, method or schema
//! is an error, reported as a distinct `QueryError` variant.
//!
//! # Examples
//!
//! ```
//! use openapi_inspect::document::parser::parse_yaml;
//! use openapi_inspect::query::{QueryEngine, QueryError};
//!
//! let doc = parse_yaml("paths:\n  /a:\n    get: {}\n  /b:\n    post: {}\n").unwrap();
//! let engine = QueryEngine::new(&doc);
//!
//! let routes: Vec<String> = engine.list_routes().iter().map(|r| r.to_string()).collect();
//! assert_eq!(routes, vec!["GET /a", "POST /b"]);
//!
//! assert!(matches!(
//!     engine.describe_operation("/a", "delete"),
//!     Err(QueryError::MethodNotFound { .. })
//! ));
//! ```

pub mod engine;
pub mod error;
pub mod view;

pub use engine::QueryEngine;
pub use error::QueryError;
pub use view::{OperationDetail, ParameterView, ResponseView, Route};
