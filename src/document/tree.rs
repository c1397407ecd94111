//! The loaded OpenAPI document.
//!
//! `Document` owns the root node of the parsed tree and knows where the
//! well-known top-level sections live. It performs no validation: a document
//! without `paths` or `components` is still a document, it just has nothing
//! to list.
//!
//! # Example
//!
//! ```
//! use openapi_inspect::document::tree::Document;
//! use openapi_inspect::document::node::Node;
//!
//! let doc = Document::new(Node::Null);
//! assert!(doc.paths().is_none());
//! assert!(doc.schemas().is_none());
//! ```

use super::node::Node;
use indexmap::IndexMap;

/// A parsed OpenAPI document held immutably for the duration of one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wraps an already parsed root node.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns a reference to the root node of the document.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The `paths` section, if present and shaped as a mapping.
    pub fn paths(&self) -> Option<&IndexMap<String, Node>> {
        self.root.get("paths").and_then(Node::as_mapping)
    }

    /// The `components.schemas` section, if present and shaped as a mapping.
    pub fn schemas(&self) -> Option<&IndexMap<String, Node>> {
        self.root
            .lookup(&["components", "schemas"])
            .and_then(Node::as_mapping)
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}
