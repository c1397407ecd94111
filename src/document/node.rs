//! Generic document node representation.
//!
//! An OpenAPI document is held as an untyped tree of mappings, sequences and
//! scalars. Nothing in this module knows about OpenAPI itself; the query layer
//! navigates the tree by well-known key names and supplies its own defaults.
//!
//! # Example
//!
//! ```
//! use openapi_inspect::document::node::{Node, Number};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("type".to_string(), Node::String("object".to_string()));
//! fields.insert("minProperties".to_string(), Node::Number(Number::Integer(1)));
//! let schema = Node::Mapping(fields);
//!
//! assert_eq!(schema.get("type").and_then(Node::as_str), Some("object"));
//! assert!(schema.get("required").is_none());
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Represents document numbers (integer or float)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            // Debug keeps the trailing ".0" on whole floats
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Unsigned(u) => *u as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }
}

/// A node of the parsed document tree.
///
/// Mappings keep their keys in document order so that listings come out in the
/// same order the author wrote them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// An explicit or implicit null (`~`, `null`, or a key with no value)
    #[default]
    Null,
    /// A boolean scalar
    Bool(bool),
    /// A numeric scalar
    Number(Number),
    /// A string scalar
    String(String),
    /// An ordered sequence
    Sequence(Vec<Node>),
    /// An ordered mapping with string keys
    Mapping(IndexMap<String, Node>),
}

impl Node {
    /// Looks up `key` if this node is a mapping.
    ///
    /// Returns `None` for missing keys and for every non-mapping node, so lookups
    /// can be chained without checking shapes first.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|fields| fields.get(key))
    }

    /// Follows a chain of mapping keys from this node.
    ///
    /// # Example
    ///
    /// ```
    /// use openapi_inspect::document::parser::parse_yaml;
    ///
    /// let doc = parse_yaml("components:\n  schemas:\n    User: {type: object}\n").unwrap();
    /// let user = doc.root().lookup(&["components", "schemas", "User"]).unwrap();
    /// assert_eq!(user.get("type").and_then(|t| t.as_str()), Some("object"));
    /// ```
    pub fn lookup(&self, keys: &[&str]) -> Option<&Node> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Mapping(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Loose truthiness: null, `false`, zero, the empty string and empty
    /// containers are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Null => false,
            Node::Bool(b) => *b,
            Node::Number(n) => !n.is_zero(),
            Node::String(s) => !s.is_empty(),
            Node::Sequence(items) => !items.is_empty(),
            Node::Mapping(fields) => !fields.is_empty(),
        }
    }

    /// A short name for the node's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }

    /// Renders the node as text, or `None` for null.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Node::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Compact flow-style rendering. Strings are written raw, without quoting.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Number(n) => write!(f, "{}", n),
            Node::String(s) => write!(f, "{}", s),
            Node::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Node::Mapping(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Node::Number(Number::Unsigned(u)) => serializer.serialize_u64(*u),
            Node::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Node::String(s) => serializer.serialize_str(s),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
