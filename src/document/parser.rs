//! Parsing of YAML and JSON text into a `Document`.
//!
//! Both serializations go through their serde crates first (`serde_yaml` and
//! `serde_json` with `preserve_order`) and are then converted into our own
//! `Node` tree, so the query layer never sees which format the document came
//! from.
//!
//! # Example
//!
//! ```
//! use openapi_inspect::document::parser::parse_yaml;
//!
//! let doc = parse_yaml("openapi: 3.0.0\npaths: {}\n").unwrap();
//! assert!(doc.paths().unwrap().is_empty());
//! ```

use super::node::{Node, Number};
use super::tree::Document;
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// The textual serialization of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
    /// Try JSON first, then fall back to YAML
    Auto,
}

/// Parses YAML text into a `Document`.
///
/// An empty input yields a document whose root is null.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML, if a mapping repeats a
/// key, or if a mapping uses a sequence or mapping as a key.
pub fn parse_yaml(yaml_str: &str) -> Result<Document> {
    let value: YamlValue = serde_yaml::from_str(yaml_str).context("Failed to parse YAML")?;
    let root = convert_yaml_value(&value)?;
    Ok(Document::new(root))
}

/// Parses JSON text into a `Document`, keeping object keys in document order.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON.
pub fn parse_json(json_str: &str) -> Result<Document> {
    let value: JsonValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(Document::new(convert_json_value(&value)))
}

/// Parses text in the given format.
pub fn parse_document(content: &str, format: SourceFormat) -> Result<Document> {
    match format {
        SourceFormat::Yaml => parse_yaml(content),
        SourceFormat::Json => parse_json(content),
        SourceFormat::Auto => {
            if let Ok(doc) = parse_json(content) {
                return Ok(doc);
            }
            parse_yaml(content).context("Input is neither valid JSON nor valid YAML")
        }
    }
}

fn convert_yaml_value(value: &YamlValue) -> Result<Node> {
    let node = match value {
        YamlValue::Null => Node::Null,
        YamlValue::Bool(b) => Node::Bool(*b),
        YamlValue::Number(n) => Node::Number(yaml_number(n)),
        YamlValue::String(s) => Node::String(s.clone()),
        YamlValue::Sequence(items) => Node::Sequence(
            items
                .iter()
                .map(convert_yaml_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut fields = IndexMap::with_capacity(map.len());
            for (key, child) in map {
                fields.insert(yaml_key(key)?, convert_yaml_value(child)?);
            }
            Node::Mapping(fields)
        }
        // Tags carry no meaning for inspection; keep the tagged value
        YamlValue::Tagged(tagged) => convert_yaml_value(&tagged.value)?,
    };
    Ok(node)
}

/// Converts a YAML mapping key to its text form.
///
/// Unquoted status codes (`200:`) load as integers and become `"200"`.
fn yaml_key(key: &YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(yaml_number(n).to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => yaml_key(&tagged.value),
        YamlValue::Sequence(_) => bail!("Unsupported mapping key: sequence"),
        YamlValue::Mapping(_) => bail!("Unsupported mapping key: mapping"),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Integer(i)
    } else if let Some(u) = n.as_u64() {
        Number::Unsigned(u)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn convert_json_value(value: &JsonValue) -> Node {
    match value {
        JsonValue::Null => Node::Null,
        JsonValue::Bool(b) => Node::Bool(*b),
        JsonValue::Number(n) => Node::Number(if let Some(i) = n.as_i64() {
            Number::Integer(i)
        } else if let Some(u) = n.as_u64() {
            Number::Unsigned(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }),
        JsonValue::String(s) => Node::String(s.clone()),
        JsonValue::Array(items) => Node::Sequence(items.iter().map(convert_json_value).collect()),
        JsonValue::Object(map) => Node::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), convert_json_value(v)))
                .collect(),
        ),
    }
}
