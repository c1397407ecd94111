//! Structured dumps of raw schema sub-trees.

use crate::document::node::Node;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for `schema` dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Yaml,
    Json,
}

impl DumpFormat {
    /// Parses a format name case-insensitively (`"yaml"`, `"JSON"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Serializes a node for display, without a trailing newline.
///
/// `indent_size` applies to JSON output; YAML uses serde_yaml's fixed layout.
/// JSON has no representation for `.nan` or `.inf`, so those floats dump as
/// `null` in JSON output.
///
/// # Example
///
/// ```
/// use openapi_inspect::document::parser::parse_yaml;
/// use openapi_inspect::output::{render_schema, DumpFormat};
///
/// let doc = parse_yaml("type: object\nx: 1\n").unwrap();
/// let text = render_schema(doc.root(), DumpFormat::Json, 2).unwrap();
/// assert_eq!(text, "{\n  \"type\": \"object\",\n  \"x\": 1\n}");
/// ```
pub fn render_schema(node: &Node, format: DumpFormat, indent_size: usize) -> Result<String> {
    let mut text = match format {
        DumpFormat::Yaml => serde_yaml::to_string(node).context("Failed to serialize schema")?,
        DumpFormat::Json => to_json_pretty(node, indent_size)?,
    };

    while text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

fn to_json_pretty(node: &Node, indent_size: usize) -> Result<String> {
    let indent = " ".repeat(indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    node.serialize(&mut serializer)
        .context("Failed to serialize schema")?;
    String::from_utf8(buffer).context("Serialized schema is not valid UTF-8")
}
