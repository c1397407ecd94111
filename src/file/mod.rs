//! File I/O operations for OpenAPI documents.
//!
//! This module loads documents from disk or stdin, transparently handling
//! gzip-compressed input and choosing between the JSON and YAML parsers.

pub mod loader;
