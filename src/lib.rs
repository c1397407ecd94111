//! openapi-inspect: a read-only explorer for OpenAPI 3.x documents.
//!
//! Documents are loaded into a generic tree (`document`), queried without a
//! fixed OpenAPI object model (`query`) and rendered as plain text (`output`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod file;
pub mod output;
pub mod query;
