//! Text rendering of query results.
//!
//! Renderers return lines or strings instead of printing, so the command layer
//! decides where output goes and tests can assert on exact text.

pub mod detail;
pub mod dump;

pub use detail::{render_operation, render_routes};
pub use dump::{render_schema, DumpFormat};
