//! The generic document tree and its parsers.

pub mod node;
pub mod parser;
pub mod tree;
