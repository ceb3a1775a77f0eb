//! Graph document generation.
//!
//! This module converts rebuilt trees into Graphviz `digraph` documents
//! and plain-text outlines.

pub mod generator;

// Re-export main types
pub use generator::{generate_dot, generate_text_outline, GraphConfig};
