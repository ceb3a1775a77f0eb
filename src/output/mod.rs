//! Output writers for graph documents, images and summaries.
//!
//! This module handles writing data to disk in various formats:
//! - Graphviz `digraph` documents
//! - Rendered images, via an external program
//! - JSON run summaries

pub mod dot;
pub mod json;
pub mod render;

// Re-export main functions
pub use dot::write_dot;
pub use json::{read_summary, write_summary};
pub use render::{GraphvizRenderer, Renderer};
