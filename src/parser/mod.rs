//! Log segmentation and tree parsing.
//!
//! This module handles:
//! - Stripping glog prefixes from dump lines
//! - Splitting a log into per-event segments
//! - Rebuilding trees from indented dumps
//! - Naming node pointers consistently across a run

pub mod cursor;
pub mod line;
pub mod log_segmenter;
pub mod namer;
pub mod schema;
pub mod tree_parser;

// Re-export main types
pub use line::normalize_line;
pub use log_segmenter::{load_segments, segment_log, LogSegmenter};
pub use namer::NodeNamer;
pub use schema::{
    LogSegment, NameBinding, Node, NodeKind, RunSummary, SegmentKey, SegmentSummary, Tree,
};
pub use tree_parser::{parse_segment, parse_tree, parse_tree_str};
