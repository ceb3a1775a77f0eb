//! cbtree-viz
//!
//! Rebuilds the concurrent B-tree a program believed it had from the tree
//! dumps in its debug log, and emits Graphviz documents for inspection.
//!
//! Pipeline: log file → segments (one per `INSERT`/failure event) →
//! parsed trees → `digraph` documents → rendered images.
//!
//! ## Getting Started
//!
//! ```bash
//! cbtree-viz render --log logs/wrong_tree_key_38 --out-dir graphs
//! cbtree-viz --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod utils;
