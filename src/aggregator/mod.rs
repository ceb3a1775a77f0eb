//! Aggregation of rebuilt trees into structural statistics.

pub mod metrics;

// Re-export main types and functions
pub use metrics::{calculate_tree_stats, separators_match, TreeStats};
