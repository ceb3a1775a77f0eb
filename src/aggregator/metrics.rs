//! Structural statistics for rebuilt trees.
//!
//! Purely descriptive: separator/child mismatches are reported for the
//! reader, never treated as errors.

use crate::parser::schema::{Node, Tree};
use serde::{Deserialize, Serialize};

/// Shape summary of one tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub internal_nodes: usize,
    pub leaf_nodes: usize,

    /// Levels from root to deepest node; a lone leaf is 1
    pub height: usize,

    pub separators: usize,
    pub leaf_entries: usize,

    /// Internal nodes whose separator count is not children - 1
    pub mismatched_nodes: Vec<String>,
}

impl TreeStats {
    pub fn total_nodes(&self) -> usize {
        self.internal_nodes + self.leaf_nodes
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let mut s = format!(
            "{} internal, {} leaves, height {}, {} separators, {} entries",
            self.internal_nodes, self.leaf_nodes, self.height, self.separators, self.leaf_entries
        );
        if !self.mismatched_nodes.is_empty() {
            s.push_str(&format!(
                ", separator mismatch in {}",
                self.mismatched_nodes.join(",")
            ));
        }
        s
    }
}

/// Compute statistics for a tree
///
/// **Public** - used by the inspect command
pub fn calculate_tree_stats(tree: &Tree) -> TreeStats {
    let mut stats = TreeStats {
        height: node_height(&tree.root),
        ..TreeStats::default()
    };

    tree.root.walk(&mut |node| {
        if node.is_leaf() {
            stats.leaf_nodes += 1;
            stats.leaf_entries += node.entries().len();
        } else {
            stats.internal_nodes += 1;
            stats.separators += node.separators().len();
            if !separators_match(node) {
                stats.mismatched_nodes.push(node.name.clone());
            }
        }
    });

    stats
}

/// Whether an internal node has exactly children - 1 separators
///
/// Leaves always match.
pub fn separators_match(node: &Node) -> bool {
    if node.is_leaf() {
        return true;
    }
    node.separators().len() + 1 == node.children().len()
}

fn node_height(node: &Node) -> usize {
    1 + node.children().iter().map(node_height).max().unwrap_or(0)
}
