//! Data model for rebuilt trees and log segments.
//!
//! A `Node` never changes variant after the parser builds it, and trees
//! are immutable once returned.

use crate::aggregator::TreeStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single node of a rebuilt tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Pointer value from the dumping process
    pub pointer: u64,

    /// Display name assigned by the namer
    pub name: String,

    /// Leading spaces on the node's header line
    pub depth: usize,

    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Internal vs leaf payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Internal {
        /// Separator keys, normally `children.len() - 1` of them
        separators: Vec<String>,
        children: Vec<Node>,
    },
    Leaf {
        /// Key/value pairs in dump order
        entries: Vec<(String, String)>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Direct children; empty for leaves
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Internal { children, .. } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Separator keys; empty for leaves
    pub fn separators(&self) -> &[String] {
        match &self.kind {
            NodeKind::Internal { separators, .. } => separators,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Leaf entries; empty for internal nodes
    pub fn entries(&self) -> &[(String, String)] {
        match &self.kind {
            NodeKind::Internal { .. } => &[],
            NodeKind::Leaf { entries } => entries,
        }
    }

    /// Pre-order walk: parent first, children left to right
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// A rebuilt tree, wrapping its root node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        self.root.walk(&mut |n| nodes.push(n));
        nodes
    }
}

/// Key a segment was dumped for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SegmentKey {
    /// Key of the `INSERT` event that preceded the dump
    Insert(i64),
    /// Text reported by `Failed on key:`
    Failure(String),
}

impl SegmentKey {
    pub fn is_failure(&self) -> bool {
        matches!(self, SegmentKey::Failure(_))
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKey::Insert(k) => write!(f, "{}", k),
            SegmentKey::Failure(k) => write!(f, "{}", k),
        }
    }
}

/// Raw dump lines of one event, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSegment {
    pub key: SegmentKey,

    /// Lines as they appeared in the log, glog prefix included
    pub lines: Vec<String>,

    /// 1-based log line where the segment's event was reported
    pub start_line: usize,
}

/// Top-level summary written by `inspect --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file the segments came from
    pub source: String,

    /// Timestamp when the summary was generated
    pub generated_at: String,

    pub segments: Vec<SegmentSummary>,

    /// Pointer names in first-sighting order
    pub names: Vec<NameBinding>,
}

/// One parsed segment of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub index: usize,
    pub key: SegmentKey,
    pub start_line: usize,
    pub stats: TreeStats,
    pub tree: Tree,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBinding {
    pub pointer: u64,
    pub name: String,
}
