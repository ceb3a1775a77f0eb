//! Graphviz document generation for rebuilt trees.
//!
//! Internal nodes are declared with a record-style label listing their
//! separators, followed by one edge per child. Leaves are not declared;
//! each leaf gets an edge to a synthetic `K<key>` node per entry, so the
//! same key stored in two leaves shows up as a shared target.
//!
//! Traversal is pre-order, children left to right, which keeps output
//! deterministic for a given input and namer state.

use crate::parser::schema::{Node, NodeKind, Tree};
use crate::utils::config::{DEFAULT_GRAPH_NAME, DEFAULT_KEY_PREFIX};
use log::debug;
use std::borrow::Cow;

/// Graph document configuration
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Name after `digraph`
    pub graph_name: String,
    /// Prefix for leaf entry targets
    pub key_prefix: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }
}

/// Generate a `digraph` document for a tree
///
/// **Public** - main entry point for graph emission
///
/// # Example
/// ```ignore
/// let tree = parse_tree_str("leaf 0x1: [1=a]", &mut NodeNamer::new())?;
/// let dot = generate_dot(&tree, None);
/// assert!(dot.contains("N0 -> K1;"));
/// ```
pub fn generate_dot(tree: &Tree, config: Option<&GraphConfig>) -> String {
    let config = config.cloned().unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("digraph {} {{\n", dot_id(&config.graph_name)));
    emit_node(&tree.root, &config, &mut out);
    out.push_str("}\n");

    debug!("Generated graph document ({} bytes)", out.len());
    out
}

/// Emit one node and its subtree
///
/// **Private** - recursive step of generate_dot
fn emit_node(node: &Node, config: &GraphConfig, out: &mut String) {
    let name = dot_id(&node.name);

    match &node.kind {
        NodeKind::Internal {
            separators,
            children,
        } => {
            let label = format!("{} |{}|", node.name, separators.join("|"));
            out.push_str(&format!("{}[label=\"{}\"]\n", name, escape_label(&label)));
            for child in children {
                out.push_str(&format!("{} -> {};\n", name, dot_id(&child.name)));
                emit_node(child, config, out);
            }
        }
        NodeKind::Leaf { entries } => {
            for (key, _) in entries {
                let target = format!("{}{}", config.key_prefix, key);
                out.push_str(&format!("{} -> {};\n", name, dot_id(&target)));
            }
        }
    }
}

/// Quote an identifier unless it is a plain DOT ID
fn dot_id(id: &str) -> Cow<'_, str> {
    let plain = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(format!("\"{}\"", escape_label(id)))
    }
}

fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Indented plain-text outline of a tree
///
/// **Public** - terminal-friendly alternative to the graph document
///
/// ```text
/// N0 [0x10] |5|
///   N1 [0x20] 1=a 3=b
///   N2 [0x30] 6=c
/// ```
pub fn generate_text_outline(tree: &Tree) -> String {
    let mut out = String::new();
    outline_node(&tree.root, 0, &mut out);
    out
}

fn outline_node(node: &Node, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);

    match &node.kind {
        NodeKind::Internal {
            separators,
            children,
        } => {
            out.push_str(&format!(
                "{}{} [{:#x}] |{}|\n",
                indent,
                node.name,
                node.pointer,
                separators.join("|")
            ));
            for child in children {
                outline_node(child, level + 1, out);
            }
        }
        NodeKind::Leaf { entries } => {
            let entries: Vec<String> = entries.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            let line = format!("{}{} [{:#x}] {}", indent, node.name, node.pointer, entries.join(" "));
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
}
