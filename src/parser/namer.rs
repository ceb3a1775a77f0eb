//! Stable display names for node pointers.
//!
//! The first time a pointer is seen it gets the next name (`N0`, `N1`, ...);
//! every later sighting returns the same name. One registry is shared by all
//! segments of a run so a node that survives between dumps keeps its name.

use crate::utils::config::NODE_NAME_PREFIX;
use std::collections::HashMap;

/// Pointer-to-name registry with first-sighting order
#[derive(Debug, Default, Clone)]
pub struct NodeNamer {
    index: HashMap<u64, usize>,
    order: Vec<u64>,
}

impl NodeNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the name bound to `pointer`, minting one on first sighting
    pub fn resolve(&mut self, pointer: u64) -> String {
        let next = self.order.len();
        let idx = *self.index.entry(pointer).or_insert_with(|| {
            self.order.push(pointer);
            next
        });
        format_name(idx)
    }

    /// Name bound to `pointer` without minting
    pub fn get(&self, pointer: u64) -> Option<String> {
        self.index.get(&pointer).map(|&idx| format_name(idx))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bindings in the order they were minted
    pub fn entries(&self) -> impl Iterator<Item = (u64, String)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(idx, &pointer)| (pointer, format_name(idx)))
    }
}

fn format_name(idx: usize) -> String {
    format!("{}{}", NODE_NAME_PREFIX, idx)
}
