//! Edge selection state
//!
//! UI state layered on top of a built graph. Selection marks edges for
//! highlighting; it never adds or removes them.

use std::collections::HashSet;

use super::model::Graph;

/// Set of edge ids currently selected
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an edge as selected
    pub fn select(&mut self, edge_id: impl Into<String>) {
        self.selected.insert(edge_id.into());
    }

    /// Unmark an edge
    pub fn deselect(&mut self, edge_id: &str) {
        self.selected.remove(edge_id);
    }

    /// Flip an edge's state, returning whether it is now selected
    pub fn toggle(&mut self, edge_id: &str) -> bool {
        if self.selected.remove(edge_id) {
            false
        } else {
            self.selected.insert(edge_id.to_string());
            true
        }
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether the edge id is selected
    #[must_use]
    pub fn is_selected(&self, edge_id: &str) -> bool {
        self.selected.contains(edge_id)
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Mark the graph's edges to match this selection
    pub fn apply_to(&self, graph: &mut Graph) {
        for edge in &mut graph.edges {
            edge.selected = self.selected.contains(&edge.id);
        }
    }
}
