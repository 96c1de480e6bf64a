//! Layout module: Plane coordinates for diagram nodes
//!
//! Four deterministic strategies assign a position to every resource.
//! Grouping preserves first-appearance order, so positions never depend on
//! hash iteration order and identical inputs yield identical output.

mod circular;
mod grouped;
mod layered;
mod regional;
mod tiers;

use serde::{Deserialize, Serialize};

pub use tiers::TierTable;

use super::model::Position;
use crate::resource::Resource;

/// Layout strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyKind {
    /// Regions stacked vertically, service grids side by side within each
    Regional,
    /// One horizontally-centered row per service tier
    Layered,
    /// Service grids flowing left to right with row wrapping
    Grouped,
    /// All nodes evenly spaced on a ring around the origin
    Circular,
}

/// Layout configuration
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Vertical distance between node rows
    pub vertical_spacing: f64,
    /// Horizontal distance between node columns
    pub horizontal_spacing: f64,
    /// Strategy used to place nodes
    pub hierarchy: HierarchyKind,
    /// Tier assignment used by the layered strategy
    pub tiers: TierTable,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            vertical_spacing: 150.0,
            horizontal_spacing: 180.0,
            hierarchy: HierarchyKind::Regional,
            tiers: TierTable::default(),
        }
    }
}

/// Assign a position to every resource, in input order
#[must_use]
pub fn positions(resources: &[Resource], options: &LayoutOptions) -> Vec<Position> {
    match options.hierarchy {
        HierarchyKind::Regional => regional::positions(resources, options),
        HierarchyKind::Layered => layered::positions(resources, options),
        HierarchyKind::Grouped => grouped::positions(resources, options),
        HierarchyKind::Circular => circular::positions(resources),
    }
}

/// Group resource indices by a key, preserving first-appearance order of
/// keys and input order within each group.
pub(crate) fn group_indices<'a, K, F>(
    indices: impl IntoIterator<Item = usize>,
    resources: &'a [Resource],
    key: F,
) -> Vec<(K, Vec<usize>)>
where
    K: PartialEq,
    F: Fn(&'a Resource) -> K,
{
    let mut groups: Vec<(K, Vec<usize>)> = Vec::new();
    for index in indices {
        let k = key(&resources[index]);
        if let Some((_, members)) = groups.iter_mut().find(|(existing, _)| *existing == k) {
            members.push(index);
        } else {
            groups.push((k, vec![index]));
        }
    }
    groups
}

/// Columns for a roughly square grid of `n` nodes
pub(crate) fn grid_columns(n: usize) -> usize {
    let columns = (n as f64).sqrt().ceil() as usize;
    columns.max(1)
}

#[cfg(test)]
mod tests;
