//! Layered layout: one centered row per service tier

use super::{group_indices, LayoutOptions};
use crate::graph::model::Position;
use crate::resource::Resource;

/// Place each tier's resources in a single row centered on x = 0, with
/// tier number selecting the row.
pub(super) fn positions(resources: &[Resource], options: &LayoutOptions) -> Vec<Position> {
    let mut positions = vec![Position::default(); resources.len()];

    let mut tiers = group_indices(0..resources.len(), resources, |r| {
        options.tiers.tier(r.family())
    });
    tiers.sort_by_key(|(tier, _)| *tier);

    for (tier, members) in tiers {
        let width = (members.len() - 1) as f64 * options.horizontal_spacing;
        for (offset, index) in members.iter().copied().enumerate() {
            positions[index] = Position {
                x: offset as f64 * options.horizontal_spacing - width / 2.0,
                y: f64::from(tier) * options.vertical_spacing,
            };
        }
    }

    positions
}
