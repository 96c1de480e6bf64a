//! Circular layout: nodes evenly spaced on a ring around the origin

use std::f64::consts::TAU;

use crate::graph::model::Position;
use crate::resource::Resource;

/// Minimum ring radius
const MIN_RADIUS: f64 = 400.0;
/// Radius gained per node
const RADIUS_PER_NODE: f64 = 50.0;

/// Place all resources at equal angular steps on a ring whose radius
/// grows with the resource count.
pub(super) fn positions(resources: &[Resource]) -> Vec<Position> {
    let count = resources.len();
    if count == 0 {
        return Vec::new();
    }

    let radius = (RADIUS_PER_NODE * count as f64).max(MIN_RADIUS);
    let step = TAU / count as f64;

    (0..count)
        .map(|index| {
            let angle = step * index as f64;
            Position {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect()
}
