//! Regional layout: regions stacked vertically, service grids side by side

use super::{grid_columns, group_indices, LayoutOptions};
use crate::graph::model::Position;
use crate::resource::Resource;

/// Place each region's resources in a horizontal band of service grids.
///
/// The vertical cursor advances by at least the tallest grid in the band,
/// so no two regions' bands overlap.
pub(super) fn positions(resources: &[Resource], options: &LayoutOptions) -> Vec<Position> {
    let mut positions = vec![Position::default(); resources.len()];
    let h = options.horizontal_spacing;
    let v = options.vertical_spacing;

    let mut y_cursor = 0.0;
    for (_, members) in group_indices(0..resources.len(), resources, |r| r.region.as_str()) {
        let mut x_cursor = 0.0;
        let mut band_height = 0.0f64;

        let services = group_indices(members.iter().copied(), resources, |r| {
            r.service_type.as_str()
        });
        for (_, group) in services {
            let columns = grid_columns(group.len());
            for (offset, index) in group.iter().copied().enumerate() {
                positions[index] = Position {
                    x: x_cursor + (offset % columns) as f64 * h,
                    y: y_cursor + (offset / columns) as f64 * v,
                };
            }
            let rows = group.len().div_ceil(columns);
            band_height = band_height.max(rows as f64 * v);
            x_cursor += columns as f64 * h + h;
        }

        y_cursor += band_height + v;
    }

    positions
}
