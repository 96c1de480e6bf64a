//! Grouped layout: service grids flowing left to right with row wrapping

use super::{grid_columns, group_indices, LayoutOptions};
use crate::graph::model::Position;
use crate::resource::Resource;

/// Horizontal budget before a new row of service groups starts
const ROW_WIDTH: f64 = 1500.0;

/// Place service grids along a horizontal cursor, wrapping to a new row of
/// groups once the next grid would exceed the width budget.
pub(super) fn positions(resources: &[Resource], options: &LayoutOptions) -> Vec<Position> {
    let mut positions = vec![Position::default(); resources.len()];
    let h = options.horizontal_spacing;
    let v = options.vertical_spacing;

    let mut x_cursor = 0.0;
    let mut y_cursor = 0.0;
    let mut row_height = 0.0f64;

    let services = group_indices(0..resources.len(), resources, |r| r.service_type.as_str());
    for (_, group) in services {
        let columns = grid_columns(group.len());
        let rows = group.len().div_ceil(columns);
        let group_width = columns as f64 * h;

        if x_cursor > 0.0 && x_cursor + group_width > ROW_WIDTH {
            x_cursor = 0.0;
            y_cursor += row_height + v;
            row_height = 0.0;
        }

        for (offset, index) in group.iter().copied().enumerate() {
            positions[index] = Position {
                x: x_cursor + (offset % columns) as f64 * h,
                y: y_cursor + (offset / columns) as f64 * v,
            };
        }

        row_height = row_height.max(rows as f64 * v);
        x_cursor += group_width + h;
    }

    positions
}
