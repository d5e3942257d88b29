/// Transforms from diagram canvas units to raster grids
use nalgebra::{Matrix3, Point2, Vector2};

use crate::projection::Layout;

/// Transform builder for raster previews of the diagram
pub struct Transform;

impl Transform {
    /// Scale matrix mapping the canvas onto a `cols` x `rows` grid.
    ///
    /// The canvas corners land on the first and last cells, so both edges
    /// stay addressable. An empty canvas axis collapses onto the first cell.
    pub fn canvas_to_grid(layout: &Layout, cols: usize, rows: usize) -> Matrix3<f32> {
        let sx = grid_scale(cols, layout.canvas_width);
        let sy = grid_scale(rows, layout.canvas_height);
        Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy))
    }

    /// Nearest grid cell as `(col, row)`
    pub fn to_cell(matrix: &Matrix3<f32>, point: &Point2<f32>) -> (i32, i32) {
        let cell = matrix.transform_point(point);
        (cell.x.round() as i32, cell.y.round() as i32)
    }
}

fn grid_scale(cells: usize, extent: f32) -> f32 {
    if extent > 0.0 {
        cells.saturating_sub(1) as f32 / extent
    } else {
        0.0
    }
}
