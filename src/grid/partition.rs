//! Grid-partition arithmetic mapping a pointer position to a cell.

use crate::foundation::core::{CellIndex, GridShape, Point, SurfaceDims};

/// Raw result of resolving a pointer position against one grid shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSlot {
    /// Pixel origin (left, top) of the containing cell.
    pub origin: (i64, i64),
    /// Computed linear cell id. Outside `[0, rows * cols)`, including
    /// negative values, when the position falls outside the surface.
    pub cell: i64,
    /// Uniform cell extent (width, height).
    pub extent: (i64, i64),
}

impl CellSlot {
    /// Whether this slot addresses the cell named by `index`.
    pub fn matches(self, index: CellIndex) -> bool {
        self.cell == i64::from(index.cell)
    }
}

/// Resolve which cell of `shape` contains `pos` on a surface of `dims`.
///
/// Cell extents are integer divisions of the surface extents; remainder
/// pixels are not distributed, so on non-divisible dimensions the last row
/// and column are clipped in practice while the computed extent stays
/// uniform. No bounds clamping is performed: positions outside
/// `[0, W) x [0, H)` produce an out-of-range cell id, which callers treat as
/// "no matching cell".
pub fn resolve_cell(pos: Point, shape: GridShape, dims: SurfaceDims) -> CellSlot {
    let cw = i64::from(dims.width / shape.cols);
    let ch = i64::from(dims.height / shape.rows);
    // f64 division: a degenerate surface (extent smaller than the grid)
    // yields a non-finite quotient, and the saturating cast turns it into an
    // out-of-range id instead of a panic.
    let col = (pos.x / cw as f64).floor() as i64;
    let row = (pos.y / ch as f64).floor() as i64;
    CellSlot {
        origin: (col.saturating_mul(cw), row.saturating_mul(ch)),
        cell: row.saturating_mul(i64::from(shape.cols)).saturating_add(col),
        extent: (cw, ch),
    }
}
