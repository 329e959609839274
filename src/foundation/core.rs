use crate::foundation::error::{PanegridError, PanegridResult};

pub use glam::{Mat4, Vec3};
pub use kurbo::{Point, Vec2};

/// Shape of the cell grid a surface is partitioned into.
///
/// A shape always has at least one row and one column; [`GridShape::new`] is
/// the only sanctioned constructor and rejects zero extents, which keeps the
/// partition arithmetic downstream free of division-by-zero checks.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridShape {
    pub rows: u32, // must be > 0
    pub cols: u32, // must be > 0
}

impl GridShape {
    pub fn new(rows: u32, cols: u32) -> PanegridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PanegridError::validation("GridShape rows/cols must be > 0"));
        }
        Ok(Self { rows, cols })
    }

    pub fn cell_count(self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }
}

/// Identity of one cell within a specific grid shape.
///
/// Two indices are equal iff rows, cols and linear id all match; a cell of a
/// 2x2 layout is never the same key as a cell of a 3x1 layout, even when the
/// linear ids coincide. The linear id is `col + row * cols`, 0-based.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellIndex {
    pub shape: GridShape,
    pub cell: u32, // in [0, rows * cols)
}

impl CellIndex {
    pub fn new(shape: GridShape, cell: u32) -> PanegridResult<Self> {
        if cell >= shape.cell_count() {
            return Err(PanegridError::validation(format!(
                "cell id {cell} is out of range for a {}x{} grid",
                shape.rows, shape.cols
            )));
        }
        Ok(Self { shape, cell })
    }

    /// Index of the cell at `(row, col)` within `shape`.
    pub fn from_row_col(shape: GridShape, row: u32, col: u32) -> PanegridResult<Self> {
        if row >= shape.rows || col >= shape.cols {
            return Err(PanegridError::validation(format!(
                "cell ({row}, {col}) is out of range for a {}x{} grid",
                shape.rows, shape.cols
            )));
        }
        Ok(Self {
            shape,
            cell: col + row * shape.cols,
        })
    }

    pub fn row(self) -> u32 {
        self.cell / self.shape.cols
    }

    pub fn col(self) -> u32 {
        self.cell % self.shape.cols
    }
}

/// Current pixel extent of a rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceDims {
    pub width: u32,
    pub height: u32,
}

/// Pixel rectangle a renderer binds before drawing one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellViewport {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl CellViewport {
    /// The safe default when no cell matches a query: the whole surface.
    pub fn full_surface(dims: SurfaceDims) -> Self {
        Self {
            x: 0,
            y: 0,
            width: i64::from(dims.width),
            height: i64::from(dims.height),
        }
    }
}

/// Pointer button currently pressed on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Synthetic identifier of one surface, for headless operation and logging.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceId(pub u64);

/// Monotonically-increasing surface id source.
///
/// Owned by the surface-lifecycle collaborator and passed in at construction
/// time; ids are never read from shared process state. The first id handed
/// out is 1.
#[derive(Clone, Debug)]
pub struct SurfaceIdAllocator {
    next: u64,
}

impl SurfaceIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next);
        self.next += 1;
        id
    }
}

impl Default for SurfaceIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
