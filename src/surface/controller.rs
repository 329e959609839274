//! Surface controller: per-cell transform state plus interaction flags.

use crate::foundation::core::{
    CellIndex, CellViewport, Mat4, Point, PointerButton, SurfaceDims, SurfaceId,
};
use crate::registry::transforms::TransformRegistry;
use crate::transform::mat;

const DEFAULT_DIMS: SurfaceDims = SurfaceDims {
    width: 512,
    height: 512,
};

/// Transform-state owner for one rendering surface.
///
/// One controller exists per surface, created by the window-lifecycle
/// collaborator with an allocated [`SurfaceId`] and the initial pixel extent.
/// The renderer queries viewports and matrices from it once per cell per
/// frame; the input collaborator feeds it resize notifications, pointer
/// state, and freshly computed matrices. The controller itself never produces
/// matrix values, it only stores and retrieves them, keyed by cell.
///
/// Registries start empty and populate on demand; resizing mutates the
/// dimensions in place and leaves every stored matrix untouched.
#[derive(Clone, Debug)]
pub struct SurfaceController {
    id: SurfaceId,
    dims: SurfaceDims,
    view: TransformRegistry,
    orientation: TransformRegistry,
    last_pos: Point,
    button: Option<PointerButton>,
    rotating: bool,
    close_requested: bool,
}

impl SurfaceController {
    pub fn new(id: SurfaceId, dims: SurfaceDims) -> Self {
        Self {
            id,
            dims,
            view: TransformRegistry::new(),
            orientation: TransformRegistry::new(),
            last_pos: Point::ZERO,
            button: None,
            rotating: false,
            close_requested: false,
        }
    }

    /// Headless construction at the conventional 512x512 extent.
    pub fn with_default_dims(id: SurfaceId) -> Self {
        Self::new(id, DEFAULT_DIMS)
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn dims(&self) -> SurfaceDims {
        self.dims
    }

    pub fn view(&self) -> &TransformRegistry {
        &self.view
    }

    pub fn orientation(&self) -> &TransformRegistry {
        &self.orientation
    }

    #[tracing::instrument(skip(self))]
    /// Pixel rectangle of the cell containing `pos`.
    ///
    /// Either registry could locate the pointer's cell; the orientation
    /// registry is the one scanned. Falls back to the full-surface rectangle
    /// when nothing matches, including the empty-registry case.
    pub fn cell_viewport(&self, pos: Point) -> CellViewport {
        self.orientation
            .viewport_at(pos, self.dims)
            .unwrap_or_else(|| CellViewport::full_surface(self.dims))
    }

    /// View matrix for `index`, materializing identity for unseen cells.
    pub fn view_matrix(&mut self, index: CellIndex) -> Mat4 {
        self.view.materialize(index)
    }

    /// Orientation matrix for `index`, materializing identity for unseen
    /// cells.
    pub fn orientation_matrix(&mut self, index: CellIndex) -> Mat4 {
        self.orientation.materialize(index)
    }

    pub fn peek_view_matrix(&self, index: CellIndex) -> Option<Mat4> {
        self.view.peek(index)
    }

    pub fn peek_orientation_matrix(&self, index: CellIndex) -> Option<Mat4> {
        self.orientation.peek(index)
    }

    /// View matrix of the materialized cell containing `pos`, identity when
    /// no cell matches.
    pub fn view_matrix_at(&self, pos: Point) -> Mat4 {
        self.view
            .find_at(pos, self.dims)
            .unwrap_or_else(mat::identity)
    }

    /// Orientation matrix of the materialized cell containing `pos`,
    /// identity when no cell matches.
    pub fn orientation_matrix_at(&self, pos: Point) -> Mat4 {
        self.orientation
            .find_at(pos, self.dims)
            .unwrap_or_else(mat::identity)
    }

    #[tracing::instrument(skip(self, matrix))]
    /// Store `matrix` as the view matrix of the cell containing `pos`.
    ///
    /// No-op returning `false` when no materialized cell matches; interaction
    /// code is expected to probe first via a viewport or index query.
    pub fn set_cell_view_matrix(&mut self, pos: Point, matrix: Mat4) -> bool {
        self.view.set_at(pos, self.dims, matrix)
    }

    #[tracing::instrument(skip(self, matrix))]
    /// Store `matrix` as the orientation matrix of the cell containing `pos`.
    pub fn set_cell_orientation_matrix(&mut self, pos: Point, matrix: Mat4) -> bool {
        self.orientation.set_at(pos, self.dims, matrix)
    }

    pub fn reset_view_matrices(&mut self) {
        self.view.reset();
    }

    pub fn reset_orientation_matrices(&mut self) {
        self.orientation.reset();
    }

    /// Update the surface extent. Existing per-cell matrices survive; only
    /// viewport geometry recomputes on the next query.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.dims = SurfaceDims { width, height };
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    /// Clear a pending close request, re-opening the surface for toolkits
    /// that hide rather than destroy. Inert when no close was requested.
    pub fn reset_close_flag(&mut self) {
        self.close_requested = false;
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        self.last_pos = pos;
    }

    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    pub fn button_pressed(&mut self, button: PointerButton) {
        self.button = Some(button);
    }

    pub fn button_released(&mut self) {
        self.button = None;
    }

    pub fn button(&self) -> Option<PointerButton> {
        self.button
    }

    pub fn set_rotating(&mut self, rotating: bool) {
        self.rotating = rotating;
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Serializable diagnostic view of this surface's addressable state.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        fn cells(registry: &TransformRegistry) -> Vec<CellState> {
            registry
                .entries()
                .map(|(index, matrix)| CellState { index, matrix })
                .collect()
        }

        SurfaceSnapshot {
            id: self.id,
            width: self.dims.width,
            height: self.dims.height,
            close_requested: self.close_requested,
            rotating: self.rotating,
            view: cells(&self.view),
            orientation: cells(&self.orientation),
        }
    }
}

/// One registry entry as captured by [`SurfaceController::snapshot`].
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct CellState {
    /// Cell identity.
    pub index: CellIndex,
    /// Stored matrix at capture time.
    pub matrix: Mat4,
}

/// Point-in-time diagnostic view of a surface. In-memory only; nothing in
/// panegrid persists state across surface recreation.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SurfaceSnapshot {
    /// Surface identity.
    pub id: SurfaceId,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Whether a close has been requested and not yet cleared.
    pub close_requested: bool,
    /// Whether a rotation gesture is in progress.
    pub rotating: bool,
    /// View registry entries in insertion order.
    pub view: Vec<CellState>,
    /// Orientation registry entries in insertion order.
    pub orientation: Vec<CellState>,
}

#[cfg(test)]
#[path = "../../tests/unit/surface/controller.rs"]
mod tests;
