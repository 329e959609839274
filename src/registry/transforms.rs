//! Lazily-populated per-cell transform registries.

use crate::foundation::core::{CellIndex, CellViewport, Mat4, Point, SurfaceDims};
use crate::grid::partition::resolve_cell;
use crate::transform::mat;

/// Insertion-ordered mapping from [`CellIndex`] to a transform matrix.
///
/// A surface keeps two of these, one for view matrices and one for
/// orientation matrices. Keys are inserted lazily by [`materialize`] and the
/// mapping never shrinks during a surface's lifetime; [`reset`] rewrites
/// values but keeps keys.
///
/// Position-based operations scan entries front-to-back, recomputing the
/// partition from each entry's own grid shape, and take the first entry whose
/// stored cell id matches. One surface may therefore host cells of several
/// grid shapes at once, and overlap between shapes resolves deterministically
/// in insertion order.
///
/// [`materialize`]: TransformRegistry::materialize
/// [`reset`]: TransformRegistry::reset
#[derive(Clone, Debug, Default)]
pub struct TransformRegistry {
    entries: Vec<(CellIndex, Mat4)>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored matrix for `index`. Pure read, never inserts.
    pub fn peek(&self, index: CellIndex) -> Option<Mat4> {
        self.entries
            .iter()
            .find(|(idx, _)| *idx == index)
            .map(|(_, m)| *m)
    }

    /// Stored matrix for `index`, inserting identity first when absent.
    ///
    /// Materializing is what makes a cell addressable by position later on;
    /// idempotent on repeated calls.
    pub fn materialize(&mut self, index: CellIndex) -> Mat4 {
        if let Some(m) = self.peek(index) {
            return m;
        }
        self.entries.push((index, mat::identity()));
        mat::identity()
    }

    /// Overwrite the matrix of the first materialized cell containing `pos`.
    ///
    /// Returns `false` and changes nothing when no entry matches; a cell must
    /// be materialized by index before it can be targeted by position.
    pub fn set_at(&mut self, pos: Point, dims: SurfaceDims, matrix: Mat4) -> bool {
        for (index, stored) in &mut self.entries {
            if resolve_cell(pos, index.shape, dims).matches(*index) {
                *stored = matrix;
                return true;
            }
        }
        false
    }

    /// Matrix of the first materialized cell containing `pos`, if any.
    pub fn find_at(&self, pos: Point, dims: SurfaceDims) -> Option<Mat4> {
        self.entries
            .iter()
            .find(|(index, _)| resolve_cell(pos, index.shape, dims).matches(*index))
            .map(|(_, m)| *m)
    }

    /// Viewport rectangle of the first materialized cell containing `pos`.
    pub fn viewport_at(&self, pos: Point, dims: SurfaceDims) -> Option<CellViewport> {
        self.entries.iter().find_map(|(index, _)| {
            let slot = resolve_cell(pos, index.shape, dims);
            slot.matches(*index).then_some(CellViewport {
                x: slot.origin.0,
                y: slot.origin.1,
                width: slot.extent.0,
                height: slot.extent.1,
            })
        })
    }

    /// Reset every stored matrix to identity, keeping the keys.
    pub fn reset(&mut self) {
        for (_, stored) in &mut self.entries {
            *stored = mat::identity();
        }
    }

    /// Registered cells in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.entries.iter().map(|(index, _)| *index)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (CellIndex, Mat4)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/transforms.rs"]
mod tests;
