//! Panegrid is the addressing and transform-state model for a multi-pane
//! rendering surface.
//!
//! A surface (a window or canvas) is subdivided into a rectangular grid of
//! rendering cells, each hosting one independent view. Every cell carries its
//! own view (camera/pan/zoom) and orientation (model rotation/scale) matrix,
//! and pointer input is resolved to the specific cell it targets.
//!
//! # Query flow
//!
//! 1. **Partition**: `pointer position + GridShape + SurfaceDims -> CellSlot`
//!    ([`resolve_cell`], pure arithmetic with no state)
//! 2. **Registry**: `CellIndex -> Mat4` ([`TransformRegistry`], lazily
//!    populated, insertion-ordered, addressable by index or by position)
//! 3. **Controller**: [`SurfaceController`] owns the surface dimensions, one
//!    registry per matrix family, and the interaction flags; renderers query
//!    viewports and matrices from it, the input layer writes matrices into it.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Failure is data**: "no cell matched" is an expected outcome on every
//!   mixed-grid surface and shows up as a `bool`, an `Option`, or a fallback
//!   rectangle, never as an error. The only fatal condition is constructing
//!   a grid shape with zero rows or columns.
//! - **Deterministic addressing**: registries preserve insertion order, so
//!   when differently-shaped sub-grids overlap, position lookups resolve
//!   first-match-wins in a stable order.
//! - **Single-threaded**: a controller is exclusively owned by one surface on
//!   one logical UI/render thread; nothing here blocks, suspends, or spawns.
#![forbid(unsafe_code)]

mod foundation;
mod grid;
mod registry;
mod surface;

/// Shared matrix helpers.
pub mod transform;

pub use foundation::core::{
    CellIndex, CellViewport, GridShape, Mat4, Point, PointerButton, SurfaceDims, SurfaceId,
    SurfaceIdAllocator, Vec2, Vec3,
};
pub use foundation::error::{PanegridError, PanegridResult};
pub use grid::partition::{CellSlot, resolve_cell};
pub use registry::transforms::TransformRegistry;
pub use surface::controller::{CellState, SurfaceController, SurfaceSnapshot};
pub use surface::fingerprint::{SurfaceFingerprint, fingerprint_surface};
