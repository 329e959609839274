use super::*;
use crate::GridShape;

fn dims(width: u32, height: u32) -> SurfaceDims {
    SurfaceDims { width, height }
}

fn cell(rows: u32, cols: u32, id: u32) -> CellIndex {
    CellIndex::new(GridShape::new(rows, cols).unwrap(), id).unwrap()
}

fn translation(x: f32) -> Mat4 {
    Mat4::from_translation(glam::Vec3::new(x, 0.0, 0.0))
}

#[test]
fn materialize_inserts_identity_once() {
    let mut reg = TransformRegistry::new();
    assert!(reg.is_empty());

    let idx = cell(2, 2, 0);
    assert_eq!(reg.materialize(idx), Mat4::IDENTITY);
    assert_eq!(reg.len(), 1);

    // Idempotent on repeated calls.
    assert_eq!(reg.materialize(idx), Mat4::IDENTITY);
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.peek(idx), Some(Mat4::IDENTITY));
}

#[test]
fn peek_never_inserts() {
    let reg = TransformRegistry::new();
    assert_eq!(reg.peek(cell(2, 2, 0)), None);
    assert!(reg.is_empty());
}

#[test]
fn set_at_round_trips_after_materialize() {
    let mut reg = TransformRegistry::new();
    let idx = cell(2, 2, 3);
    reg.materialize(idx);

    let mat = translation(5.0);
    assert!(reg.set_at(Point::new(150.0, 160.0), dims(200, 200), mat));
    assert_eq!(reg.peek(idx), Some(mat));
    assert_eq!(reg.materialize(idx), mat);
}

#[test]
fn set_at_without_matching_cell_is_a_reported_noop() {
    let mut reg = TransformRegistry::new();
    let idx = cell(2, 2, 0);
    reg.materialize(idx);

    // (150, 160) resolves to cell 3 of a 2x2 grid; only cell 0 exists.
    assert!(!reg.set_at(Point::new(150.0, 160.0), dims(200, 200), translation(5.0)));
    assert_eq!(reg.peek(idx), Some(Mat4::IDENTITY));
    assert_eq!(reg.len(), 1);
}

#[test]
fn set_at_on_empty_registry_reports_failure() {
    let mut reg = TransformRegistry::new();
    assert!(!reg.set_at(Point::new(10.0, 10.0), dims(200, 200), translation(1.0)));
    assert!(reg.is_empty());
}

#[test]
fn reset_rewrites_values_and_keeps_keys() {
    let mut reg = TransformRegistry::new();
    let a = cell(2, 2, 0);
    let b = cell(2, 2, 3);
    reg.materialize(a);
    reg.materialize(b);
    assert!(reg.set_at(Point::new(10.0, 10.0), dims(200, 200), translation(2.0)));

    reg.reset();
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.peek(a), Some(Mat4::IDENTITY));
    assert_eq!(reg.peek(b), Some(Mat4::IDENTITY));
}

#[test]
fn find_at_returns_stored_matrix_or_none() {
    let mut reg = TransformRegistry::new();
    let idx = cell(2, 2, 0);
    reg.materialize(idx);
    assert!(reg.set_at(Point::new(10.0, 10.0), dims(200, 200), translation(7.0)));

    assert_eq!(
        reg.find_at(Point::new(99.0, 99.0), dims(200, 200)),
        Some(translation(7.0))
    );
    assert_eq!(reg.find_at(Point::new(150.0, 160.0), dims(200, 200)), None);
}

#[test]
fn viewport_at_reports_origin_and_extent() {
    let mut reg = TransformRegistry::new();
    reg.materialize(cell(2, 2, 3));

    let vp = reg
        .viewport_at(Point::new(150.0, 160.0), dims(200, 200))
        .unwrap();
    assert_eq!((vp.x, vp.y), (100, 100));
    assert_eq!((vp.width, vp.height), (100, 100));

    assert!(reg.viewport_at(Point::new(10.0, 10.0), dims(200, 200)).is_none());
}

#[test]
fn mixed_shapes_stay_independently_addressable() {
    let mut reg = TransformRegistry::new();
    let quad = cell(2, 2, 3);
    let whole = cell(1, 1, 0);
    reg.materialize(quad);
    reg.materialize(whole);

    // (10, 10) is cell 0 under both shapes; only the 1x1 entry stores id 0.
    assert!(reg.set_at(Point::new(10.0, 10.0), dims(200, 200), translation(1.0)));
    assert_eq!(reg.peek(whole), Some(translation(1.0)));
    assert_eq!(reg.peek(quad), Some(Mat4::IDENTITY));

    // (150, 160) is cell 3 under the 2x2 shape and cell 0 under the 1x1
    // shape, so both entries match; insertion order decides.
    assert!(reg.set_at(Point::new(150.0, 160.0), dims(200, 200), translation(2.0)));
    assert_eq!(reg.peek(quad), Some(translation(2.0)));
    assert_eq!(reg.peek(whole), Some(translation(1.0)));
}

#[test]
fn cells_iterates_in_insertion_order() {
    let mut reg = TransformRegistry::new();
    let first = cell(3, 1, 2);
    let second = cell(2, 2, 1);
    reg.materialize(first);
    reg.materialize(second);
    assert_eq!(reg.cells().collect::<Vec<_>>(), vec![first, second]);
}
