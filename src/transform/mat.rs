//! Matrix helpers.

use crate::foundation::core::Mat4;

#[inline]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

#[inline]
pub fn compose(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}
