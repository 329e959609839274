use crate::foundation::math::Fnv1a64;
use crate::surface::controller::SurfaceController;

/// 128-bit fingerprint of a surface's renderer-visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Fingerprint the surface dimensions plus both registries.
///
/// Two surfaces with equal fingerprints answer every viewport and matrix
/// query identically, so a renderer may skip redrawing a surface whose
/// fingerprint has not changed since the last frame. Interaction state and
/// the close flag do not affect what renders and are not hashed.
pub fn fingerprint_surface(surface: &SurfaceController) -> SurfaceFingerprint {
    let mut a = Fnv1a64::new(0xcbf2_9ce4_8422_2325);
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, u64::from(surface.dims().width));
    write_u64_pair(&mut a, &mut b, u64::from(surface.dims().height));

    for registry in [surface.view(), surface.orientation()] {
        write_u64_pair(&mut a, &mut b, registry.len() as u64);
        for (index, matrix) in registry.entries() {
            write_u64_pair(&mut a, &mut b, u64::from(index.shape.rows));
            write_u64_pair(&mut a, &mut b, u64::from(index.shape.cols));
            write_u64_pair(&mut a, &mut b, u64::from(index.cell));
            for c in matrix.to_cols_array() {
                write_u32_pair(&mut a, &mut b, c.to_bits());
            }
        }
    }

    SurfaceFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u32_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u32) {
    a.write_u32(v);
    b.write_u32(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}
