//! Frosty math - the vector kernel shared by every other crate.
//!
//! Vectors are double precision `glam` vectors. All operations return new
//! values; nothing here mutates in place.

// Re-export glam's double precision vector as the kernel type
pub use glam::DVec3 as Vec3;

mod angle;
mod interval;
mod ray;

pub use angle::Angle;
pub use interval::Interval;
pub use ray::Ray;

/// Return `v` scaled to unit length.
///
/// Panics if `v` has zero length. A zero vector reaching this point means an
/// upstream stage produced degenerate geometry.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    let magnitude = v.length();
    assert!(
        magnitude > 0.0,
        "cannot normalize a zero-length vector ({v})"
    );
    v / magnitude
}
