use crate::Vec3;
use serde::Deserialize;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length; routines that need a
/// normalized direction say so.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
