//! Camera placement and the derived vantage point.

use frosty_math::{unit, Angle, Ray, Vec3};
use serde::Deserialize;

/// A camera defined by the image plane it looks through.
///
/// `loc.origin` is the center of the image plane and `loc.direction` is the
/// forward axis. There is no roll: the top and bottom edges of the image
/// plane stay parallel to the xz plane.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Camera {
    /// Image plane center and forward direction
    pub loc: Ray,
    /// Physical width of the image plane
    pub width: f64,
    /// Horizontal angle of view
    pub haov: Angle,
    /// Aspect ratio: height / width
    pub aspect: f64,
}

impl Camera {
    pub fn new(loc: Ray, width: f64, haov: Angle, aspect: f64) -> Self {
        Self {
            loc,
            width,
            haov,
            aspect,
        }
    }

    /// Physical height of the image plane.
    pub fn height(&self) -> f64 {
        self.width * self.aspect
    }

    /// Unit forward direction.
    pub fn forward(&self) -> Vec3 {
        unit(self.loc.direction)
    }

    /// Distance from the vantage point to the image plane center.
    ///
    /// tan(haov / 2) = (width / 2) / distance
    pub fn focal_distance(&self) -> f64 {
        (0.5 * self.width) / (0.5 * self.haov.radians()).tan()
    }

    /// The eye point every primary ray starts from, behind the image plane
    /// center along the negative forward axis.
    pub fn vantage(&self) -> Vec3 {
        self.loc.origin - self.forward() * self.focal_distance()
    }
}
