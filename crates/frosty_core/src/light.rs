use frosty_math::Vec3;
use serde::Deserialize;

use crate::Color;

/// A point light source.
///
/// Intensity falls off with the inverse square of distance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointLight {
    pub pos: Vec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(pos: Vec3, color: Color) -> Self {
        Self { pos, color }
    }
}
