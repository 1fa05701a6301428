//! Surface materials.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::{Color, SceneError, SceneResult};

/// Scene-wide mapping from material name to material.
pub type MaterialRegistry = HashMap<String, Arc<Material>>;

/// A Phong-style material description.
///
/// Shading evaluates only the ambient and Lambertian diffuse terms. The
/// specular color, `ks` and `alpha` are carried so scene files written for
/// a full Phong model still load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Material {
    /// Ambient and diffuse surface color
    pub color: Color,

    /// Specular highlight color
    #[serde(default)]
    pub specular: Color,

    /// Ambient weight
    #[serde(default)]
    pub ka: f64,

    /// Diffuse (Lambertian) weight
    #[serde(default)]
    pub kd: f64,

    /// Specular weight
    #[serde(default)]
    pub ks: f64,

    /// Shininess exponent
    #[serde(default)]
    pub alpha: f64,
}

impl Material {
    /// Create a material with only ambient and diffuse terms.
    pub fn new(color: Color, ka: f64, kd: f64) -> Self {
        Self {
            color,
            ka,
            kd,
            ..Default::default()
        }
    }

    /// Reject negative (or NaN) weights, which would drive shading below
    /// black. `name` is only used for the error.
    pub fn validate(&self, name: &str) -> SceneResult<()> {
        for (field, value) in [("ka", self.ka), ("kd", self.kd), ("ks", self.ks)] {
            if !(value >= 0.0) {
                return Err(SceneError::NegativeWeight {
                    name: name.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}
