//! Errors raised while loading or preparing a scene.

use frosty_math::Vec3;
use thiserror::Error;

/// Errors that can occur while loading or initializing a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Cannot find material {0}")]
    MaterialNotFound(String),

    #[error("Material {name} has a negative {field} weight: {value}")]
    NegativeWeight {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("Plane has no normal: vertices are collinear or the normal is zero")]
    DegeneratePlane,

    #[error("Box extents must all be positive, got {0}")]
    InvalidExtent(Vec3),

    #[error("Bad color string: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
