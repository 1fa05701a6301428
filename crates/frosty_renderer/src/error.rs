//! Errors raised by the render pipeline.

use thiserror::Error;

/// Configuration and pipeline errors. Any of these aborts the whole render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Bad value for parallelism (should be at least one): {0}")]
    InvalidParallelism(usize),

    #[error("Supersampling should be between 1 and {max}; got {0}", max = crate::MAX_SUPERSAMPLING)]
    InvalidSupersampling(u32),

    #[error("Horizontal resolution must be at least one pixel")]
    InvalidResolution,

    #[error("Bad image dimensions {width}x{height} for supersampling rate {factor}")]
    NotDivisible { width: u32, height: u32, factor: u32 },

    #[error("Camera direction {0} is zero or parallel to the world up axis; the image plane has no horizontal")]
    DegenerateCamera(frosty_math::Vec3),

    #[error("Scene must be initialized before rendering")]
    SceneNotInitialized,

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
