//! Parallel render pipeline.
//!
//! A single producer (the scanner) streams rows of primary rays into a
//! fixed-size rayon pool. Each row is paired with its own disjoint slice of
//! the output buffer, so workers write without locks and the pool's join is
//! the only barrier before post-processing.

use std::time::Instant;

use frosty_core::Scene;
use image::RgbaImage;
use rayon::prelude::*;

use crate::postprocess::{downsample, tone_map};
use crate::{ImageBuffer, RenderError, RenderResult, Scanner};

/// Largest supported supersampling factor.
pub const MAX_SUPERSAMPLING: u32 = 8;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Horizontal pixels of the final image
    pub h_pixels: u32,
    /// Linear supersampling factor (1 disables it)
    pub supersampling: u32,
    /// Number of render worker threads
    pub parallelism: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            h_pixels: 800,
            supersampling: 1,
            parallelism: rayon::current_num_threads(),
        }
    }
}

impl RenderConfig {
    /// Check every field before any work starts.
    pub fn validate(&self) -> RenderResult<()> {
        if !(1..=MAX_SUPERSAMPLING).contains(&self.supersampling) {
            return Err(RenderError::InvalidSupersampling(self.supersampling));
        }
        if self.parallelism < 1 {
            return Err(RenderError::InvalidParallelism(self.parallelism));
        }
        self.render_pixels()?;
        Ok(())
    }

    /// Horizontal resolution actually traced: `h_pixels * supersampling`.
    pub fn render_pixels(&self) -> RenderResult<u32> {
        match self.h_pixels.checked_mul(self.supersampling) {
            Some(pixels) if pixels >= 1 => Ok(pixels),
            _ => Err(RenderError::InvalidResolution),
        }
    }
}

/// Render `scene` at `h_pixels` across using `parallelism` workers.
///
/// Returns the raw linear image; see [`render_image`] for the full pipeline.
pub fn render(scene: &Scene, h_pixels: u32, parallelism: usize) -> RenderResult<ImageBuffer> {
    if parallelism < 1 {
        return Err(RenderError::InvalidParallelism(parallelism));
    }
    if h_pixels < 1 {
        return Err(RenderError::InvalidResolution);
    }
    if !scene.is_initialized() {
        return Err(RenderError::SceneNotInitialized);
    }

    let scanner = Scanner::new(&scene.camera, h_pixels)?;
    log::debug!("Vantage point: {}", scanner.vantage());

    let mut image = ImageBuffer::new(scanner.h_pixels(), scanner.v_pixels());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .thread_name(|i| format!("frosty-render-{i}"))
        .build()?;

    pool.install(|| {
        scanner
            .lines()
            .zip(image.rows_mut())
            .par_bridge()
            .for_each(|(line, row)| {
                for (pixel, ray) in row.iter_mut().zip(&line.rays) {
                    *pixel = scene.trace(ray);
                }
            });
    });

    Ok(image)
}

/// Run the whole pipeline: render (supersampled if requested), downsample,
/// and tone map to displayable RGBA.
pub fn render_image(scene: &Scene, config: &RenderConfig) -> RenderResult<RgbaImage> {
    config.validate()?;

    let start = Instant::now();
    let image = render(scene, config.render_pixels()?, config.parallelism)?;
    log::info!(
        "Rendered {}x{} with {} workers in {:?}",
        image.width,
        image.height,
        config.parallelism,
        start.elapsed()
    );

    let image = if config.supersampling > 1 {
        let start = Instant::now();
        let small = downsample(&image, config.supersampling)?;
        log::info!(
            "Downsampled to {}x{} in {:?}",
            small.width,
            small.height,
            start.elapsed()
        );
        small
    } else {
        image
    };

    let start = Instant::now();
    let out = tone_map(&image);
    log::info!("Tone mapped in {:?}", start.elapsed());
    Ok(out)
}
