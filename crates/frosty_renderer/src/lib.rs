//! Frosty renderer: turns an initialized scene into pixels.
//!
//! Rendering runs in three stages. A [`Scanner`] produces primary rays row
//! by row, a fixed pool of workers traces them into an [`ImageBuffer`], and
//! [`postprocess`] downsamples supersampled renders and tone maps the
//! linear result to 8-bit RGBA.

mod buffer;
mod error;
pub mod postprocess;
mod renderer;
mod scanner;

pub use buffer::ImageBuffer;
pub use error::{RenderError, RenderResult};
pub use postprocess::{downsample, tone_map};
pub use renderer::{render, render_image, RenderConfig, MAX_SUPERSAMPLING};
pub use scanner::{ScanLine, ScanLines, Scanner};

pub use image::RgbaImage;
