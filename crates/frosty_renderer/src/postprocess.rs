//! Post-processing of a finished render: box-filter downsampling for
//! supersampled renders, then tone mapping to 8-bit RGBA.

use frosty_core::Color;
use image::{Rgba, RgbaImage};

use crate::{ImageBuffer, RenderError, RenderResult};

/// Average every `factor` x `factor` block of `image` into one pixel.
///
/// Fails if either dimension is not a multiple of `factor`.
pub fn downsample(image: &ImageBuffer, factor: u32) -> RenderResult<ImageBuffer> {
    if factor == 0 {
        return Err(RenderError::InvalidSupersampling(factor));
    }
    if image.width % factor != 0 || image.height % factor != 0 {
        return Err(RenderError::NotDivisible {
            width: image.width,
            height: image.height,
            factor,
        });
    }

    let mut out = ImageBuffer::new(image.width / factor, image.height / factor);
    let mut block = Vec::with_capacity((factor * factor) as usize);

    for dy in 0..out.height {
        for dx in 0..out.width {
            block.clear();
            for y in dy * factor..(dy + 1) * factor {
                for x in dx * factor..(dx + 1) * factor {
                    block.push(image.get(x, y));
                }
            }
            out.set(dx, dy, Color::average(&block));
        }
    }

    Ok(out)
}

/// Scale `image` linearly so its brightest channel becomes 255.
///
/// An all-black image stays black. Panics on a negative (or NaN) channel:
/// shading never produces one, so seeing it here means an upstream bug.
pub fn tone_map(image: &ImageBuffer) -> RgbaImage {
    if let Some(bad) = image.pixels.iter().find(|c| !c.is_non_negative()) {
        panic!("negative color value reached tone mapping: {bad:?}");
    }

    let max = image.max_channel();
    let factor = if max > 0.0 { 255.0 / max } else { 0.0 };

    RgbaImage::from_fn(image.width, image.height, |x, y| {
        let c = image.get(x, y);
        Rgba([
            to_display(c.r * factor),
            to_display(c.g * factor),
            to_display(c.b * factor),
            u8::MAX,
        ])
    })
}

#[inline]
fn to_display(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
