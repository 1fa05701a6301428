//! Floating-point image buffer.

use frosty_core::Color;

/// A fixed-size grid of linear colors, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width as usize) * (height as usize)],
        }
    }

    /// Create an image buffer filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y). Panics if out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Disjoint mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Color> {
        self.pixels.chunks_mut(self.width.max(1) as usize)
    }

    /// Largest channel value anywhere in the image.
    pub fn max_channel(&self) -> f64 {
        self.pixels
            .iter()
            .map(Color::max_channel)
            .fold(0.0, f64::max)
    }
}
