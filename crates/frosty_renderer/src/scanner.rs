//! Primary ray generation.
//!
//! The scanner lays a pixel grid over the camera's image plane and produces
//! one ray per pixel, from the vantage point through the pixel's center.

use std::iter::FusedIterator;

use frosty_core::Camera;
use frosty_math::{unit, Ray, Vec3};

use crate::{RenderError, RenderResult};

/// World up axis. The image plane's top and bottom edges stay
/// perpendicular to it.
const WORLD_UP: Vec3 = Vec3::Y;

/// Maps pixel coordinates to primary rays for one camera and resolution.
#[derive(Debug, Clone)]
pub struct Scanner {
    vantage: Vec3,
    /// Top-left corner of the image plane
    origin: Vec3,
    /// Unit vector along image rows
    across: Vec3,
    /// Unit vector down image columns
    down: Vec3,
    width: f64,
    height: f64,
    pixel_size: f64,
    h_pixels: u32,
    v_pixels: u32,
}

impl Scanner {
    /// Build the image-plane basis for `camera` at `h_pixels` across.
    ///
    /// The vertical resolution is `round(h_pixels * aspect)`. Fails if the
    /// camera looks straight up or down, or has no direction at all.
    pub fn new(camera: &Camera, h_pixels: u32) -> RenderResult<Self> {
        let direction = camera.loc.direction;
        if direction.cross(WORLD_UP).length_squared() == 0.0 {
            return Err(RenderError::DegenerateCamera(direction));
        }

        let forward = camera.forward();
        let across = unit(forward.cross(WORLD_UP));
        let down = unit(forward.cross(across));

        let width = camera.width;
        let height = camera.height();
        let origin = camera.loc.origin - down * (height / 2.0) - across * (width / 2.0);

        Ok(Self {
            vantage: camera.vantage(),
            origin,
            across,
            down,
            width,
            height,
            pixel_size: width / h_pixels as f64,
            h_pixels,
            v_pixels: (h_pixels as f64 * camera.aspect).round() as u32,
        })
    }

    pub fn h_pixels(&self) -> u32 {
        self.h_pixels
    }

    pub fn v_pixels(&self) -> u32 {
        self.v_pixels
    }

    /// Eye point shared by every primary ray.
    pub fn vantage(&self) -> Vec3 {
        self.vantage
    }

    /// Center of pixel (x, y) on the image plane.
    pub fn pixel_center(&self, x: u32, y: u32) -> Vec3 {
        let half = self.pixel_size / 2.0;
        let along = (x as f64 / self.h_pixels as f64) * self.width + half;
        let below = (y as f64 / self.v_pixels as f64) * self.height + half;
        self.origin + self.across * along + self.down * below
    }

    /// Primary ray through pixel (x, y). The direction is not normalized.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.vantage, self.pixel_center(x, y) - self.vantage)
    }

    /// Lazily produce every row of primary rays, top to bottom.
    pub fn lines(&self) -> ScanLines<'_> {
        ScanLines {
            scanner: self,
            next_y: 0,
        }
    }

    /// Lazily produce every pixel's ray in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = ((u32, u32), Ray)> + '_ {
        (0..self.v_pixels)
            .flat_map(move |y| (0..self.h_pixels).map(move |x| ((x, y), self.ray(x, y))))
    }
}

/// One row of primary rays.
#[derive(Debug, Clone)]
pub struct ScanLine {
    pub y: u32,
    /// One ray per column, left to right
    pub rays: Vec<Ray>,
}

/// Iterator over the rows of a [`Scanner`]. Finite and not restartable.
#[derive(Debug)]
pub struct ScanLines<'a> {
    scanner: &'a Scanner,
    next_y: u32,
}

impl Iterator for ScanLines<'_> {
    type Item = ScanLine;

    fn next(&mut self) -> Option<ScanLine> {
        if self.next_y >= self.scanner.v_pixels {
            return None;
        }
        let y = self.next_y;
        self.next_y += 1;

        let rays = (0..self.scanner.h_pixels)
            .map(|x| self.scanner.ray(x, y))
            .collect();
        Some(ScanLine { y, rays })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.scanner.v_pixels.saturating_sub(self.next_y) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanLines<'_> {}

impl FusedIterator for ScanLines<'_> {}
