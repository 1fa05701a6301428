//! Linear RGB color.
//!
//! Channels are physically linear radiance values. They are unbounded above
//! and only reduced to a display range by tone mapping at the very end of
//! the pipeline.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul};

use serde::Deserialize;

use crate::SceneError;

/// A linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Background color, and the color of no light at all.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style hex color (`#123abc`, `#fff`, leading `#` optional).
    ///
    /// Each 8-bit channel maps linearly onto `[0, 1]`.
    pub fn from_hex(s: &str) -> Result<Self, SceneError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(SceneError::InvalidColor(s.to_string())),
        };
        let rgb = u32::from_str_radix(&expanded, 16)
            .map_err(|_| SceneError::InvalidColor(s.to_string()))?;
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f64 / 255.0;
        Ok(Self::new(channel(16), channel(8), channel(0)))
    }

    /// The largest of the three channels.
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// True if no channel is negative (or NaN).
    pub fn is_non_negative(&self) -> bool {
        self.r >= 0.0 && self.g >= 0.0 && self.b >= 0.0
    }

    /// Average a set of colors channel by channel. An empty set averages to black.
    pub fn average(colors: &[Color]) -> Color {
        if colors.is_empty() {
            return Color::BLACK;
        }
        colors.iter().copied().sum::<Color>() / colors.len() as f64
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

/// Componentwise product, used to filter light through a surface color.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

/// Intensity scaling.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, s: f64) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, s: f64) -> Color {
        Color::new(self.r / s, self.g / s, self.b / s)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, Add::add)
    }
}

/// Scene files write colors either as hex strings or as float triples.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgb([f64; 3]),
}

impl TryFrom<ColorRepr> for Color {
    type Error = SceneError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(s) => Color::from_hex(&s),
            ColorRepr::Rgb([r, g, b]) => {
                let color = Color::new(r, g, b);
                if color.is_non_negative() {
                    Ok(color)
                } else {
                    Err(SceneError::InvalidColor(format!("[{r}, {g}, {b}]")))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::new(1.0, 0.0, 0.0));

        let c = Color::from_hex("#336699").unwrap();
        assert!((c.r - 0x33 as f64 / 255.0).abs() < 1e-12);
        assert!((c.g - 0x66 as f64 / 255.0).abs() < 1e-12);
        assert!((c.b - 0x99 as f64 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Color::new(0.5, 1.0, 2.0);
        let b = Color::new(2.0, 0.5, 0.25);
        assert_eq!(a + b, Color::new(2.5, 1.5, 2.25));
        assert_eq!(a * b, Color::new(1.0, 0.5, 0.5));
        assert_eq!(a * 2.0, Color::new(1.0, 2.0, 4.0));

        let mut acc = Color::BLACK;
        acc += a;
        acc += a;
        assert_eq!(acc, Color::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_average_of_identical_colors() {
        let c = Color::new(0.1, 0.7, 3.3);
        for n in [1, 2, 3, 7, 64] {
            let avg = Color::average(&vec![c; n]);
            assert!((avg.r - c.r).abs() < 1e-12);
            assert!((avg.g - c.g).abs() < 1e-12);
            assert!((avg.b - c.b).abs() < 1e-12);
        }
        assert_eq!(Color::average(&[]), Color::BLACK);
    }

    #[test]
    fn test_deserialize_both_forms() {
        let hex: Color = serde_json::from_str(r##""#ff0000""##).unwrap();
        assert_eq!(hex, Color::new(1.0, 0.0, 0.0));

        let rgb: Color = serde_json::from_str("[0.25, 2.0, 0]").unwrap();
        assert_eq!(rgb, Color::new(0.25, 2.0, 0.0));

        assert!(serde_json::from_str::<Color>("[-1, 0, 0]").is_err());
        assert!(serde_json::from_str::<Color>(r#""nope""#).is_err());
    }
}
