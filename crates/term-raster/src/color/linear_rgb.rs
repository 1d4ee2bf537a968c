//! Linear RGB color type
//!
//! Linear RGB is proportional to light intensity. It is the input of the
//! XYZ transform and therefore of every perceptual distance in the crate.

use super::lut::srgb_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are in the range 0.0..=1.0 for in-gamut colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode through the build-time lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
