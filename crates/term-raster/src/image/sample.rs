//! Normalized color samples and the transparency rule.

use crate::color::Srgb;

/// Alpha of a fully opaque pixel.
pub const OPAQUE: u16 = u16::MAX;

/// Alpha cutoff below which a pixel carries no color.
///
/// Near-zero alpha left behind by editors and encoders counts as
/// transparent, not as a faint color.
pub const TRANSPARENCY_THRESHOLD: u16 = 0x1000;

/// True when a 16-bit alpha value is below [`TRANSPARENCY_THRESHOLD`].
#[inline]
pub fn is_transparent(alpha: u16) -> bool {
    alpha < TRANSPARENCY_THRESHOLD
}

/// One extracted pixel: sRGB color plus 16-bit alpha.
///
/// The color is only meaningful when the sample is opaque enough; a
/// transparent sample holds white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub color: Srgb,
    pub alpha: u16,
}

impl ColorSample {
    pub const TRANSPARENT: ColorSample = ColorSample {
        color: Srgb::WHITE,
        alpha: 0,
    };

    #[inline]
    pub fn new(color: Srgb, alpha: u16) -> Self {
        Self { color, alpha }
    }

    /// A fully opaque sample of the given color.
    #[inline]
    pub fn opaque(color: Srgb) -> Self {
        Self::new(color, OPAQUE)
    }

    /// Normalize a 16-bit straight-alpha RGBA value.
    #[inline]
    pub fn from_rgba16([r, g, b, a]: [u16; 4]) -> Self {
        if is_transparent(a) {
            Self { alpha: a, ..Self::TRANSPARENT }
        } else {
            Self::new(Srgb::from_u16(r, g, b), a)
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        is_transparent(self.alpha)
    }
}
