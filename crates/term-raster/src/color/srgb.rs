//! sRGB color type
//!
//! sRGB is the gamma-encoded space image files are stored in. Samples
//! extracted from an image and palette entries are both kept as `Srgb`.

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Pure white, used as the stand-in color of transparent samples.
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use term_raster::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Create an Srgb color from 16-bit channels (0..=65535).
    #[inline]
    pub fn from_u16(r: u16, g: u16, b: u16) -> Self {
        Self {
            r: r as f32 / 65535.0,
            g: g as f32 / 65535.0,
            b: b as f32 / 65535.0,
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use term_raster::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// BT.601 luma of the gamma-encoded channels.
    #[inline]
    pub fn luma(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }
}
