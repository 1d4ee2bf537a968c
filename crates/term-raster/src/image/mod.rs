//! Image access and pixel extraction
//!
//! Decoding is not part of this crate. Anything that can answer width,
//! height and a per-pixel 16-bit RGBA query implements [`ImageSource`];
//! [`RgbaImage`] is the owned implementation the preprocessing filters
//! produce.

mod grid;
mod sample;

pub use grid::PixelGrid;
pub use sample::{is_transparent, ColorSample, OPAQUE, TRANSPARENCY_THRESHOLD};

/// A rectangular image readable pixel by pixel.
///
/// Channels are on a 16-bit scale (0..=65535) with straight, not
/// premultiplied, alpha. Sources without an alpha channel report
/// [`OPAQUE`]. Zero-size images are valid.
pub trait ImageSource {
    /// Image width in pixels.
    fn width(&self) -> usize;

    /// Image height in pixels.
    fn height(&self) -> usize;

    /// `[r, g, b, a]` at `(x, y)`; callers stay within bounds.
    fn rgba16(&self, x: usize, y: usize) -> [u16; 4];
}

/// An owned 16-bit RGBA image in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<[u16; 4]>,
}

impl RgbaImage {
    /// Wrap row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<[u16; 4]>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match {}x{}",
            pixels.len(),
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A `width` x `height` image filled with one value.
    pub fn filled(width: usize, height: usize, rgba: [u16; 4]) -> Self {
        Self::new(width, height, vec![rgba; width * height])
    }

    /// Build from 8-bit RGBA pixels, widening each channel by 257.
    pub fn from_rgba8(width: usize, height: usize, pixels: &[[u8; 4]]) -> Self {
        let wide = pixels
            .iter()
            .map(|p| p.map(|c| u16::from(c) * 257))
            .collect();
        Self::new(width, height, wide)
    }

    /// Copy any [`ImageSource`] into an owned image.
    pub fn from_source(source: &impl ImageSource) -> Self {
        let (width, height) = (source.width(), source.height());
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(source.rgba16(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u16; 4] {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgba: [u16; 4]) {
        self.pixels[y * self.width + x] = rgba;
    }

    #[inline]
    pub fn pixels(&self) -> &[[u16; 4]] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[u16; 4]] {
        &mut self.pixels
    }
}

impl ImageSource for RgbaImage {
    fn width(&self) -> usize {
        RgbaImage::width(self)
    }

    fn height(&self) -> usize {
        RgbaImage::height(self)
    }

    fn rgba16(&self, x: usize, y: usize) -> [u16; 4] {
        self.get(x, y)
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn rgba16(&self, x: usize, y: usize) -> [u16; 4] {
        (**self).rgba16(x, y)
    }
}
