//! Preprocessing options.

use super::{autocrop, fit_within, grayscale, invert};
use crate::image::RgbaImage;

/// Which preprocessing steps run, and the size bounds for resizing.
///
/// Everything is off by default and a bound of 0 is unconstrained.
///
/// ```
/// use term_raster::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .grayscale(true)
///     .autocrop(true)
///     .max_size(160, 96);
/// assert_eq!(options.max_width, 160);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreprocessOptions {
    pub grayscale: bool,
    pub invert: bool,
    pub autocrop: bool,
    /// Width bound in pixels (0 = unconstrained).
    pub max_width: usize,
    /// Height bound in pixels (0 = unconstrained).
    pub max_height: usize,
}

impl PreprocessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grayscale(mut self, enabled: bool) -> Self {
        self.grayscale = enabled;
        self
    }

    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    pub fn autocrop(mut self, enabled: bool) -> Self {
        self.autocrop = enabled;
        self
    }

    pub fn max_size(mut self, max_width: usize, max_height: usize) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// Run the enabled steps: grayscale, invert, autocrop, resize.
    pub fn apply(&self, mut image: RgbaImage) -> RgbaImage {
        if self.grayscale {
            grayscale(&mut image);
        }
        if self.invert {
            invert(&mut image);
        }
        if self.autocrop {
            image = autocrop(image);
        }
        fit_within(image, self.max_width, self.max_height)
    }
}
