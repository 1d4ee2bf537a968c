//! TermRenderer builder, the one-call entry point for the crate.
//!
//! [`TermRenderer`] chains preprocessing, pixel extraction and rendering
//! for a single [`RenderMode`].

use crate::image::{ImageSource, PixelGrid, RgbaImage};
use crate::mode::RenderMode;
use crate::output::{CellLayout, Renderer};
use crate::preprocess::PreprocessOptions;

/// Render images as terminal or IRC text.
///
/// Configuration methods consume and return `self`;
/// [`render()`](Self::render) takes `&self`, so one builder serves any
/// number of images or animation frames.
///
/// The pipeline is grayscale, invert, autocrop, resize, extract, render.
/// Dither mode always converts to grayscale.
///
/// # Example
///
/// ```
/// use term_raster::{RenderMode, RgbaImage, TermRenderer};
///
/// let renderer = TermRenderer::new(RenderMode::Truecolor).spaces(true);
/// let img = RgbaImage::filled(1, 1, [65535, 0x8080, 0, 65535]);
/// assert_eq!(renderer.render(&img), "\x1b[48;2;255;128;0m  \x1b[0m\n");
/// ```
#[derive(Debug, Clone)]
pub struct TermRenderer {
    mode: RenderMode,
    layout: CellLayout,
    preprocess: PreprocessOptions,
}

impl TermRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            layout: CellLayout::HalfBlock,
            preprocess: PreprocessOptions::new().grayscale(mode == RenderMode::Dither),
        }
    }

    /// Convert to gray before anything else. Always on in dither mode.
    #[inline]
    pub fn grayscale(mut self, enabled: bool) -> Self {
        self.preprocess = self
            .preprocess
            .grayscale(enabled || self.mode == RenderMode::Dither);
        self
    }

    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.preprocess = self.preprocess.invert(enabled);
        self
    }

    #[inline]
    pub fn autocrop(mut self, enabled: bool) -> Self {
        self.preprocess = self.preprocess.autocrop(enabled);
        self
    }

    /// Two spaces per pixel instead of half blocks. No effect in dither mode.
    #[inline]
    pub fn spaces(mut self, enabled: bool) -> Self {
        self.layout = if enabled {
            CellLayout::Spaces
        } else {
            CellLayout::HalfBlock
        };
        self
    }

    /// Shrink images to fit within `max_width` x `max_height` pixels
    /// (0 = unconstrained).
    #[inline]
    pub fn max_size(mut self, max_width: usize, max_height: usize) -> Self {
        self.preprocess = self.preprocess.max_size(max_width, max_height);
        self
    }

    #[inline]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    #[inline]
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    #[inline]
    pub fn preprocess_options(&self) -> &PreprocessOptions {
        &self.preprocess
    }

    /// Render one image.
    pub fn render(&self, image: &impl ImageSource) -> String {
        let prepared = self.preprocess.apply(RgbaImage::from_source(image));
        let grid = PixelGrid::from_image(&prepared);
        Renderer::new(self.mode, self.layout).render(&grid)
    }
}
