//! Error diffusion dithering for the braille glyph mode.
//!
//! [`FloydSteinberg`] turns a grayscale [`PixelGrid`] into a [`DotGrid`]
//! of on/off dots, which packs two by four dots into each braille glyph.
//!
//! [`PixelGrid`]: crate::PixelGrid

mod dots;
mod floyd_steinberg;
mod kernel;

pub use dots::{DotGrid, CELL_HEIGHT, CELL_WIDTH};
pub use floyd_steinberg::{FloydSteinberg, THRESHOLD};
pub use kernel::{Kernel, FLOYD_STEINBERG};

/// Sliding window of luminance error rows.
///
/// Holds only the rows the kernel reaches: `rows[0]` is the current row,
/// `rows[1]` the next one, and so on.
#[derive(Debug)]
pub(crate) struct ErrorBuffer {
    rows: Vec<Vec<f32>>,
    width: usize,
}

impl ErrorBuffer {
    pub(crate) fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![0.0; width]).collect(),
            width,
        }
    }

    #[inline]
    pub(crate) fn get_accumulated(&self, x: usize) -> f32 {
        self.rows[0][x]
    }

    /// Add error to a future pixel; out-of-bounds targets are ignored.
    #[inline]
    pub(crate) fn add_error(&mut self, x: usize, row_offset: usize, error: f32) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Drop the current row and append a zeroed one.
    pub(crate) fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0.0);
        }
    }
}
