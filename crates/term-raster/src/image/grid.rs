//! The pixel grid handed to the renderer.

use super::sample::ColorSample;
use super::ImageSource;

/// A dense, row-major grid of [`ColorSample`]s.
///
/// Built fresh for every rendered frame. Every row has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    samples: Vec<ColorSample>,
}

impl PixelGrid {
    /// Extract every pixel of an image.
    ///
    /// ```
    /// use term_raster::{PixelGrid, RgbaImage};
    ///
    /// let img = RgbaImage::filled(3, 2, [0, 0, 0, u16::MAX]);
    /// let grid = PixelGrid::from_image(&img);
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// ```
    pub fn from_image(image: &impl ImageSource) -> Self {
        let (width, height) = (image.width(), image.height());
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(ColorSample::from_rgba16(image.rgba16(x, y)));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    /// Build a grid from rows of samples.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<ColorSample>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "all grid rows must have the same length"
        );
        Self {
            width,
            height,
            samples: rows.into_iter().flatten().collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> ColorSample {
        self.samples[y * self.width + x]
    }

    /// The samples of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[ColorSample] {
        &self.samples[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }
}
