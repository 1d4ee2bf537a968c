//! Floyd-Steinberg error diffusion to on/off dots.

use super::{DotGrid, ErrorBuffer, Kernel, FLOYD_STEINBERG};
use crate::image::PixelGrid;

/// Luminance at or above which a dot is on.
pub const THRESHOLD: f32 = 0.5;

/// Floyd-Steinberg error diffusion over sample luminance.
///
/// Pixels are visited in row-major order. A dot is on when the
/// luminance plus accumulated error reaches [`THRESHOLD`]; the error
/// (value minus 1.0 when on, the value itself when off) goes to the
/// unvisited neighbors with weights 7, 3, 5, 1 over 16. Values are not
/// clamped. Transparent pixels are off and drop their error.
///
/// The input grid is left untouched; error lives in a private buffer.
///
/// ```
/// use term_raster::{ColorSample, FloydSteinberg, PixelGrid, Srgb};
///
/// let white = ColorSample::opaque(Srgb::WHITE);
/// let grid = PixelGrid::from_rows(vec![vec![white; 2]; 4]);
/// let dots = FloydSteinberg.dither(&grid);
/// assert_eq!(dots.glyph(0, 0), '\u{28FF}');
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl FloydSteinberg {
    pub fn dither(&self, grid: &PixelGrid) -> DotGrid {
        diffuse(grid, &FLOYD_STEINBERG)
    }
}

fn diffuse(grid: &PixelGrid, kernel: &Kernel) -> DotGrid {
    let (width, height) = (grid.width(), grid.height());
    let mut dots = DotGrid::new(width, height);
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for (x, sample) in grid.row(y).iter().enumerate() {
            if sample.is_transparent() {
                continue;
            }

            let value = sample.color.luma() + error_buf.get_accumulated(x);
            let on = value >= THRESHOLD;
            dots.set(x, y, on);
            let error = if on { value - 1.0 } else { value };

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    error_buf.add_error(nx as usize, dy as usize, error * weight as f32 / divisor);
                }
            }
        }
        error_buf.advance_row();
    }

    dots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use crate::image::ColorSample;

    fn gray_grid(level: f32, width: usize, height: usize) -> PixelGrid {
        let sample = ColorSample::opaque(Srgb::new(level, level, level));
        PixelGrid::from_rows(vec![vec![sample; width]; height])
    }

    #[test]
    fn test_black_and_white_are_exact() {
        assert_eq!(FloydSteinberg.dither(&gray_grid(0.0, 4, 4)).count_on(), 0);
        assert_eq!(FloydSteinberg.dither(&gray_grid(1.0, 4, 4)).count_on(), 16);
    }

    #[test]
    fn test_threshold_splits_at_half() {
        let dots = FloydSteinberg.dither(&gray_grid(0.51, 1, 1));
        assert!(dots.is_on(0, 0));
        let dots = FloydSteinberg.dither(&gray_grid(0.49, 1, 1));
        assert!(!dots.is_on(0, 0));
    }

    #[test]
    fn test_error_pushes_right_neighbor() {
        // 0.4 stays off and passes 7/16 * 0.4 = 0.175 to the right: 0.35 + 0.175 >= 0.5
        let a = ColorSample::opaque(Srgb::new(0.4, 0.4, 0.4));
        let b = ColorSample::opaque(Srgb::new(0.35, 0.35, 0.35));
        let dots = FloydSteinberg.dither(&PixelGrid::from_rows(vec![vec![a, b]]));
        assert!(!dots.is_on(0, 0));
        assert!(dots.is_on(1, 0));
    }

    #[test]
    fn test_mid_gray_checkers() {
        let dots = FloydSteinberg.dither(&gray_grid(0.5, 8, 8));
        let on = dots.count_on();
        assert!((24..=40).contains(&on), "got {} dots on", on);
    }

    #[test]
    fn test_conserves_luminance_up_to_edges() {
        for level in [0.1, 0.25, 0.5, 0.73, 0.9] {
            let (w, h) = (16, 16);
            let dots = FloydSteinberg.dither(&gray_grid(level, w, h));
            let source = level * (w * h) as f32;
            let diff = (dots.count_on() as f32 - source).abs();
            assert!(diff <= (w + h) as f32, "level {}: {} vs {}", level, dots.count_on(), source);
        }
    }

    #[test]
    fn test_transparent_is_off_and_absorbs_error() {
        let clear = ColorSample::TRANSPARENT;
        let dim = ColorSample::opaque(Srgb::new(0.3, 0.3, 0.3));
        // the transparent sample holds white but must stay off
        let grid = PixelGrid::from_rows(vec![vec![dim, clear, dim]]);
        let dots = FloydSteinberg.dither(&grid);
        assert!(!dots.is_on(1, 0));
        assert!(!dots.is_on(2, 0));
    }

    #[test]
    fn test_input_grid_is_unchanged() {
        let grid = gray_grid(0.5, 3, 3);
        let before = grid.clone();
        let _ = FloydSteinberg.dither(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_grid() {
        let dots = FloydSteinberg.dither(&PixelGrid::from_rows(Vec::new()));
        assert_eq!((dots.width(), dots.height()), (0, 0));
    }
}
