//! Nearest-neighbor shrinking.

use crate::image::RgbaImage;

/// Resample to exactly `new_width` x `new_height`.
///
/// Output pixel `i` on an axis reads source pixel
/// `floor((i + 0.5) * src / dst)`.
pub fn resize_nearest(image: &RgbaImage, new_width: usize, new_height: usize) -> RgbaImage {
    if new_width == 0 || new_height == 0 || image.is_empty() {
        return RgbaImage::default();
    }
    if new_width == image.width() && new_height == image.height() {
        return image.clone();
    }

    let xs: Vec<usize> = (0..new_width)
        .map(|i| sample_index(i, image.width(), new_width))
        .collect();
    let mut pixels = Vec::with_capacity(new_width * new_height);
    for j in 0..new_height {
        let sy = sample_index(j, image.height(), new_height);
        pixels.extend(xs.iter().map(|&sx| image.get(sx, sy)));
    }
    RgbaImage::new(new_width, new_height, pixels)
}

/// Shrink `image` to fit the bounds, keeping its aspect ratio.
///
/// A bound of 0 leaves that axis unconstrained. The height bound is
/// applied first, then the width bound on the result. Images already
/// inside the bounds are returned untouched; nothing is enlarged.
///
/// ```
/// use term_raster::{fit_within, RgbaImage};
///
/// let img = RgbaImage::filled(100, 50, [0, 0, 0, u16::MAX]);
/// let out = fit_within(img, 80, 20);
/// assert_eq!((out.width(), out.height()), (40, 20));
/// ```
pub fn fit_within(image: RgbaImage, max_width: usize, max_height: usize) -> RgbaImage {
    let (mut width, mut height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return image;
    }

    if max_height != 0 && height > max_height {
        width = scale_axis(width, max_height, height);
        height = max_height;
    }
    if max_width != 0 && width > max_width {
        height = scale_axis(height, max_width, width);
        width = max_width;
    }

    if (width, height) == (image.width(), image.height()) {
        return image;
    }
    resize_nearest(&image, width, height)
}

/// `round(value * num / den)`, at least 1.
fn scale_axis(value: usize, num: usize, den: usize) -> usize {
    let scaled = (value as u64 * num as u64 + den as u64 / 2) / den as u64;
    (scaled as usize).max(1)
}

#[inline]
fn sample_index(i: usize, src: usize, dst: usize) -> usize {
    let idx = ((2 * i + 1) as u64 * src as u64) / (2 * dst as u64);
    (idx as usize).min(src - 1)
}
