//! Per-pixel color filters.

use crate::color::Srgb;
use crate::image::{is_transparent, RgbaImage};

const MAX: u16 = u16::MAX;

/// Replace every pixel with its BT.601 gray.
///
/// Transparent pixels are forced to white first so the luma of an
/// undefined color never leaks into later steps. Alpha is kept.
pub fn grayscale(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let [r, g, b, a] = *px;
        let gray = if is_transparent(a) {
            MAX
        } else {
            let luma = Srgb::from_u16(r, g, b).luma();
            (luma * MAX as f32).round().clamp(0.0, MAX as f32) as u16
        };
        *px = [gray, gray, gray, a];
    }
}

/// Complement the color channels; alpha is untouched.
pub fn invert(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        let [r, g, b, a] = *px;
        *px = [MAX - r, MAX - g, MAX - b, a];
    }
}
