//! Border cropping.

use crate::image::{is_transparent, RgbaImage};

/// Strip borders that match the top-left pixel or are transparent.
///
/// The top-left pixel is the background reference. Edges move inward
/// one line at a time in the order left, top, right, bottom, each one
/// stopping at the first line holding a pixel that is neither
/// transparent nor exactly equal to the reference. Comparison is on the
/// raw 16-bit values, so anti-aliased margins are not recognized.
///
/// An image with no croppable border is returned as is. An image that is
/// all background collapses to 0x0.
///
/// ```
/// use term_raster::{autocrop, RgbaImage};
///
/// let white = [65535, 65535, 65535, 65535];
/// let mut img = RgbaImage::filled(5, 5, white);
/// img.set(2, 3, [0, 0, 0, 65535]);
/// let cropped = autocrop(img);
/// assert_eq!((cropped.width(), cropped.height()), (1, 1));
/// ```
pub fn autocrop(image: RgbaImage) -> RgbaImage {
    if image.is_empty() {
        return image;
    }

    let (width, height) = (image.width(), image.height());
    let reference = image.get(0, 0);
    let is_background = |x: usize, y: usize| {
        let px = image.get(x, y);
        is_transparent(px[3]) || px == reference
    };

    let mut left = 0;
    while left < width && (0..height).all(|y| is_background(left, y)) {
        left += 1;
    }

    let mut top = 0;
    while top < height && (left..width).all(|x| is_background(x, top)) {
        top += 1;
    }

    let mut right = width;
    while right > left && (top..height).all(|y| is_background(right - 1, y)) {
        right -= 1;
    }

    let mut bottom = height;
    while bottom > top && (left..right).all(|x| is_background(x, bottom - 1)) {
        bottom -= 1;
    }

    if left == 0 && top == 0 && right == width && bottom == height {
        return image;
    }
    if left >= right || top >= bottom {
        return RgbaImage::default();
    }

    let (new_width, new_height) = (right - left, bottom - top);
    let mut pixels = Vec::with_capacity(new_width * new_height);
    for y in top..bottom {
        for x in left..right {
            pixels.push(image.get(x, y));
        }
    }
    RgbaImage::new(new_width, new_height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::OPAQUE;

    const WHITE: [u16; 4] = [65535, 65535, 65535, OPAQUE];
    const RED: [u16; 4] = [65535, 0, 0, OPAQUE];
    const BLUE: [u16; 4] = [0, 0, 65535, OPAQUE];
    const CLEAR: [u16; 4] = [0, 0, 0, 0];

    #[test]
    fn test_no_border_returns_input() {
        let img = RgbaImage::new(2, 2, vec![RED, BLUE, BLUE, RED]);
        let before = img.pixels().as_ptr();
        let out = autocrop(img);
        assert_eq!(out.pixels().as_ptr(), before, "must not reallocate");
        assert_eq!((out.width(), out.height()), (2, 2));
    }

    #[test]
    fn test_uniform_image_collapses() {
        let out = autocrop(RgbaImage::filled(4, 3, RED));
        assert_eq!((out.width(), out.height()), (0, 0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_fully_transparent_collapses() {
        let out = autocrop(RgbaImage::filled(3, 3, CLEAR));
        assert!(out.is_empty());
    }

    #[test]
    fn test_transparent_counts_as_background() {
        // reference is white, but the bottom row is transparent
        let mut img = RgbaImage::filled(3, 3, WHITE);
        img.set(1, 1, RED);
        for x in 0..3 {
            img.set(x, 2, CLEAR);
        }
        let out = autocrop(img);
        assert_eq!((out.width(), out.height()), (1, 1));
        assert_eq!(out.get(0, 0), RED);
    }

    #[test]
    fn test_edges_stop_independently() {
        // content touches the right edge only
        let mut img = RgbaImage::filled(4, 4, WHITE);
        img.set(3, 1, RED);
        img.set(2, 2, BLUE);
        let out = autocrop(img);
        assert_eq!((out.width(), out.height()), (2, 2));
        assert_eq!(out.get(1, 0), RED);
        assert_eq!(out.get(0, 1), BLUE);
        assert_eq!(out.get(0, 0), WHITE);
    }

    #[test]
    fn test_near_background_is_not_cropped() {
        let almost_white = [65534, 65535, 65535, OPAQUE];
        let mut img = RgbaImage::filled(3, 3, WHITE);
        img.set(1, 1, almost_white);
        let out = autocrop(img);
        assert_eq!((out.width(), out.height()), (1, 1));
        assert_eq!(out.get(0, 0), almost_white);
    }

    #[test]
    fn test_idempotent_on_margined_content() {
        let mut img = RgbaImage::filled(6, 5, CLEAR);
        img.set(2, 1, RED);
        img.set(3, 1, BLUE);
        img.set(2, 2, BLUE);
        img.set(3, 2, RED);
        let once = autocrop(img);
        assert_eq!((once.width(), once.height()), (2, 2));
        let twice = autocrop(once.clone());
        assert_eq!(twice, once);
    }

    /// The second pass uses the cropped image's own top-left pixel as its
    /// background, so content that starts with that color keeps shrinking.
    #[test]
    fn test_recrop_after_new_reference() {
        let mut block = RgbaImage::filled(4, 4, WHITE);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            block.set(x, y, RED);
        }
        let once = autocrop(block);
        assert_eq!((once.width(), once.height()), (2, 2));
        let twice = autocrop(once);
        assert_eq!((twice.width(), twice.height()), (0, 0));

        let mut row = RgbaImage::filled(5, 3, WHITE);
        row.set(1, 1, RED);
        row.set(2, 1, BLUE);
        row.set(3, 1, BLUE);
        let once = autocrop(row);
        assert_eq!(once.pixels(), &[RED, BLUE, BLUE]);
        let twice = autocrop(once);
        assert_eq!(twice.pixels(), &[BLUE, BLUE]);
    }

    #[test]
    fn test_empty_input() {
        let out = autocrop(RgbaImage::default());
        assert_eq!(out.width(), 0);
    }
}
