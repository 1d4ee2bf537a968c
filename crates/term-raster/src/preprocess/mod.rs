//! Image preprocessing before pixel extraction.
//!
//! All filters work on an owned [`RgbaImage`] and keep the 16-bit channel
//! scale, so nothing is rounded to 8 bits before quantization.
//!
//! # Processing Order
//!
//! [`PreprocessOptions::apply`] runs the enabled steps in a fixed order:
//!
//! 1. **Grayscale** - transparent pixels become white, then BT.601 luma
//! 2. **Invert** - channel complement, alpha untouched
//! 3. **Autocrop** - strip borders matching the top-left pixel
//! 4. **Resize** - nearest-neighbor shrink into the size bounds
//!
//! Cropping happens before resizing so the size bounds apply to the
//! content, not to its margin.
//!
//! ```
//! use term_raster::{PreprocessOptions, RgbaImage};
//!
//! let img = RgbaImage::filled(40, 20, [65535, 0, 0, u16::MAX]);
//! let out = PreprocessOptions::new().max_size(10, 0).apply(img);
//! assert_eq!((out.width(), out.height()), (10, 5));
//! ```
//!
//! [`RgbaImage`]: crate::RgbaImage

mod autocrop;
mod filters;
mod options;
mod resize;

pub use autocrop::autocrop;
pub use filters::{grayscale, invert};
pub use options::PreprocessOptions;
pub use resize::{fit_within, resize_nearest};
