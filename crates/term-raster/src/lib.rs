#![allow(clippy::module_inception, clippy::excessive_precision)]

//! term-raster: render raster images as ANSI and IRC colored text
//!
//! The crate turns any [`ImageSource`] into a block of text that
//! reproduces the picture in a terminal or IRC client, using one of six
//! [`RenderMode`]s: xterm 16 and 256 colors, 24-bit truecolor, the mIRC
//! 99-color and classic 16-color tables, and monochrome braille dots.
//!
//! # Quick Start
//!
//! ```
//! use term_raster::{RenderMode, RgbaImage, TermRenderer};
//!
//! let red = [65535, 0, 0, 65535];
//! let blue = [0, 0, 65535, 65535];
//! let img = RgbaImage::new(2, 2, vec![red, red, blue, blue]);
//!
//! let text = TermRenderer::new(RenderMode::Term256).render(&img);
//! assert_eq!(text, "\x1b[38;5;9m\x1b[48;5;12m\u{2580}\u{2580}\x1b[0m\n");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! ImageSource (16-bit straight RGBA)
//!     |
//!     v
//! [grayscale] -> [invert] -> [autocrop] -> [fit_within]     preprocess
//!     |
//!     v
//! PixelGrid of ColorSample (transparent below 0x1000 alpha)
//!     |
//!     +---> Quantizer -> ColorCode -> WireFormat    color modes
//!     |
//!     +---> FloydSteinberg -> DotGrid -> braille    dither mode
//! ```
//!
//! # Color Matching
//!
//! Palette modes match in CIE space (D65). The 256-color and mIRC
//! 99-color tables use Euclidean L\*a\*b\* distance; the two 16-color
//! tables use L\*u\*v\*, which keeps dark pixels off the saturated
//! entries of a small table. Only a strictly smaller distance replaces
//! the best match, and the scan runs forward except for the 99-color
//! table, which scans from the top so duplicated basics resolve to the
//! extended codes.

pub mod api;
pub mod color;
pub mod dither;
pub mod image;
pub mod mode;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod quantize;


pub use api::TermRenderer;
pub use color::{Lab, LinearRgb, Luv, Srgb, Xyz};
pub use dither::{DotGrid, FloydSteinberg};
pub use image::{ColorSample, ImageSource, PixelGrid, RgbaImage, OPAQUE, TRANSPARENCY_THRESHOLD};
pub use mode::{ModeError, RenderMode};
pub use output::{CellLayout, CellState, Renderer, WireFormat};
pub use crate::palette::{DistanceMetric, Palette, SearchOrder};
pub use preprocess::{autocrop, fit_within, grayscale, invert, resize_nearest, PreprocessOptions};
pub use quantize::{ColorCode, Quantizer};
