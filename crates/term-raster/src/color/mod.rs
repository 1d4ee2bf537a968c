//! Color types and conversion utilities
//!
//! Samples arrive as gamma-encoded sRGB. Palette matching happens in the
//! CIE spaces, which are defined over linear light:
//!
//! ```text
//! Srgb --(gamma LUT)--> LinearRgb --(D65 matrix)--> Xyz --+--> Lab
//!                                                         +--> Luv
//! ```
//!
//! # Example
//!
//! ```
//! use term_raster::{Lab, LinearRgb, Srgb, Xyz};
//!
//! let orange = Srgb::from_u8(255, 128, 0);
//! let lab = Lab::from(Xyz::from(LinearRgb::from(orange)));
//! assert!(lab.l > 60.0 && lab.l < 70.0);
//! ```

mod cie;
mod linear_rgb;
mod lut;
mod srgb;

pub use cie::{Lab, Luv, Xyz};
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
