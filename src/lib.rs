//! pixterm - print images as colored terminal or IRC text.
//!
//! The rendering itself lives in the `term-raster` crate; this crate adds
//! image decoding, configuration and the command line.

pub mod cli;
pub mod error;
pub mod models;
pub mod services;
