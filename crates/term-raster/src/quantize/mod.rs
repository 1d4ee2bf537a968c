//! Mapping color samples to wire-level color codes.

mod code;
mod quantizer;

pub use code::ColorCode;
pub use quantizer::Quantizer;
