//! Color quantization strategy.

use super::ColorCode;
use crate::image::ColorSample;
use crate::mode::RenderMode;
use crate::palette::Palette;

/// Finds the wire code for a sample under one color model.
///
/// `None` from [`quantize`](Quantizer::quantize) is the transparency
/// sentinel: the cell slot stays uncolored.
///
/// ```
/// use term_raster::{ColorCode, ColorSample, Quantizer, RenderMode, Srgb};
///
/// let q = Quantizer::for_mode(RenderMode::Truecolor).unwrap();
/// let orange = ColorSample::opaque(Srgb::from_u8(255, 128, 0));
/// assert_eq!(q.quantize(&orange), Some(ColorCode::Rgb([255, 128, 0])));
/// assert_eq!(q.quantize(&orange).unwrap().to_string(), "255;128;0");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quantizer<'a> {
    strategy: Strategy<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Strategy<'a> {
    /// Passes the 8-bit color through.
    Truecolor,
    /// Nearest entry of a palette of 1..=256 colors.
    Indexed(&'a Palette),
}

impl Quantizer<'static> {
    /// The quantizer of a color mode; `None` for [`RenderMode::Dither`].
    pub fn for_mode(mode: RenderMode) -> Option<Self> {
        match mode {
            RenderMode::Truecolor => Some(Quantizer::truecolor()),
            RenderMode::Dither => None,
            _ => Palette::for_mode(mode).map(Quantizer::indexed),
        }
    }

    /// 24-bit passthrough.
    pub fn truecolor() -> Self {
        Self {
            strategy: Strategy::Truecolor,
        }
    }
}

impl<'a> Quantizer<'a> {
    /// Quantize against a caller-supplied palette.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty or holds more than 256 colors.
    pub fn indexed(palette: &'a Palette) -> Self {
        assert!(
            !palette.is_empty() && palette.len() <= 256,
            "indexed palettes hold 1..=256 colors"
        );
        Self {
            strategy: Strategy::Indexed(palette),
        }
    }

    /// Wire code for `sample`, or `None` if it is transparent.
    pub fn quantize(&self, sample: &ColorSample) -> Option<ColorCode> {
        if sample.is_transparent() {
            return None;
        }
        Some(match self.strategy {
            Strategy::Truecolor => ColorCode::Rgb(sample.color.to_bytes()),
            Strategy::Indexed(palette) => {
                let (idx, _) = palette.find_nearest(sample.color);
                // `indexed` caps palettes at 256 entries
                ColorCode::Index(idx as u8)
            }
        })
    }
}
