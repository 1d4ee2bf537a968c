//! How source pixels map onto text cells.

use super::CellState;
use crate::quantize::ColorCode;

const UPPER_HALF: &str = "\u{2580}";
const LOWER_HALF: &str = "\u{2584}";

/// Pixel-to-cell layout of the color modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellLayout {
    /// Two stacked pixels per cell drawn with half-block glyphs.
    #[default]
    HalfBlock,
    /// One pixel per two space characters, painted as background.
    Spaces,
}

impl CellLayout {
    /// Source rows consumed per text row.
    pub fn rows_per_cell(self) -> usize {
        match self {
            CellLayout::HalfBlock => 2,
            CellLayout::Spaces => 1,
        }
    }

    /// Text printed for a cell with no color.
    pub fn blank(self) -> &'static str {
        match self {
            CellLayout::HalfBlock => " ",
            CellLayout::Spaces => "  ",
        }
    }
}

/// Colors and glyph for a half-block cell from its top and bottom pixel.
///
/// A lone bottom pixel is drawn as the lower half in the foreground so
/// the terminal background shows through the top.
pub(crate) fn half_block(
    top: Option<ColorCode>,
    bottom: Option<ColorCode>,
) -> (CellState, &'static str) {
    match (top, bottom) {
        (None, None) => (CellState::BLANK, CellLayout::HalfBlock.blank()),
        (None, Some(b)) => (CellState::new(Some(b), None), LOWER_HALF),
        (Some(t), None) => (CellState::new(Some(t), None), UPPER_HALF),
        (Some(t), Some(b)) => (CellState::new(Some(t), Some(b)), UPPER_HALF),
    }
}

/// Colors and glyph for a two-space cell.
pub(crate) fn spaces(
    pixel: Option<ColorCode>,
    fill_foreground: Option<ColorCode>,
) -> (CellState, &'static str) {
    let state = match pixel {
        Some(color) => CellState::new(fill_foreground, Some(color)),
        None => CellState::BLANK,
    };
    (state, CellLayout::Spaces.blank())
}
