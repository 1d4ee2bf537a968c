//! The line renderer.

use super::layout::{half_block, spaces};
use super::{CellLayout, CellState, WireFormat};
use crate::dither::{DotGrid, FloydSteinberg};
use crate::image::PixelGrid;
use crate::mode::RenderMode;
use crate::quantize::Quantizer;

#[derive(Debug, Clone, Copy)]
enum Painter<'a> {
    Color {
        quantizer: Quantizer<'a>,
        wire: WireFormat,
        layout: CellLayout,
    },
    Braille,
}

/// Turns a [`PixelGrid`] into one text blob, one newline-terminated line
/// per text row.
///
/// ```
/// use term_raster::{CellLayout, ColorSample, PixelGrid, RenderMode, Renderer, Srgb};
///
/// let red = ColorSample::opaque(Srgb::from_u8(255, 0, 0));
/// let blue = ColorSample::opaque(Srgb::from_u8(0, 0, 255));
/// let grid = PixelGrid::from_rows(vec![vec![red, red], vec![blue, blue]]);
///
/// let text = Renderer::new(RenderMode::Term256, CellLayout::HalfBlock).render(&grid);
/// assert_eq!(text, "\x1b[38;5;9m\x1b[48;5;12m\u{2580}\u{2580}\x1b[0m\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    painter: Painter<'a>,
}

impl Renderer<'static> {
    /// Renderer for a mode. The layout is ignored in dither mode, which
    /// always packs braille glyphs.
    pub fn new(mode: RenderMode, layout: CellLayout) -> Self {
        match Quantizer::for_mode(mode) {
            Some(quantizer) => Renderer::with_quantizer(quantizer, WireFormat::for_mode(mode), layout),
            None => Self {
                painter: Painter::Braille,
            },
        }
    }
}

impl<'a> Renderer<'a> {
    /// Renderer with an explicit quantizer and dialect, e.g. a custom
    /// palette from [`Quantizer::indexed`].
    pub fn with_quantizer(quantizer: Quantizer<'a>, wire: WireFormat, layout: CellLayout) -> Self {
        Self {
            painter: Painter::Color {
                quantizer,
                wire,
                layout,
            },
        }
    }

    /// Render the grid. An empty grid gives an empty string.
    pub fn render(&self, grid: &PixelGrid) -> String {
        if grid.is_empty() {
            return String::new();
        }
        match self.painter {
            Painter::Color {
                quantizer,
                wire,
                layout,
            } => render_cells(grid, &quantizer, wire, layout),
            Painter::Braille => render_dots(&FloydSteinberg.dither(grid)),
        }
    }
}

fn render_cells(
    grid: &PixelGrid,
    quantizer: &Quantizer<'_>,
    wire: WireFormat,
    layout: CellLayout,
) -> String {
    let (width, height) = (grid.width(), grid.height());
    let mut out = String::with_capacity(width * height * 4);

    for y in (0..height).step_by(layout.rows_per_cell()) {
        let mut prev = CellState::BLANK;
        for x in 0..width {
            let top = quantizer.quantize(&grid.get(x, y));
            let (next, glyph) = match layout {
                CellLayout::HalfBlock => {
                    let bottom = if y + 1 < height {
                        quantizer.quantize(&grid.get(x, y + 1))
                    } else {
                        None
                    };
                    half_block(top, bottom)
                }
                CellLayout::Spaces => spaces(top, wire.fill_foreground()),
            };
            wire.transition(&mut out, &mut prev, next);
            out.push_str(glyph);
        }
        out.push_str(wire.line_end());
        out.push('\n');
    }
    out
}

fn render_dots(dots: &DotGrid) -> String {
    let line_end = WireFormat::Ansi256.line_end();
    let mut out = String::with_capacity((dots.cell_columns() * 3 + line_end.len() + 1) * dots.cell_rows());
    for cy in 0..dots.cell_rows() {
        out.extend((0..dots.cell_columns()).map(|cx| dots.glyph(cx, cy)));
        out.push_str(line_end);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use crate::image::ColorSample;

    fn px(r: u8, g: u8, b: u8) -> ColorSample {
        ColorSample::opaque(Srgb::from_u8(r, g, b))
    }

    fn render(mode: RenderMode, layout: CellLayout, rows: Vec<Vec<ColorSample>>) -> String {
        Renderer::new(mode, layout).render(&PixelGrid::from_rows(rows))
    }

    const CLEAR: ColorSample = ColorSample::TRANSPARENT;

    #[test]
    fn test_lone_bottom_pixel_uses_lower_half() {
        let out = render(
            RenderMode::Term256,
            CellLayout::HalfBlock,
            vec![vec![CLEAR], vec![px(255, 0, 0)]],
        );
        assert_eq!(out, "\x1b[38;5;9m\u{2584}\x1b[0m\n");
    }

    #[test]
    fn test_odd_height_last_row() {
        let out = render(
            RenderMode::Term256,
            CellLayout::HalfBlock,
            vec![vec![px(255, 0, 0)], vec![px(0, 0, 255)], vec![px(0, 0, 255)]],
        );
        assert_eq!(
            out,
            "\x1b[38;5;9m\x1b[48;5;12m\u{2580}\x1b[0m\n\x1b[38;5;12m\u{2580}\x1b[0m\n"
        );
    }

    #[test]
    fn test_transparent_gap_resets_once() {
        let red = px(255, 0, 0);
        let out = render(
            RenderMode::Term256,
            CellLayout::HalfBlock,
            vec![vec![red, CLEAR, CLEAR, red]],
        );
        assert_eq!(out, "\x1b[38;5;9m\u{2580}\x1b[0m  \x1b[38;5;9m\u{2580}\x1b[0m\n");
    }

    #[test]
    fn test_state_restarts_each_line() {
        let red = px(255, 0, 0);
        let out = render(RenderMode::Term256, CellLayout::Spaces, vec![vec![red], vec![red]]);
        assert_eq!(out, "\x1b[48;5;9m  \x1b[0m\n\x1b[48;5;9m  \x1b[0m\n");
    }

    #[test]
    fn test_irc_spaces_use_black_foreground() {
        let red = px(255, 0, 0);
        let out = render(RenderMode::Irc16, CellLayout::Spaces, vec![vec![red, red, CLEAR]]);
        assert_eq!(out, "\x031,4      \n");
    }

    #[test]
    fn test_irc_dropped_background_rewrites_foreground() {
        let red = px(255, 0, 0);
        let out = render(
            RenderMode::Irc16,
            CellLayout::HalfBlock,
            vec![vec![red, CLEAR], vec![red, red]],
        );
        assert_eq!(out, "\x034,4\u{2580}\x034\u{2584}\n");
        assert!(!out.contains('\x0f'));
    }

    #[test]
    fn test_custom_palette_renderer() {
        use crate::palette::{DistanceMetric, Palette, SearchOrder};

        let palette = Palette::new(
            &[[0, 0, 0], [255, 255, 255]],
            DistanceMetric::Lab,
            SearchOrder::Forward,
        );
        let renderer = Renderer::with_quantizer(
            Quantizer::indexed(&palette),
            WireFormat::Ansi256,
            CellLayout::Spaces,
        );
        let grid = PixelGrid::from_rows(vec![vec![px(20, 20, 20), px(240, 240, 240)]]);
        assert_eq!(
            renderer.render(&grid),
            "\x1b[48;5;0m  \x1b[48;5;1m  \x1b[0m\n"
        );
    }

    #[test]
    fn test_truecolor_spaces() {
        let out = render(
            RenderMode::Truecolor,
            CellLayout::Spaces,
            vec![vec![px(1, 2, 3), px(1, 2, 3)]],
        );
        assert_eq!(out, "\x1b[48;2;1;2;3m    \x1b[0m\n");
    }

    #[test]
    fn test_dither_has_no_color_codes() {
        let white = px(255, 255, 255);
        let out = render(RenderMode::Dither, CellLayout::HalfBlock, vec![vec![white; 4]; 4]);
        assert_eq!(out, "\u{28FF}\u{28FF}\x1b[0m\n");
    }

    #[test]
    fn test_dither_blank_cells_are_spaces() {
        let black = px(0, 0, 0);
        let out = render(RenderMode::Dither, CellLayout::Spaces, vec![vec![black; 3]; 5]);
        assert_eq!(out, "  \x1b[0m\n  \x1b[0m\n");
    }

    #[test]
    fn test_zero_width_grid() {
        let out = render(RenderMode::Term16, CellLayout::HalfBlock, vec![Vec::new(), Vec::new()]);
        assert_eq!(out, "");
    }
}
