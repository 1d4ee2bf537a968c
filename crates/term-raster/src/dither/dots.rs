//! On/off dot grids and braille glyph packing.

/// First codepoint of the Unicode braille block (no dots raised).
const BRAILLE_BASE: u32 = 0x2800;

/// Dots per glyph horizontally.
pub const CELL_WIDTH: usize = 2;

/// Dots per glyph vertically.
pub const CELL_HEIGHT: usize = 4;

/// Bit of each dot inside a braille codepoint, indexed `[dy][dx]`.
const DOT_BITS: [[u8; CELL_WIDTH]; CELL_HEIGHT] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// A one-bit-per-dot grid, read back two columns by four rows per glyph.
///
/// ```
/// use term_raster::DotGrid;
///
/// let mut dots = DotGrid::new(2, 4);
/// dots.set(0, 0, true);
/// dots.set(1, 3, true);
/// assert_eq!(dots.glyph(0, 0), '\u{2881}');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGrid {
    width: usize,
    height: usize,
    dots: Vec<bool>,
}

impl DotGrid {
    /// An all-off grid of `width` x `height` dots.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.dots[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.dots[y * self.width + x] = on;
    }

    /// Number of dots that are on.
    pub fn count_on(&self) -> usize {
        self.dots.iter().filter(|&&on| on).count()
    }

    /// Glyph columns needed to cover the grid.
    #[inline]
    pub fn cell_columns(&self) -> usize {
        self.width.div_ceil(CELL_WIDTH)
    }

    /// Glyph rows needed to cover the grid.
    #[inline]
    pub fn cell_rows(&self) -> usize {
        self.height.div_ceil(CELL_HEIGHT)
    }

    /// Braille bit pattern of glyph cell `(cx, cy)`.
    ///
    /// Dots past the grid edge count as off.
    pub fn cell_bits(&self, cx: usize, cy: usize) -> u8 {
        let mut bits = 0;
        for (dy, row) in DOT_BITS.iter().enumerate() {
            let y = cy * CELL_HEIGHT + dy;
            if y >= self.height {
                break;
            }
            for (dx, &bit) in row.iter().enumerate() {
                let x = cx * CELL_WIDTH + dx;
                if x < self.width && self.is_on(x, y) {
                    bits |= bit;
                }
            }
        }
        bits
    }

    /// The character for glyph cell `(cx, cy)`.
    ///
    /// A cell with no dots on is a plain space, not U+2800.
    pub fn glyph(&self, cx: usize, cy: usize) -> char {
        match self.cell_bits(cx, cy) {
            0 => ' ',
            bits => char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or(' '),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_bit_layout() {
        let expected = [
            ((0, 0), 0x01),
            ((0, 1), 0x02),
            ((0, 2), 0x04),
            ((1, 0), 0x08),
            ((1, 1), 0x10),
            ((1, 2), 0x20),
            ((0, 3), 0x40),
            ((1, 3), 0x80),
        ];
        for ((x, y), bit) in expected {
            let mut dots = DotGrid::new(2, 4);
            dots.set(x, y, true);
            assert_eq!(dots.cell_bits(0, 0), bit, "dot ({}, {})", x, y);
        }
    }

    #[test]
    fn test_full_and_empty_glyphs() {
        let mut dots = DotGrid::new(4, 4);
        for y in 0..4 {
            for x in 0..2 {
                dots.set(x, y, true);
            }
        }
        assert_eq!(dots.glyph(0, 0), '\u{28FF}');
        assert_eq!(dots.glyph(1, 0), ' ');
        assert_eq!(dots.count_on(), 8);
    }

    #[test]
    fn test_partial_cells_at_edges() {
        let mut dots = DotGrid::new(3, 5);
        dots.set(2, 4, true);
        assert_eq!((dots.cell_columns(), dots.cell_rows()), (2, 2));
        assert_eq!(dots.glyph(1, 1), '\u{2801}');
        assert_eq!(dots.glyph(0, 1), ' ');
    }

    #[test]
    fn test_empty_grid() {
        let dots = DotGrid::new(0, 0);
        assert_eq!((dots.cell_columns(), dots.cell_rows()), (0, 0));
    }
}
