//! Palette struct with precomputed perceptual coordinates and
//! nearest-color matching.

use std::sync::LazyLock;

use super::tables::{IRC_16, IRC_99, TERM_16, XTERM_256};
use crate::color::{Lab, LinearRgb, Luv, Srgb, Xyz};
use crate::mode::RenderMode;

/// Distance metric for palette color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Squared Euclidean distance in CIE L\*a\*b\*.
    Lab,
    /// Squared Euclidean distance in CIE L\*u\*v\*.
    ///
    /// The small 16-color tables look better matched this way: dark inputs
    /// stay on dark entries instead of drifting to saturated ones.
    Luv,
}

/// Scan direction of the nearest-color search.
///
/// Only a strictly smaller distance replaces the current best, so the
/// direction decides which index wins a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// Index 0 upwards; ties resolve to the lowest index.
    Forward,
    /// Last index downwards; ties resolve to the highest index.
    Reverse,
}

static TERM_16_PALETTE: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(&TERM_16, DistanceMetric::Luv, SearchOrder::Forward));

static TERM_256_PALETTE: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(&XTERM_256, DistanceMetric::Lab, SearchOrder::Forward));

// The extended table repeats black, white and the primaries at higher
// codes; reverse search prefers the extended entries.
static IRC_99_PALETTE: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(&IRC_99, DistanceMetric::Lab, SearchOrder::Reverse));

static IRC_16_PALETTE: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(&IRC_16, DistanceMetric::Luv, SearchOrder::Forward));

/// An ordered color table with perceptual matching.
///
/// All color space conversions are done once at construction; matching a
/// pixel converts only the pixel.
///
/// # Example
///
/// ```
/// use term_raster::{DistanceMetric, Palette, SearchOrder, Srgb};
///
/// let palette = Palette::new(
///     &[[0, 0, 0], [255, 255, 255]],
///     DistanceMetric::Lab,
///     SearchOrder::Forward,
/// );
/// let (idx, _) = palette.find_nearest(Srgb::from_u8(200, 200, 200));
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    srgb: Vec<Srgb>,
    lab: Vec<Lab>,
    luv: Vec<Luv>,
    metric: DistanceMetric,
    order: SearchOrder,
}

impl Palette {
    /// Build a palette from sRGB byte triples.
    ///
    /// Duplicate entries are allowed; `order` decides which one matches.
    pub fn new(colors: &[[u8; 3]], metric: DistanceMetric, order: SearchOrder) -> Self {
        let srgb: Vec<Srgb> = colors.iter().map(|&c| Srgb::from_bytes(c)).collect();
        let xyz: Vec<Xyz> = srgb
            .iter()
            .map(|&c| Xyz::from(LinearRgb::from(c)))
            .collect();
        Self {
            lab: xyz.iter().map(|&c| Lab::from(c)).collect(),
            luv: xyz.iter().map(|&c| Luv::from(c)).collect(),
            srgb,
            metric,
            order,
        }
    }

    /// The shared palette of an indexed render mode.
    ///
    /// Returns `None` for [`RenderMode::Truecolor`] and [`RenderMode::Dither`],
    /// which have no palette.
    pub fn for_mode(mode: RenderMode) -> Option<&'static Palette> {
        match mode {
            RenderMode::Term16 => Some(&*TERM_16_PALETTE),
            RenderMode::Term256 => Some(&*TERM_256_PALETTE),
            RenderMode::Irc => Some(&*IRC_99_PALETTE),
            RenderMode::Irc16 => Some(&*IRC_16_PALETTE),
            RenderMode::Truecolor | RenderMode::Dither => None,
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.srgb.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.srgb.is_empty()
    }

    /// Get the sRGB color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.srgb[idx]
    }

    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    #[inline]
    pub fn order(&self) -> SearchOrder {
        self.order
    }

    /// Find the nearest palette entry to an sRGB color.
    ///
    /// Returns `(index, squared distance)`. Linear scan; the largest table
    /// has 256 entries.
    ///
    /// # Panics
    ///
    /// Panics on an empty palette.
    pub fn find_nearest(&self, color: Srgb) -> (usize, f32) {
        assert!(!self.is_empty(), "find_nearest on an empty palette");
        let xyz = Xyz::from(LinearRgb::from(color));
        match self.metric {
            DistanceMetric::Lab => {
                let lab = Lab::from(xyz);
                self.scan(|i| lab.distance_squared(self.lab[i]))
            }
            DistanceMetric::Luv => {
                let luv = Luv::from(xyz);
                self.scan(|i| luv.distance_squared(self.luv[i]))
            }
        }
    }

    #[inline]
    fn scan(&self, distance: impl Fn(usize) -> f32) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;
        let mut visit = |i: usize| {
            let dist = distance(i);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        };
        match self.order {
            SearchOrder::Forward => (0..self.len()).for_each(&mut visit),
            SearchOrder::Reverse => (0..self.len()).rev().for_each(&mut visit),
        }
        (best_idx, best_dist)
    }
}
