//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` to a not-yet-visited neighbor and
/// the numerator of the share of error it receives. A neighbor gets
/// `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries; `dy` is never negative.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Largest `dy` in `entries`; the error buffer keeps `max_dy + 1` rows.
    pub max_dy: usize,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes all of the error to 4 neighbors.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagates_everything() {
        let sum: u32 = FLOYD_STEINBERG.entries.iter().map(|e| e.2 as u32).sum();
        assert_eq!(sum, FLOYD_STEINBERG.divisor as u32);
    }

    #[test]
    fn test_max_dy_matches_entries() {
        let max = FLOYD_STEINBERG.entries.iter().map(|e| e.1).max();
        assert_eq!(max, Some(FLOYD_STEINBERG.max_dy as i32));
    }
}
