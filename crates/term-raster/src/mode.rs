//! Render mode selection
//!
//! Exactly one [`RenderMode`] is active per render call. The mode decides
//! the palette, the distance metric, the tie-break order and the escape
//! syntax of the output.

use std::fmt;
use std::str::FromStr;

/// The output color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// xterm 16-color palette, ANSI escapes.
    #[default]
    Term16,
    /// xterm 256-color palette, ANSI escapes.
    Term256,
    /// 24-bit color passed through directly, ANSI escapes.
    Truecolor,
    /// Extended 99-color mIRC palette, IRC control codes.
    Irc,
    /// Classic 16-color mIRC palette, IRC control codes.
    Irc16,
    /// Monochrome braille glyphs produced by error diffusion.
    Dither,
}

impl RenderMode {
    pub const ALL: [RenderMode; 6] = [
        RenderMode::Term16,
        RenderMode::Term256,
        RenderMode::Truecolor,
        RenderMode::Irc,
        RenderMode::Irc16,
        RenderMode::Dither,
    ];

    /// Canonical name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Term16 => "16",
            RenderMode::Term256 => "256",
            RenderMode::Truecolor => "24bit",
            RenderMode::Irc => "irc",
            RenderMode::Irc16 => "irc16",
            RenderMode::Dither => "dither",
        }
    }

    /// True for the IRC dialects, where color persists until changed.
    #[inline]
    pub fn is_irc(self) -> bool {
        matches!(self, RenderMode::Irc | RenderMode::Irc16)
    }

    /// Resolve a set of mode selectors (e.g. command-line switches).
    ///
    /// No selector yields `Ok(None)`, letting the caller fall back to its
    /// default. More than one is a configuration error.
    ///
    /// ```
    /// use term_raster::{ModeError, RenderMode};
    ///
    /// assert_eq!(RenderMode::from_selectors([]), Ok(None));
    /// assert_eq!(
    ///     RenderMode::from_selectors([RenderMode::Irc]),
    ///     Ok(Some(RenderMode::Irc))
    /// );
    /// assert_eq!(
    ///     RenderMode::from_selectors([RenderMode::Irc, RenderMode::Term256]),
    ///     Err(ModeError::Conflicting(RenderMode::Irc, RenderMode::Term256))
    /// );
    /// ```
    pub fn from_selectors<I>(selected: I) -> Result<Option<RenderMode>, ModeError>
    where
        I: IntoIterator<Item = RenderMode>,
    {
        let mut selected = selected.into_iter();
        let Some(first) = selected.next() else {
            return Ok(None);
        };
        match selected.next() {
            Some(second) => Err(ModeError::Conflicting(first, second)),
            None => Ok(Some(first)),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = ModeError;

    /// Parse a mode name, case-insensitive.
    ///
    /// Accepts the canonical names plus `term16`, `term256` and `truecolor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "16" | "term16" => Ok(RenderMode::Term16),
            "256" | "term256" => Ok(RenderMode::Term256),
            "24bit" | "truecolor" => Ok(RenderMode::Truecolor),
            "irc" => Ok(RenderMode::Irc),
            "irc16" => Ok(RenderMode::Irc16),
            "dither" => Ok(RenderMode::Dither),
            _ => Err(ModeError::Unknown(s.to_string())),
        }
    }
}

/// Error type for render mode selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// Two mode selectors were given at once
    Conflicting(RenderMode, RenderMode),
    /// The mode name is not recognized
    Unknown(String),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::Conflicting(a, b) => {
                write!(f, "only one render mode may be given (got {} and {})", a, b)
            }
            ModeError::Unknown(name) => {
                write!(
                    f,
                    "unknown render mode {:?} (expected one of 16, 256, 24bit, irc, irc16, dither)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for ModeError {}
