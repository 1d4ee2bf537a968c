//! Escape-sequence syntax per output dialect.

use std::fmt::Write;

use crate::mode::RenderMode;
use crate::quantize::ColorCode;

const ANSI_RESET: &str = "\x1b[0m";
const IRC_COLOR: char = '\x03';

/// The color codes in effect for a text cell; `None` is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellState {
    pub fg: Option<ColorCode>,
    pub bg: Option<ColorCode>,
}

impl CellState {
    /// A cell with no color at all.
    pub const BLANK: CellState = CellState { fg: None, bg: None };

    #[inline]
    pub fn new(fg: Option<ColorCode>, bg: Option<ColorCode>) -> Self {
        Self { fg, bg }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// Escape syntax of one output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// `ESC[38;5;` / `ESC[48;5;` with a palette index.
    Ansi256,
    /// `ESC[38;2;` / `ESC[48;2;` with `r;g;b`.
    AnsiTruecolor,
    /// mIRC color control codes.
    Irc,
}

impl WireFormat {
    pub fn for_mode(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Truecolor => WireFormat::AnsiTruecolor,
            RenderMode::Irc | RenderMode::Irc16 => WireFormat::Irc,
            RenderMode::Term16 | RenderMode::Term256 | RenderMode::Dither => WireFormat::Ansi256,
        }
    }

    /// Clears all color attributes in the middle of a line.
    ///
    /// IRC has none: colors persist until the next color code.
    pub fn reset(self) -> &'static str {
        match self {
            WireFormat::Irc => "",
            _ => ANSI_RESET,
        }
    }

    /// Written before every newline. IRC colors end with the line.
    pub fn line_end(self) -> &'static str {
        match self {
            WireFormat::Irc => "",
            _ => ANSI_RESET,
        }
    }

    /// Foreground for a cell that only paints its background.
    ///
    /// IRC has no way to send a background alone, so it gets black.
    pub fn fill_foreground(self) -> Option<ColorCode> {
        match self {
            WireFormat::Irc => Some(ColorCode::Index(1)),
            _ => None,
        }
    }

    /// Append whatever takes the line from `prev` to `next`, and update
    /// `prev`.
    ///
    /// Nothing is written for a channel that keeps its code. A channel
    /// going from set to unset costs a reset, after which the remaining
    /// channels are written again. On IRC the reset is empty, so only the
    /// rewrite of the remaining channel shows up.
    pub fn transition(self, out: &mut String, prev: &mut CellState, next: CellState) {
        if *prev == next {
            return;
        }
        let drops_fg = prev.fg.is_some() && next.fg.is_none();
        let drops_bg = prev.bg.is_some() && next.bg.is_none();
        if drops_fg || drops_bg {
            out.push_str(self.reset());
            *prev = CellState::BLANK;
        }

        match self {
            WireFormat::Ansi256 | WireFormat::AnsiTruecolor => {
                let selector = if self == WireFormat::Ansi256 { 5 } else { 2 };
                if let Some(fg) = next.fg.filter(|&fg| prev.fg != Some(fg)) {
                    let _ = write!(out, "\x1b[38;{};{}m", selector, fg);
                }
                if let Some(bg) = next.bg.filter(|&bg| prev.bg != Some(bg)) {
                    let _ = write!(out, "\x1b[48;{};{}m", selector, bg);
                }
            }
            WireFormat::Irc => match (next.fg, next.bg) {
                (Some(fg), Some(bg)) if prev.bg != Some(bg) => {
                    let _ = write!(out, "{}{},{}", IRC_COLOR, fg, bg);
                }
                (Some(fg), _) if prev.fg != Some(fg) => {
                    let _ = write!(out, "{}{}", IRC_COLOR, fg);
                }
                _ => {}
            },
        }
        *prev = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Option<ColorCode> = Some(ColorCode::Index(9));
    const BLUE: Option<ColorCode> = Some(ColorCode::Index(12));

    fn step(wire: WireFormat, prev: &mut CellState, next: CellState) -> String {
        let mut out = String::new();
        wire.transition(&mut out, prev, next);
        out
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(WireFormat::for_mode(RenderMode::Term16), WireFormat::Ansi256);
        assert_eq!(WireFormat::for_mode(RenderMode::Term256), WireFormat::Ansi256);
        assert_eq!(WireFormat::for_mode(RenderMode::Truecolor), WireFormat::AnsiTruecolor);
        assert_eq!(WireFormat::for_mode(RenderMode::Irc), WireFormat::Irc);
        assert_eq!(WireFormat::for_mode(RenderMode::Irc16), WireFormat::Irc);
    }

    #[test]
    fn test_ansi_writes_only_changed_channels() {
        let wire = WireFormat::Ansi256;
        let mut prev = CellState::BLANK;
        assert_eq!(
            step(wire, &mut prev, CellState::new(RED, BLUE)),
            "\x1b[38;5;9m\x1b[48;5;12m"
        );
        assert_eq!(step(wire, &mut prev, CellState::new(RED, BLUE)), "");
        assert_eq!(step(wire, &mut prev, CellState::new(BLUE, BLUE)), "\x1b[38;5;12m");
        assert_eq!(step(wire, &mut prev, CellState::new(BLUE, RED)), "\x1b[48;5;9m");
    }

    #[test]
    fn test_truecolor_syntax() {
        let mut prev = CellState::BLANK;
        let orange = Some(ColorCode::Rgb([255, 128, 0]));
        assert_eq!(
            step(WireFormat::AnsiTruecolor, &mut prev, CellState::new(orange, None)),
            "\x1b[38;2;255;128;0m"
        );
    }

    #[test]
    fn test_unsetting_background_resets_and_rewrites_fg() {
        let mut prev = CellState::new(RED, BLUE);
        assert_eq!(
            step(WireFormat::Ansi256, &mut prev, CellState::new(RED, None)),
            "\x1b[0m\x1b[38;5;9m"
        );
        assert_eq!(prev, CellState::new(RED, None));
    }

    #[test]
    fn test_blank_after_color_resets() {
        let mut prev = CellState::new(RED, None);
        assert_eq!(step(WireFormat::Ansi256, &mut prev, CellState::BLANK), "\x1b[0m");
        assert_eq!(step(WireFormat::Ansi256, &mut prev, CellState::BLANK), "");
    }

    #[test]
    fn test_irc_never_resets_mid_line() {
        let wire = WireFormat::Irc;
        assert_eq!(wire.reset(), "");

        let mut prev = CellState::new(RED, BLUE);
        assert_eq!(step(wire, &mut prev, CellState::BLANK), "");
        assert_eq!(prev, CellState::BLANK);

        // dropping the background rewrites the foreground alone
        let mut prev = CellState::new(RED, BLUE);
        assert_eq!(step(wire, &mut prev, CellState::new(RED, None)), "\x039");
        assert_eq!(prev, CellState::new(RED, None));
    }

    #[test]
    fn test_irc_pairs_background_with_foreground() {
        let wire = WireFormat::Irc;
        let mut prev = CellState::BLANK;
        assert_eq!(step(wire, &mut prev, CellState::new(RED, BLUE)), "\x039,12");
        // only the background changed
        assert_eq!(step(wire, &mut prev, CellState::new(RED, RED)), "\x039,9");
        // only the foreground changed; the background persists
        assert_eq!(step(wire, &mut prev, CellState::new(BLUE, RED)), "\x0312");
        assert_eq!(step(wire, &mut prev, CellState::new(BLUE, RED)), "");
    }

    #[test]
    fn test_irc_has_no_line_end() {
        assert_eq!(WireFormat::Irc.line_end(), "");
        assert_eq!(WireFormat::Ansi256.line_end(), "\x1b[0m");
        assert_eq!(WireFormat::Irc.fill_foreground(), Some(ColorCode::Index(1)));
        assert_eq!(WireFormat::AnsiTruecolor.fill_foreground(), None);
    }
}
