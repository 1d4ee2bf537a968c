//! Text output: escape sequences, cell layouts and the line renderer.
//!
//! The [`Renderer`] walks a pixel grid one text row at a time and keeps
//! the last emitted foreground and background for the current line, so
//! a color sequence is only written when a channel actually changes.
//!
//! # Wire Formats
//!
//! | Format | Foreground | Background | Mid-line reset | Line end |
//! |---|---|---|---|---|
//! | ANSI 256 | `ESC[38;5;Nm` | `ESC[48;5;Nm` | `ESC[0m` | `ESC[0m` |
//! | ANSI truecolor | `ESC[38;2;R;G;Bm` | `ESC[48;2;R;G;Bm` | `ESC[0m` | `ESC[0m` |
//! | IRC | `^CN` | `,N` after a foreground | none, colors persist | none |

mod layout;
mod renderer;
mod wire;

pub use layout::CellLayout;
pub use renderer::Renderer;
pub use wire::{CellState, WireFormat};
