//! Reference palettes for the indexed render modes
//!
//! Each palette is an ordered table; an entry's index is the wire-level
//! color code for its mode. Tables are immutable and shared by every render.

mod palette;
mod tables;

pub use self::palette::{DistanceMetric, Palette, SearchOrder};
pub use tables::{IRC_16, IRC_99, TERM_16, XTERM_256};
