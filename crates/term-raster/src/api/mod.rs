//! High-level API: the [`TermRenderer`] builder.

mod builder;

pub use builder::TermRenderer;
