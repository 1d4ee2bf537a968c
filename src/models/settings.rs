use crate::cli::Cli;
use crate::error::AppError;
use crate::models::AppConfig;
use term_raster::{RenderMode, TermRenderer};

/// Rows kept free below the image for the shell prompt.
pub const PROMPT_ROWS: usize = 3;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: usize,
    pub rows: usize,
}

impl TerminalSize {
    /// Ask the terminal, falling back to exported `COLUMNS` and `LINES`.
    pub fn detect() -> Option<Self> {
        match crossterm::terminal::size() {
            Ok((columns, rows)) if columns > 0 && rows > 0 => Some(Self {
                columns: columns.into(),
                rows: rows.into(),
            }),
            Ok(_) => Self::from_env(),
            Err(e) => {
                tracing::debug!(%e, "Terminal size query failed, trying COLUMNS and LINES");
                Self::from_env()
            }
        }
    }

    fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("COLUMNS").ok().as_deref(),
            std::env::var("LINES").ok().as_deref(),
        )
    }

    /// `None` unless both values are positive numbers.
    pub fn from_vars(columns: Option<&str>, rows: Option<&str>) -> Option<Self> {
        let parse = |v: Option<&str>| v?.trim().parse::<usize>().ok().filter(|&n| n > 0);
        Some(Self {
            columns: parse(columns)?,
            rows: parse(rows)?,
        })
    }
}

/// Effective options after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: RenderMode,
    pub spaces: bool,
    pub grayscale: bool,
    pub invert: bool,
    pub autocrop: bool,
    /// Output bound in text columns (0 = unconstrained)
    pub columns: usize,
    /// Output bound in text rows (0 = unconstrained)
    pub rows: usize,
}

impl Settings {
    /// `terminal` is only asked for the size when `--autoresize` is set.
    pub fn resolve(
        cli: &Cli,
        config: &AppConfig,
        terminal: impl FnOnce() -> Option<TerminalSize>,
    ) -> Result<Self, AppError> {
        let mode = match cli.mode()? {
            Some(mode) => mode,
            None => config.mode()?.unwrap_or_default(),
        };

        let (columns, rows) = if cli.autoresize {
            match terminal() {
                Some(size) => (size.columns, size.rows.saturating_sub(PROMPT_ROWS)),
                None => {
                    tracing::warn!("Terminal size unknown, not resizing");
                    (0, 0)
                }
            }
        } else {
            (
                cli.width.or(config.width).unwrap_or(0),
                cli.height.or(config.height).unwrap_or(0),
            )
        };

        let settings = Self {
            mode,
            spaces: cli.spaces || config.spaces,
            grayscale: cli.grayscale || config.grayscale,
            invert: cli.invert || config.invert,
            autocrop: cli.autocrop || config.autocrop,
            columns,
            rows,
        };
        tracing::debug!(?settings, "Resolved settings");
        Ok(settings)
    }

    /// The text bounds converted to source pixels for this layout.
    ///
    /// A half-block cell holds two pixel rows, a two-space cell one pixel
    /// across two columns, and a braille glyph two by four dots.
    pub fn pixel_bounds(&self) -> (usize, usize) {
        let (w, h) = (self.columns, self.rows);
        match (self.mode, self.spaces) {
            (RenderMode::Dither, _) => (w.saturating_mul(2), h.saturating_mul(4)),
            (_, true) => (if w == 0 { 0 } else { (w / 2).max(1) }, h),
            (_, false) => (w, h.saturating_mul(2)),
        }
    }

    pub fn renderer(&self) -> TermRenderer {
        let (max_width, max_height) = self.pixel_bounds();
        TermRenderer::new(self.mode)
            .grayscale(self.grayscale)
            .invert(self.invert)
            .autocrop(self.autocrop)
            .spaces(self.spaces)
            .max_size(max_width, max_height)
    }
}
