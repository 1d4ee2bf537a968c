use clap::Parser;
use std::path::PathBuf;
use term_raster::{ModeError, RenderMode};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "PIXTERM_CONFIG";

#[derive(Debug, Parser)]
#[command(name = "pixterm")]
#[command(about = "Print images as terminal or IRC colored text")]
pub struct Cli {
    /// Image files to render, in order (PNG, JPEG, GIF, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Use the xterm 256-color palette
    #[arg(long = "256")]
    pub term256: bool,

    /// Use 24-bit truecolor escapes
    #[arg(long = "24bit")]
    pub truecolor: bool,

    /// Output mIRC 99-color codes
    #[arg(long)]
    pub irc: bool,

    /// Output classic 16-color IRC codes
    #[arg(long)]
    pub irc16: bool,

    /// Monochrome braille dots with error diffusion
    #[arg(long)]
    pub dither: bool,

    /// Use two spaces per pixel instead of fitting two pixels in a half block
    #[arg(long)]
    pub spaces: bool,

    /// Convert to grayscale first
    #[arg(long)]
    pub grayscale: bool,

    /// Invert colors
    #[arg(long)]
    pub invert: bool,

    /// Crop uniform or transparent borders
    #[arg(long)]
    pub autocrop: bool,

    /// Downscale if wider than this many columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Downscale if taller than this many rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Downscale to fit the terminal (COLUMNS and LINES)
    #[arg(long)]
    pub autoresize: bool,

    /// Play an animated GIF or PNG in place (single file only)
    #[arg(long)]
    pub animated: bool,

    /// YAML config file (defaults to $PIXTERM_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The mode picked by flags, if any. More than one flag is an error.
    pub fn mode(&self) -> Result<Option<RenderMode>, ModeError> {
        let flags = [
            (self.term256, RenderMode::Term256),
            (self.truecolor, RenderMode::Truecolor),
            (self.irc, RenderMode::Irc),
            (self.irc16, RenderMode::Irc16),
            (self.dither, RenderMode::Dither),
        ];
        RenderMode::from_selectors(flags.into_iter().filter(|(set, _)| *set).map(|(_, m)| m))
    }

    /// `--config`, falling back to the environment.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }
}
