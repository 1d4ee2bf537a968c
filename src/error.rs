use term_raster::ModeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("APNG header error: {0}")]
    Apng(#[from] png::DecodingError),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Mode(#[from] ModeError),

    #[error("Animation error: {0}")]
    Animation(String),
}
