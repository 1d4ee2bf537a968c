//! Image decoding into [`RgbaImage`] canvases.
//!
//! Still images go through `image`, which sniffs the format (PNG, JPEG,
//! GIF and the other formats it enables by default) and widens them to
//! 16-bit RGBA. Animated GIF and APNG files are decoded into composited
//! full-canvas frames.

use crate::error::AppError;
use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::{AnimationDecoder, DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;
use term_raster::RgbaImage;

/// Loop count of animated GIFs, which play until interrupted.
pub const GIF_PLAYS: u32 = 0;

/// One fully composited animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub image: RgbaImage,
    pub delay: Duration,
}

/// Decoded frames plus the loop count (0 = forever).
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub frames: Vec<Frame>,
    pub num_plays: u32,
}

pub fn open_image(path: &Path) -> Result<RgbaImage, AppError> {
    decode_image(&std::fs::read(path)?)
}

pub fn open_animation(path: &Path) -> Result<Animation, AppError> {
    decode_animation(&std::fs::read(path)?)
}

/// Decode a still image. Animated files yield their first (or, for APNG,
/// default) image.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, AppError> {
    let decoded = image::load_from_memory(bytes)?;
    tracing::debug!(
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded image"
    );
    Ok(from_dynamic(&decoded))
}

/// Decode every frame of an animated GIF or APNG. Anything else yields a
/// single frame played once.
pub fn decode_animation(bytes: &[u8]) -> Result<Animation, AppError> {
    let (frames, num_plays) = match image::guess_format(bytes)? {
        ImageFormat::Gif => {
            let frames = GifDecoder::new(Cursor::new(bytes))?
                .into_frames()
                .collect_frames()?;
            (frames, GIF_PLAYS)
        }
        ImageFormat::Png => {
            let decoder = PngDecoder::new(Cursor::new(bytes))?;
            if !decoder.is_apng()? {
                return still(bytes);
            }
            let frames = decoder.apng()?.into_frames().collect_frames()?;
            (frames, apng_plays(bytes)?)
        }
        _ => return still(bytes),
    };

    let frames: Vec<Frame> = frames
        .into_iter()
        .map(|frame| Frame {
            delay: frame_delay(frame.delay()),
            image: from_rgba8(&frame.into_buffer()),
        })
        .collect();
    tracing::debug!(frames = frames.len(), num_plays, "Decoded animation");
    Ok(Animation { frames, num_plays })
}

fn still(bytes: &[u8]) -> Result<Animation, AppError> {
    Ok(Animation {
        frames: vec![Frame {
            image: decode_image(bytes)?,
            delay: Duration::ZERO,
        }],
        num_plays: 1,
    })
}

/// `num_plays` from the APNG animation control chunk.
fn apng_plays(bytes: &[u8]) -> Result<u32, AppError> {
    let reader = png::Decoder::new(Cursor::new(bytes)).read_info()?;
    Ok(reader.info().animation_control.map_or(1, |ac| ac.num_plays))
}

fn frame_delay(delay: image::Delay) -> Duration {
    let (numer, denom) = delay.numer_denom_ms();
    Duration::from_nanos(u64::from(numer) * 1_000_000 / u64::from(denom.max(1)))
}

fn from_dynamic(decoded: &DynamicImage) -> RgbaImage {
    let rgba = decoded.to_rgba16();
    RgbaImage::new(
        rgba.width() as usize,
        rgba.height() as usize,
        rgba.pixels().map(|px| px.0).collect(),
    )
}

fn from_rgba8(buffer: &image::RgbaImage) -> RgbaImage {
    let pixels: Vec<[u8; 4]> = buffer.pixels().map(|px| px.0).collect();
    RgbaImage::from_rgba8(buffer.width() as usize, buffer.height() as usize, &pixels)
}
