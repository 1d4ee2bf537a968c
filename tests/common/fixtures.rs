//! PNG fixtures written into temporary directories.

use png::{BitDepth, BlendOp, ColorType, DisposeOp};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Raw image data for one PNG layout.
pub struct PngSpec<'a> {
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
    pub depth: BitDepth,
    pub palette: Option<Vec<u8>>,
    pub trns: Option<Vec<u8>>,
    pub data: &'a [u8],
}

impl<'a> PngSpec<'a> {
    pub fn new(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            color,
            depth,
            palette: None,
            trns: None,
            data,
        }
    }
}

fn encoder(path: &Path, width: u32, height: u32) -> png::Encoder<'static, BufWriter<File>> {
    let file = File::create(path).expect("create fixture");
    png::Encoder::new(BufWriter::new(file), width, height)
}

pub fn write_png(dir: &Path, name: &str, spec: &PngSpec) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = encoder(&path, spec.width, spec.height);
    encoder.set_color(spec.color);
    encoder.set_depth(spec.depth);
    if let Some(palette) = &spec.palette {
        encoder.set_palette(palette.clone());
    }
    if let Some(trns) = &spec.trns {
        encoder.set_trns(trns.clone());
    }
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(spec.data).expect("png data");
    writer.finish().expect("png finish");
    path
}

/// 8-bit RGBA PNG from row-major pixels.
pub fn write_rgba8(dir: &Path, name: &str, width: u32, height: u32, pixels: &[[u8; 4]]) -> PathBuf {
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    write_png(
        dir,
        name,
        &PngSpec::new(width, height, ColorType::Rgba, BitDepth::Eight, &data),
    )
}

/// One APNG frame, placed on the canvas at `(x, y)`.
pub struct ApngFrame {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
    pub delay: (u16, u16),
    pub blend: BlendOp,
    pub dispose: DisposeOp,
}

impl ApngFrame {
    pub fn full(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            pixels,
            delay: (1, 10),
            blend: BlendOp::Source,
            dispose: DisposeOp::None,
        }
    }
}

/// 8-bit RGBA APNG; the first frame doubles as the default image and must
/// cover the whole canvas.
pub fn write_apng(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    num_plays: u32,
    frames: &[ApngFrame],
) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = encoder(&path, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder
        .set_animated(frames.len() as u32, num_plays)
        .expect("animated");
    let mut writer = encoder.write_header().expect("apng header");
    for frame in frames {
        // Bounds are checked against the current offset, so move home first
        writer.set_frame_position(0, 0).expect("position");
        writer.set_frame_dimension(frame.width, frame.height).expect("dimension");
        writer.set_frame_position(frame.x, frame.y).expect("position");
        writer.set_frame_delay(frame.delay.0, frame.delay.1).expect("delay");
        writer.set_blend_op(frame.blend).expect("blend");
        writer.set_dispose_op(frame.dispose).expect("dispose");
        let data: Vec<u8> = frame.pixels.iter().flatten().copied().collect();
        writer.write_image_data(&data).expect("frame data");
    }
    writer.finish().expect("apng finish");
    path
}

/// Animated GIF that loops forever; each frame is `(pixels, delay_ms)`.
pub fn write_gif(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    frames: &[(Vec<[u8; 4]>, u32)],
) -> PathBuf {
    use image::codecs::gif::{GifEncoder, Repeat};

    let path = dir.join(name);
    let file = File::create(&path).expect("create fixture");
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite).expect("repeat");
    let frames = frames.iter().map(|(pixels, delay_ms)| {
        let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
        let buffer = image::RgbaImage::from_raw(width, height, raw).expect("frame size");
        image::Frame::from_parts(buffer, 0, 0, image::Delay::from_numer_denom_ms(*delay_ms, 1))
    });
    encoder.encode_frames(frames).expect("gif frames");
    path
}

/// Solid-color baseline JPEG.
pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .expect("jpeg");
    path
}

/// Write a YAML config file.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("pixterm.yaml");
    std::fs::write(&path, content).expect("write config");
    path
}
