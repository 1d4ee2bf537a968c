use crate::error::AppError;
use crate::models::Settings;
use crate::services::animation::{RenderedAnimation, RenderedFrame};
use crate::services::decoder;
use std::path::Path;
use term_raster::{ImageSource, TermRenderer};

/// Turns PNG files into text using the resolved settings.
#[derive(Debug, Clone)]
pub struct RenderService {
    renderer: TermRenderer,
}

impl RenderService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            renderer: settings.renderer(),
        }
    }

    pub fn render_image(&self, image: &impl ImageSource) -> String {
        self.renderer.render(image)
    }

    pub fn render_file(&self, path: &Path) -> Result<String, AppError> {
        let image = decoder::open_image(path)?;
        tracing::debug!(path = %path.display(), mode = %self.renderer.mode(), "Rendering");
        Ok(self.render_image(&image))
    }

    /// Decode and render every frame up front so playback only writes.
    pub fn render_animation(&self, path: &Path) -> Result<RenderedAnimation, AppError> {
        let animation = decoder::open_animation(path)?;
        let total = animation.frames.len();
        let frames = animation
            .frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                tracing::info!(frame = index + 1, total, "Rendered frame");
                RenderedFrame {
                    text: self.render_image(&frame.image),
                    delay: frame.delay,
                }
            })
            .collect();
        Ok(RenderedAnimation {
            frames,
            num_plays: animation.num_plays,
        })
    }
}
