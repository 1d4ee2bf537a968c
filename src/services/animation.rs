use crate::error::AppError;
use std::io::Write;
use std::time::Duration;

pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[1;1H";

/// One frame of text and how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAnimation {
    pub frames: Vec<RenderedFrame>,
    /// Loop count (0 = forever)
    pub num_plays: u32,
}

impl RenderedAnimation {
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }
}

/// Play frames in place: clear once, then home the cursor before each frame.
///
/// `sleep` is called after every frame with its delay. With `num_plays == 0`
/// this only returns on a write error.
pub fn play<W, S>(out: &mut W, animation: &RenderedAnimation, mut sleep: S) -> Result<(), AppError>
where
    W: Write,
    S: FnMut(Duration),
{
    if animation.frames.is_empty() {
        return Err(AppError::Animation("no frames to play".to_string()));
    }
    out.write_all(CLEAR_SCREEN.as_bytes())?;

    let mut played = 0u32;
    loop {
        for frame in &animation.frames {
            out.write_all(CURSOR_HOME.as_bytes())?;
            out.write_all(frame.text.as_bytes())?;
            out.flush()?;
            sleep(frame.delay);
        }
        played = played.saturating_add(1);
        if animation.num_plays != 0 && played >= animation.num_plays {
            return Ok(());
        }
        tracing::trace!(played, "Animation loop finished");
    }
}
