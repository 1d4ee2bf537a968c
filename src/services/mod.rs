pub mod animation;
pub mod decoder;
pub mod renderer;

pub use animation::{play, RenderedAnimation, RenderedFrame};
pub use decoder::{decode_animation, decode_image, open_animation, open_image, Animation, Frame};
pub use renderer::RenderService;
