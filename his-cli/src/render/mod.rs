mod color_mode;
mod renderer;

pub use color_mode::ColorMode;
pub use renderer::{RenderOptions, Renderer};
