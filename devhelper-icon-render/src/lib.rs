pub mod canvas;
pub mod error;
pub mod export;
pub mod renderer;

pub use canvas::{Canvas, Surface};
pub use error::RenderError;
pub use export::{write_ico, write_png, SOFTWARE_TAG};
pub use renderer::{draw_icon, render};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
