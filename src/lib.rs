#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod fill;
pub mod grid;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod tool;

pub use app::PixelPaintApp;
pub use color::Color;
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use fill::{fill, FillReport};
pub use grid::PixelGrid;
pub use input::{CanvasMapping, InputEvent};
pub use renderer::Renderer;
pub use tool::{apply_tool, ToolState, ToolType};
