#![warn(clippy::all, rust_2018_idioms)]

pub mod active_tool;
pub mod app;
pub mod engine;
pub mod error;
pub mod event;
pub mod input;
pub mod renderer;
pub mod stroke;
pub mod tool;

pub use active_tool::ActiveTool;
pub use app::SketchApp;
pub use engine::SketchEngine;
pub use event::{CanvasEvent, EventBus, EventHandler};
pub use renderer::{CANVAS_SIZE, CanvasTransform, Renderer};
pub use stroke::{Stroke, ToolStyle};
pub use tool::{Tool, ToolVariant};
