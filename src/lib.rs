#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod picture;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PixelApp;
pub use color::Color;
pub use error::EditorError;
pub use file_handler::FileHandler;
pub use geometry::Position;
pub use input::{GestureController, InputEvent};
pub use picture::{Picture, PictureRef, PixelEdit};
pub use renderer::{Renderer, SCALE};
pub use state::{EditorState, StateUpdate};
pub use tools::{GestureSession, Snapshot, Tool, ToolKind};
