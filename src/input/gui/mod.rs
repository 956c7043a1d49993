//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer. The HUD is shown in the window title.

mod app;
mod camera_input;
pub mod errors;

pub use app::{GuiOptions, run_gui};
pub use errors::GuiError;
