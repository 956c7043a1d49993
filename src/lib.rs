pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::export::{
    ExportController, ExportError, ExportHandle, ExportRequest, ExportSettings, ExportStatus,
};
pub use crate::controllers::hud::HudText;
pub use crate::core::actions::render::mandelbrot::{export_dimensions, render_image, render_preview};
pub use crate::core::data::render_config::{Precision, RenderConfig};
pub use crate::core::data::viewport::Viewport;
#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiOptions, run_gui};
pub use crate::presenters::file::png::PngFilePresenter;
