use std::path::PathBuf;

use crate::core::actions::render::mandelbrot::export_dimensions;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

pub const DEFAULT_OUTPUT_WIDTH: u32 = 4000;
pub const DEFAULT_OUTPUT_ITERATIONS: u32 = 4000;
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";

/// Fixed properties of every export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub width: u32,
    pub max_iterations: u32,
    pub output_path: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_OUTPUT_WIDTH,
            max_iterations: DEFAULT_OUTPUT_ITERATIONS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Immutable snapshot of everything one export needs.
///
/// Taken when the export is requested; later camera movement does not reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub viewport: Viewport,
    pub config: RenderConfig,
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
}

impl ExportRequest {
    /// Snapshots the live view. The export keeps the live precision but
    /// renders densely with the settings' iteration cap, at the settings'
    /// width and the display's aspect ratio.
    #[must_use]
    pub fn new(
        viewport: &Viewport,
        live_config: &RenderConfig,
        display_width: u32,
        display_height: u32,
        settings: &ExportSettings,
    ) -> Self {
        let (width, height) = export_dimensions(settings.width, display_width, display_height);

        Self {
            viewport: viewport.fit_to_display(width, height),
            config: RenderConfig::dense(settings.max_iterations, live_config.precision()),
            width,
            height,
            output_path: settings.output_path.clone(),
        }
    }
}
