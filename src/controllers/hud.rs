use std::fmt;

use crate::controllers::export::ExportStatus;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

/// Overlay text for the interactive view, one field per line.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub iterations: String,
    pub resolution: String,
    pub scale: String,
    pub camera: String,
    pub export: Option<String>,
}

impl HudText {
    /// The imaginary coordinate is shown negated so that moving up the
    /// screen reads as a positive change. Subtracting from zero keeps the
    /// origin from printing as `-0`.
    #[must_use]
    pub fn new(viewport: &Viewport, config: &RenderConfig, export: ExportStatus) -> Self {
        let center = viewport.center();

        Self {
            iterations: format!("Iterations: {}", config.max_iterations()),
            resolution: format!("Resolution: {}", config.density()),
            scale: format!("Scale: {:.6}", viewport.scale()),
            camera: format!("Camera: ({:.6}, {:.6})", center.real, 0.0 - center.imag),
            export: export
                .progress()
                .map(|progress| format!("Export: {}%", progress)),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [&self.iterations, &self.resolution, &self.scale, &self.camera]
            .into_iter()
            .chain(self.export.as_ref())
            .map(String::as_str)
    }
}

impl fmt::Display for HudText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
