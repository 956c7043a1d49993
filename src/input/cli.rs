//! Command-line options shared by the headless exporter and the window.

use crate::controllers::export::request::{
    DEFAULT_OUTPUT_ITERATIONS, DEFAULT_OUTPUT_PATH, DEFAULT_OUTPUT_WIDTH, ExportRequest,
    ExportSettings,
};
use crate::core::data::complex::Complex;
use crate::core::data::render_config::{
    DEFAULT_DENSITY, DEFAULT_MAX_ITERATIONS, Precision, RenderConfig, RenderConfigError,
};
use crate::core::data::viewport::{DEFAULT_SCALE, Viewport, ViewportError};
use clap::Parser;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Mandelbrot explorer
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Real part of the camera center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_re: f64,

    /// Imaginary part of the camera center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_im: f64,

    /// Real half-extent of the view
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Display width, used for the aspect ratio
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Display height, used for the aspect ratio
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Iteration cap for the live preview
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub preview_iterations: u32,

    /// Fraction of pixels sampled per axis in the live preview, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Iteration cap for exported images
    #[arg(long, default_value_t = DEFAULT_OUTPUT_ITERATIONS)]
    pub iterations: u32,

    /// Width of exported images in pixels
    #[arg(long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub output_width: u32,

    /// Where exported images are written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Evaluate the kernel in f32 instead of f64
    #[arg(long)]
    pub single_precision: bool,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CliError {
    Viewport(ViewportError),
    RenderConfig(RenderConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid view: {}", err),
            Self::RenderConfig(err) => write!(f, "invalid render settings: {}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::RenderConfig(err) => Some(err),
        }
    }
}

impl From<ViewportError> for CliError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderConfigError> for CliError {
    fn from(err: RenderConfigError) -> Self {
        Self::RenderConfig(err)
    }
}

impl CliArgs {
    #[must_use]
    pub fn precision(&self) -> Precision {
        if self.single_precision {
            Precision::Single
        } else {
            Precision::Double
        }
    }

    pub fn viewport(&self) -> Result<Viewport, CliError> {
        let center = Complex::new(self.center_re, self.center_im);

        Ok(Viewport::with_scale(center, self.scale, self.width, self.height)?)
    }

    pub fn preview_config(&self) -> Result<RenderConfig, CliError> {
        Ok(RenderConfig::new(
            self.preview_iterations,
            self.density,
            self.precision(),
        )?)
    }

    #[must_use]
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            width: self.output_width,
            max_iterations: self.iterations,
            output_path: self.output.clone(),
        }
    }

    /// The export the headless binary runs: the configured view at the
    /// display's aspect ratio.
    pub fn export_request(&self) -> Result<ExportRequest, CliError> {
        Ok(ExportRequest::new(
            &self.viewport()?,
            &self.preview_config()?,
            self.width,
            self.height,
            &self.export_settings(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("mandel_explorer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_explorer_defaults() {
        let args = parse(&[]);

        assert_eq!(args.viewport().unwrap(), Viewport::default());
        assert_eq!(args.preview_config().unwrap(), RenderConfig::default());
        assert_eq!(args.export_settings(), ExportSettings::default());
    }

    #[test]
    fn negative_coordinates_parse() {
        let args = parse(&["--center-re", "-0.75", "--center-im", "-0.1", "--scale", "0.5"]);

        let viewport = args.viewport().unwrap();
        assert_eq!(viewport.center(), Complex::new(-0.75, -0.1));
        assert_eq!(viewport.scale(), 0.5);
    }

    #[test]
    fn export_request_uses_display_aspect() {
        let args = parse(&[
            "--width",
            "800",
            "--height",
            "600",
            "--output-width",
            "400",
            "--iterations",
            "50",
            "--output",
            "frame.png",
            "--single-precision",
        ]);

        let request = args.export_request().unwrap();

        assert_eq!((request.width, request.height), (400, 300));
        assert_eq!(request.config.max_iterations(), 50);
        assert_eq!(request.config.precision(), Precision::Single);
        assert_eq!(request.output_path, PathBuf::from("frame.png"));
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            parse(&["--scale", "0"]).viewport(),
            Err(CliError::Viewport(_))
        ));
        assert!(matches!(
            parse(&["--density", "2"]).preview_config(),
            Err(CliError::RenderConfig(_))
        ));
    }
}
