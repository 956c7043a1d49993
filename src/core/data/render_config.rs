use crate::core::actions::sample_grid::block_size_for_density;
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_DENSITY: f64 = 0.5;
pub const ITERATION_STEP: u32 = 100;
pub const MIN_DENSITY: f64 = 1.0 / 512.0;

/// Scalar width used by the escape-time kernel.
///
/// `Single` matches what a 32-bit shader would compute. It runs out of
/// precision far sooner than `Double`: zoomed past a scale of roughly 1e-5
/// neighbouring pixels collapse onto the same plane coordinate and the image
/// turns blocky. Prefer `Double` unless comparing against a shader path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Precision {
    Single,
    #[default]
    Double,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderConfigError {
    InvalidDensity { density: f64 },
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { density } => {
                write!(f, "sampling density must be in (0, 1]: {}", density)
            }
        }
    }
}

impl Error for RenderConfigError {}

/// Quality knobs read once per frame or per export.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    max_iterations: u32,
    density: f64,
    precision: Precision,
}

impl RenderConfig {
    pub fn new(
        max_iterations: u32,
        density: f64,
        precision: Precision,
    ) -> Result<Self, RenderConfigError> {
        if !(density > 0.0 && density <= 1.0) {
            return Err(RenderConfigError::InvalidDensity { density });
        }

        Ok(Self {
            max_iterations,
            density,
            precision,
        })
    }

    /// One kernel evaluation per pixel.
    #[must_use]
    pub fn dense(max_iterations: u32, precision: Precision) -> Self {
        Self {
            max_iterations,
            density: 1.0,
            precision,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Edge length in pixels of the block coloured by one sample.
    #[must_use]
    pub fn block_size(&self) -> u32 {
        block_size_for_density(self.density)
    }

    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    pub fn increase_iterations(&mut self) {
        self.max_iterations = self.max_iterations.saturating_add(ITERATION_STEP);
    }

    pub fn decrease_iterations(&mut self) {
        self.max_iterations = self.max_iterations.saturating_sub(ITERATION_STEP);
    }

    pub fn increase_density(&mut self) {
        self.density = (self.density * 2.0).min(1.0);
    }

    pub fn decrease_density(&mut self) {
        self.density = (self.density / 2.0).max(MIN_DENSITY);
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            density: DEFAULT_DENSITY,
            precision: Precision::default(),
        }
    }
}
