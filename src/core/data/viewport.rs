use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_SCALE: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidCenter { real: f64, imag: f64 },
    InvalidHalfExtent { real: f64, imag: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCenter { real, imag } => {
                write!(f, "viewport center must be finite: ({}, {})", real, imag)
            }
            Self::InvalidHalfExtent { real, imag } => {
                write!(
                    f,
                    "viewport half-extent must be finite and positive: ({}, {})",
                    real, imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

fn valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// The region of the complex plane mapped onto a render target: a camera
/// center plus a half-extent per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex<f64>,
    half_extent: Complex<f64>,
}

impl Viewport {
    pub fn new(center: Complex<f64>, half_extent: Complex<f64>) -> Result<Self, ViewportError> {
        if !center.real.is_finite() || !center.imag.is_finite() {
            return Err(ViewportError::InvalidCenter {
                real: center.real,
                imag: center.imag,
            });
        }

        if !valid_extent(half_extent.real) || !valid_extent(half_extent.imag) {
            return Err(ViewportError::InvalidHalfExtent {
                real: half_extent.real,
                imag: half_extent.imag,
            });
        }

        Ok(Self {
            center,
            half_extent,
        })
    }

    /// Builds a viewport whose real half-extent is `scale` and whose
    /// imaginary half-extent follows the display aspect ratio.
    pub fn with_scale(
        center: Complex<f64>,
        scale: f64,
        display_width: u32,
        display_height: u32,
    ) -> Result<Self, ViewportError> {
        let aspect = aspect_ratio(display_width, display_height);

        Self::new(center, Complex::new(scale, scale * aspect))
    }

    #[must_use]
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    #[must_use]
    pub fn half_extent(&self) -> Complex<f64> {
        self.half_extent
    }

    /// The real half-extent; camera speed and zoom are expressed in it.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.half_extent.real
    }

    /// Re-derives the imaginary half-extent for a resized display.
    #[must_use]
    pub fn fit_to_display(&self, display_width: u32, display_height: u32) -> Self {
        let imag = self.half_extent.real * aspect_ratio(display_width, display_height);
        if !valid_extent(imag) {
            return *self;
        }

        Self {
            center: self.center,
            half_extent: Complex::new(self.half_extent.real, imag),
        }
    }

    /// Moves the camera by `(dx, dy)` multiples of the current scale.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let scale = self.scale();
        let center = Complex::new(self.center.real + dx * scale, self.center.imag + dy * scale);

        if center.real.is_finite() && center.imag.is_finite() {
            self.center = center;
        }
    }

    /// Multiplies both half-extents by `factor`. Factors that would collapse
    /// or blow up the view are ignored.
    pub fn zoom(&mut self, factor: f64) {
        let real = self.half_extent.real * factor;
        let imag = self.half_extent.imag * factor;

        if valid_extent(real) && valid_extent(imag) {
            self.half_extent = Complex::new(real, imag);
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Complex::new(0.0, 0.0),
            half_extent: Complex::new(DEFAULT_SCALE, DEFAULT_SCALE),
        }
    }
}

/// `height / width` with both sides clamped to at least one pixel.
#[must_use]
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    f64::from(height.max(1)) / f64::from(width.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive_extent() {
        let result = Viewport::new(Complex::new(0.0, 0.0), Complex::new(2.0, 0.0));

        assert!(matches!(
            result,
            Err(ViewportError::InvalidHalfExtent { .. })
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_center() {
        let result = Viewport::new(Complex::new(f64::NAN, 0.0), Complex::new(2.0, 2.0));

        assert!(matches!(result, Err(ViewportError::InvalidCenter { .. })));
    }

    #[test]
    fn test_with_scale_tracks_display_aspect() {
        let viewport = Viewport::with_scale(Complex::new(-0.5, 0.0), 2.0, 800, 600).unwrap();

        assert_eq!(viewport.half_extent(), Complex::new(2.0, 1.5));
        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_with_scale_zero_sized_display_is_square() {
        let viewport = Viewport::with_scale(Complex::new(0.0, 0.0), 2.0, 0, 0).unwrap();

        assert_eq!(viewport.half_extent(), Complex::new(2.0, 2.0));
    }

    #[test]
    fn test_fit_to_display_keeps_scale() {
        let viewport = Viewport::default().fit_to_display(1000, 500);

        assert_eq!(viewport.scale(), 2.0);
        assert_eq!(viewport.half_extent().imag, 1.0);
    }

    #[test]
    fn test_pan_moves_in_scale_units() {
        let mut viewport = Viewport::default();

        viewport.pan(0.5, -0.25);

        assert_eq!(viewport.center(), Complex::new(1.0, -0.5));
    }

    #[test]
    fn test_zoom_scales_both_axes() {
        let mut viewport = Viewport::with_scale(Complex::new(0.0, 0.0), 2.0, 800, 400).unwrap();

        viewport.zoom(0.5);

        assert_eq!(viewport.half_extent(), Complex::new(1.0, 0.5));
    }

    #[test]
    fn test_zoom_ignores_collapsing_factor() {
        let mut viewport = Viewport::default();

        viewport.zoom(0.0);
        viewport.zoom(-1.0);

        assert_eq!(viewport, Viewport::default());
    }
}
