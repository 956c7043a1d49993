use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use num_traits::Float;

/// Bailout threshold for `|re(z) + im(z)|`.
pub const MANDEL_INFINITY: f64 = 16.0;

/// Outcome of iterating one plane point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeResult {
    /// Zero-based iteration on which the orbit bailed out, or the cap.
    pub iterations: u32,
    pub escaped: bool,
}

/// Iterates `z <- z² + c` starting from `z = c`.
///
/// The bailout test is `|re(z) + im(z)| > 16`, applied after each update.
/// This is not the usual modulus test and must stay as is: switching to
/// `re² + im² > r²` changes every rendered image.
#[inline]
#[must_use]
pub fn escape_time<F: Float>(c: Complex<F>, max_iterations: u32) -> EscapeResult {
    let bailout = F::from(MANDEL_INFINITY).unwrap_or_else(F::infinity);
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        if z.component_sum().abs() > bailout {
            return EscapeResult {
                iterations: iteration,
                escaped: true,
            };
        }
    }

    EscapeResult {
        iterations: max_iterations,
        escaped: false,
    }
}

/// Escape-time kernel bound to one render target, evaluated at scalar width `F`.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm<F = f64> {
    width: u32,
    height: u32,
    center: Complex<F>,
    half_extent: Complex<F>,
    max_iterations: u32,
}

impl<F: Float> MandelbrotAlgorithm<F> {
    /// Zero-sized targets are mapped as if they were one pixel wide.
    #[must_use]
    pub fn new(viewport: &Viewport, width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            center: viewport.center().cast(),
            half_extent: viewport.half_extent().cast(),
            max_iterations,
        }
    }

    #[must_use]
    pub fn plane_point(&self, pixel: Point) -> Complex<F> {
        pixel_to_complex_coords(pixel, self.width, self.height, self.center, self.half_extent)
    }
}

impl<F: Float> FractalAlgorithm for MandelbrotAlgorithm<F> {
    type Success = EscapeResult;

    #[inline]
    fn compute(&self, pixel: Point) -> EscapeResult {
        escape_time(self.plane_point(pixel), self.max_iterations)
    }
}
