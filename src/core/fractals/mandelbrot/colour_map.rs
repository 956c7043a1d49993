use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;

/// Greyscale level for an escape count: `sqrt(i / cap) * 255`, truncated.
///
/// Non-escaping points (`i >= cap`) and a zero cap are black.
#[inline]
#[must_use]
pub fn brightness(iterations: u32, max_iterations: u32) -> u8 {
    if max_iterations == 0 || iterations >= max_iterations {
        return 0;
    }

    let norm = f64::from(iterations) / f64::from(max_iterations);

    (norm.sqrt() * 255.0).clamp(0.0, 255.0) as u8
}

/// Square-root greyscale gradient; spreads out the many points that escape
/// within the first few iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreyscaleSqrtColourMap {
    max_iterations: u32,
}

impl GreyscaleSqrtColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<EscapeResult> for GreyscaleSqrtColourMap {
    fn map(&self, result: EscapeResult) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        Colour::grey(brightness(result.iterations, self.max_iterations))
    }
}
