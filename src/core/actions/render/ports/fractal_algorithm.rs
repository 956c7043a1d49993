use crate::core::data::point::Point;

/// Evaluates the fractal at one pixel of the target it was built for.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
