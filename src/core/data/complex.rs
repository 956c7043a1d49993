use num_traits::Float;
use std::ops::Add;

// implement Complex instead of using num-complex, generic over the scalar width
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex<F = f64> {
    pub real: F,
    pub imag: F,
}

impl<F: Float> Complex<F> {
    #[must_use]
    pub fn new(real: F, imag: F) -> Self {
        Self { real, imag }
    }

    /// `re² − im²` and `2·re·im`, evaluated in that order.
    #[must_use]
    pub fn square(self) -> Self {
        let two = F::one() + F::one();

        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: two * self.real * self.imag,
        }
    }

    #[must_use]
    pub fn component_sum(&self) -> F {
        self.real + self.imag
    }

    /// Converts to another scalar width. Values that cannot be represented become NaN.
    #[must_use]
    pub fn cast<G: Float>(self) -> Complex<G> {
        Complex {
            real: G::from(self.real).unwrap_or_else(G::nan),
            imag: G::from(self.imag).unwrap_or_else(G::nan),
        }
    }
}

impl<F: Float> Add for Complex<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}
