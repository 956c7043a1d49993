use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use num_traits::Float;

/// Rescales `pixel` from `[0, pixel_extent)` onto
/// `[center - half_extent, center + half_extent]`.
///
/// `pixel_extent` must be at least 1; callers clamp display sizes before
/// mapping.
#[inline]
#[must_use]
pub fn plane_coord<F: Float>(pixel: u32, pixel_extent: u32, center: F, half_extent: F) -> F {
    let start = center - half_extent;
    let end = center + half_extent;
    let pixel = F::from(pixel).unwrap_or_else(F::nan);
    let pixel_extent = F::from(pixel_extent).unwrap_or_else(F::nan);

    pixel / pixel_extent * (end - start) + start
}

/// Maps a pixel of a `width` x `height` target onto the plane, one axis at a time.
#[inline]
#[must_use]
pub fn pixel_to_complex_coords<F: Float>(
    pixel: Point,
    width: u32,
    height: u32,
    center: Complex<F>,
    half_extent: Complex<F>,
) -> Complex<F> {
    Complex {
        real: plane_coord(pixel.x, width, center.real, half_extent.real),
        imag: plane_coord(pixel.y, height, center.imag, half_extent.imag),
    }
}
