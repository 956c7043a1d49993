use log::debug;

use crate::core::actions::progress::ProgressSink;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::ports::display_surface::DisplaySurface;
use crate::core::actions::render::render_to_buffer::render_to_buffer;
use crate::core::actions::render::render_to_surface::render_to_surface;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::{Precision, RenderConfig};
use crate::core::data::viewport::{Viewport, aspect_ratio};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::GreyscaleSqrtColourMap;

/// Renders one interactive frame onto `surface` at its current size, then
/// presents it.
pub fn render_preview<S>(
    viewport: &Viewport,
    config: &RenderConfig,
    surface: &mut S,
) -> Result<(), S::Error>
where
    S: DisplaySurface + ?Sized,
{
    let (width, height) = surface.size();
    let max_iterations = config.max_iterations();
    let colour_map = GreyscaleSqrtColourMap::new(max_iterations);

    match config.precision() {
        Precision::Double => {
            let algorithm: MandelbrotAlgorithm<f64> =
                MandelbrotAlgorithm::new(viewport, width, height, max_iterations);
            render_to_surface(&algorithm, &colour_map, config.block_size(), surface);
        }
        Precision::Single => {
            let algorithm: MandelbrotAlgorithm<f32> =
                MandelbrotAlgorithm::new(viewport, width, height, max_iterations);
            render_to_surface(&algorithm, &colour_map, config.block_size(), surface);
        }
    }

    surface.present()
}

/// Renders into a freshly allocated `width` x `height` buffer.
///
/// Allocation failure is returned rather than aborting the process.
pub fn render_image<P>(
    viewport: &Viewport,
    config: &RenderConfig,
    width: u32,
    height: u32,
    progress: &P,
) -> Result<PixelBuffer, RenderError>
where
    P: ProgressSink + ?Sized,
{
    let mut buffer = PixelBuffer::new(width, height)?;
    let max_iterations = config.max_iterations();
    let colour_map = GreyscaleSqrtColourMap::new(max_iterations);

    debug!(
        "rendering {}x{} image: {} iterations, block size {}, {:?} precision",
        width,
        height,
        max_iterations,
        config.block_size(),
        config.precision()
    );

    match config.precision() {
        Precision::Double => {
            let algorithm: MandelbrotAlgorithm<f64> =
                MandelbrotAlgorithm::new(viewport, width, height, max_iterations);
            render_to_buffer(&algorithm, &colour_map, config.block_size(), &mut buffer, progress);
        }
        Precision::Single => {
            let algorithm: MandelbrotAlgorithm<f32> =
                MandelbrotAlgorithm::new(viewport, width, height, max_iterations);
            render_to_buffer(&algorithm, &colour_map, config.block_size(), &mut buffer, progress);
        }
    }

    Ok(buffer)
}

/// Output size for an export: the fixed `output_width` and a height that
/// keeps the display's aspect ratio. Both sides are at least 1.
#[must_use]
pub fn export_dimensions(output_width: u32, display_width: u32, display_height: u32) -> (u32, u32) {
    let width = output_width.max(1);
    let height = (f64::from(width) * aspect_ratio(display_width, display_height)).round() as u32;

    (width, height.max(1))
}
