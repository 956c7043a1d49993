use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::actions::progress::{ProgressSink, progress_percent};
use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::SampleGrid;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};
use crate::core::data::point::Point;

/// Fills `buffer` with one sample per `block_size` block, in parallel.
///
/// The buffer is split into bands of `block_size` pixel rows. Each band is a
/// disjoint slice handed to rayon's pool, so workers never share writes.
/// Bands finish in any order; `progress` receives the percentage of rows
/// completed so far after each band.
pub fn render_to_buffer<Alg, CMap, P>(
    algorithm: &Alg,
    colour_map: &CMap,
    block_size: u32,
    buffer: &mut PixelBuffer,
    progress: &P,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    P: ProgressSink + ?Sized,
{
    let width = buffer.width();
    let height = buffer.height();
    let stride = buffer.stride();
    let grid = SampleGrid::new(width, height, block_size);
    let block_size = grid.block_size();
    let band_len = stride * block_size as usize;
    let completed_rows = AtomicU32::new(0);

    buffer
        .buffer_mut()
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(band, band_data)| {
            let y = band as u32 * block_size;
            let band_rows = (band_data.len() / stride) as u32;

            for x in grid.column_starts() {
                let colour = colour_map
                    .map(algorithm.compute(Point { x, y }))
                    .to_rgb();
                let left = x as usize * CHANNELS;
                let right = (x + block_size).min(width) as usize * CHANNELS;

                for row in band_data.chunks_exact_mut(stride) {
                    for pixel in row[left..right].chunks_exact_mut(CHANNELS) {
                        pixel.copy_from_slice(&colour);
                    }
                }
            }

            let done = completed_rows.fetch_add(band_rows, Ordering::Relaxed) + band_rows;
            progress.report(progress_percent(done, height));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::progress::NoProgress;
    use crate::core::actions::render::render_to_surface::render_to_surface;
    use crate::core::data::colour::Colour;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_map::GreyscaleSqrtColourMap;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct StubPointAlgorithm {}

    impl FractalAlgorithm for StubPointAlgorithm {
        type Success = Point;

        fn compute(&self, pixel: Point) -> Point {
            pixel
        }
    }

    #[derive(Debug)]
    struct StubCoordinateColourMap {}

    impl ColourMap<Point> for StubCoordinateColourMap {
        fn map(&self, value: Point) -> Colour {
            Colour {
                r: value.x as u8,
                g: value.y as u8,
                b: 7,
            }
        }
    }

    #[test]
    fn test_every_pixel_takes_its_block_sample_colour() {
        let mut buffer = PixelBuffer::new(10, 7).unwrap();
        let block = 3;

        render_to_buffer(
            &StubPointAlgorithm {},
            &StubCoordinateColourMap {},
            block,
            &mut buffer,
            &NoProgress,
        );

        for y in 0..7 {
            for x in 0..10 {
                let expected = Colour {
                    r: (x / block * block) as u8,
                    g: (y / block * block) as u8,
                    b: 7,
                };
                assert_eq!(buffer.pixel(Point { x, y }).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_dense_render_samples_every_pixel() {
        let mut buffer = PixelBuffer::new(5, 4).unwrap();

        render_to_buffer(
            &StubPointAlgorithm {},
            &StubCoordinateColourMap {},
            1,
            &mut buffer,
            &NoProgress,
        );

        for y in 0..4 {
            for x in 0..5 {
                let pixel = buffer.pixel(Point { x, y }).unwrap();
                assert_eq!((pixel.r as u32, pixel.g as u32), (x, y));
            }
        }
    }

    #[test]
    fn test_parallel_render_matches_sequential_surface_render() {
        let viewport = Viewport::with_scale(
            crate::core::data::complex::Complex::new(-0.5, 0.0),
            1.5,
            64,
            48,
        )
        .unwrap();
        let algorithm: MandelbrotAlgorithm<f64> = MandelbrotAlgorithm::new(&viewport, 64, 48, 50);
        let colour_map = GreyscaleSqrtColourMap::new(50);

        for block in [1, 2, 5] {
            let mut sequential = PixelBuffer::new(64, 48).unwrap();
            render_to_surface(&algorithm, &colour_map, block, &mut sequential);

            let mut parallel = PixelBuffer::new(64, 48).unwrap();
            render_to_buffer(&algorithm, &colour_map, block, &mut parallel, &NoProgress);

            assert_eq!(parallel.buffer(), sequential.buffer(), "block {block}");
        }
    }

    #[test]
    fn test_reports_progress_per_band_up_to_completion() {
        let mut buffer = PixelBuffer::new(8, 10).unwrap();
        let reports = Mutex::new(Vec::new());
        let sink = |percent: u8| reports.lock().unwrap().push(percent);

        render_to_buffer(
            &StubPointAlgorithm {},
            &StubCoordinateColourMap {},
            3,
            &mut buffer,
            &sink,
        );

        let reports = reports.into_inner().unwrap();
        // ceil(10 / 3) bands
        assert_eq!(reports.len(), 4);
        assert!(reports.iter().all(|&p| p <= 100));
        assert_eq!(reports.iter().copied().max(), Some(100));
    }
}
