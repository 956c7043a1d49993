use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Block edge length for a sampling density: `round(1 / density)`, at least 1.
///
/// Densities that are not positive fall back to one sample per pixel.
#[must_use]
pub fn block_size_for_density(density: f64) -> u32 {
    if !(density > 0.0) {
        return 1;
    }

    ((1.0 / density).round() as u32).max(1)
}

/// Visits a `width` x `height` target on a `block_size` stride along both
/// axes. Each visited coordinate is the top-left sample of a block that is
/// clipped at the target edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    block_size: u32,
}

impl SampleGrid {
    #[must_use]
    pub fn new(width: u32, height: u32, block_size: u32) -> Self {
        Self {
            width,
            height,
            block_size: block_size.max(1),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn row_starts(&self) -> impl Iterator<Item = u32> + use<> {
        (0..self.height).step_by(self.block_size as usize)
    }

    pub fn column_starts(&self) -> impl Iterator<Item = u32> + use<> {
        (0..self.width).step_by(self.block_size as usize)
    }

    /// The clipped block whose sample sits at `origin`.
    #[must_use]
    pub fn block_at(&self, origin: Point) -> PixelRect {
        PixelRect::new(origin, self.block_size, self.block_size).clipped_to(self.width, self.height)
    }

    /// Every block in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = PixelRect> + use<> {
        let grid = *self;

        grid.row_starts().flat_map(move |y| {
            grid.column_starts()
                .map(move |x| grid.block_at(Point { x, y }))
        })
    }
}
