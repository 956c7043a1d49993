use crate::core::data::point::Point;

/// An axis-aligned block of pixels. Width or height may be zero once clipped away.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    width: u32,
    height: u32,
}

impl PixelRect {
    #[must_use]
    pub fn new(top_left: Point, width: u32, height: u32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
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
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> u32 {
        self.top_left.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.top_left.y.saturating_add(self.height)
    }

    /// Clips the rect against a `bounds_width` x `bounds_height` target anchored at the origin.
    #[must_use]
    pub fn clipped_to(&self, bounds_width: u32, bounds_height: u32) -> Self {
        let width = self.right().min(bounds_width).saturating_sub(self.top_left.x);
        let height = self.bottom().min(bounds_height).saturating_sub(self.top_left.y);

        Self {
            top_left: self.top_left,
            width,
            height,
        }
    }
}
