use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use std::convert::Infallible;
use std::error::Error;

/// A drawable target owned by the interactive thread.
///
/// Implementations are not required to be `Send`; preview renders never leave
/// the thread that owns the surface.
pub trait DisplaySurface {
    type Error: Error;

    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour);

    fn present(&mut self) -> Result<(), Self::Error>;
}

impl DisplaySurface for PixelBuffer {
    type Error = Infallible;

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        PixelBuffer::fill_rect(self, rect, colour);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
