use crate::core::actions::render::ports::display_surface::DisplaySurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::presenters::pixels::frame::fill_rgba_rect;
use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

/// The window's framebuffer as a preview target.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl DisplaySurface for PixelsSurface {
    type Error = pixels::Error;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        fill_rgba_rect(self.pixels.frame_mut(), self.width, self.height, rect, colour);
    }

    fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

impl PixelsSurface {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Resizes both the surface and the framebuffer. A zero-sized window
    /// (minimised) keeps the previous size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;

        Ok(())
    }
}
