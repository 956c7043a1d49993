use crate::controllers::ports::image_encoder::{EncodeError, ImageEncoderPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageError, ImageFormat, RgbImage};
use std::path::Path;

pub struct PngFilePresenter {}

impl ImageEncoderPort for PngFilePresenter {
    fn encode_png(&self, path: &Path, buffer: PixelBuffer) -> Result<(), EncodeError> {
        let width = buffer.width();
        let height = buffer.height();
        let image = RgbImage::from_raw(width, height, buffer.into_data()).ok_or_else(|| {
            EncodeError::Encoding(format!("pixel data does not fill {}x{}", width, height).into())
        })?;

        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|err| match err {
                ImageError::IoError(io) => EncodeError::Io(io),
                other => EncodeError::Encoding(Box::new(other)),
            })
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
