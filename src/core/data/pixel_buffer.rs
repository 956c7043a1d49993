use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Bytes per pixel: R, G, B.
pub const CHANNELS: usize = 3;

fn buffer_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    InvalidSize {
        width: u32,
        height: u32,
    },
    SizeOverflow {
        width: u32,
        height: u32,
    },
    AllocationFailed {
        bytes: usize,
    },
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
            Self::SizeOverflow { width, height } => {
                write!(f, "pixel buffer of {}x{} does not fit in memory", width, height)
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "could not allocate {} bytes for pixel buffer", bytes)
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB pixels, `(x + y * width) * 3` bytes per pixel offset.
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a black buffer. Allocation failure is reported instead of aborting.
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let total_bytes =
            buffer_size(width, height).ok_or(PixelBufferError::SizeOverflow { width, height })?;

        let mut buffer = PixelBufferData::new();
        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| PixelBufferError::AllocationFailed { bytes: total_bytes })?;
        buffer.resize(total_bytes, 0);

        Ok(Self {
            width,
            height,
            buffer,
        })
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
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes in one row of pixels.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    fn offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.x as usize + pixel.y as usize * self.width as usize) * CHANNELS)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.offset(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Fills `rect`, clipped to the buffer edges.
    pub fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        let rect = rect.clipped_to(self.width, self.height);
        if rect.is_empty() {
            return;
        }

        let stride = self.stride();
        let left = rect.top_left().x as usize * CHANNELS;
        let right = rect.right() as usize * CHANNELS;
        let rgb = colour.to_rgb();

        for row in self
            .buffer
            .chunks_exact_mut(stride)
            .skip(rect.top_left().y as usize)
            .take(rect.height() as usize)
        {
            for pixel in row[left..right].chunks_exact_mut(CHANNELS) {
                pixel.copy_from_slice(&rgb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocates_black_buffer() {
        let buffer = PixelBuffer::new(4, 3).unwrap();

        assert_eq!(buffer.buffer_size(), 4 * 3 * 3);
        assert!(buffer.buffer().iter().all(|&byte| byte == 0));
        assert_eq!(buffer.stride(), 12);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            PixelBuffer::new(0, 5).unwrap_err(),
            PixelBufferError::InvalidSize {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn test_new_reports_unrepresentable_size() {
        let result = PixelBuffer::new(u32::MAX, u32::MAX);

        assert!(matches!(
            result,
            Err(PixelBufferError::SizeOverflow { .. })
                | Err(PixelBufferError::AllocationFailed { .. })
        ));
    }

    #[test]
    fn test_fill_rect_writes_row_major_offset() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.fill_rect(PixelRect::new(Point { x: 1, y: 1 }, 1, 1), colour);

        // (1 + 1 * 3) * 3 = 12
        assert_eq!(&buffer.buffer()[12..15], &[1, 2, 3]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), colour);
    }

    #[test]
    fn test_pixel_outside_bounds_returns_err() {
        let buffer = PixelBuffer::new(3, 2).unwrap();

        assert!(matches!(
            buffer.pixel(Point { x: 3, y: 0 }),
            Err(PixelBufferError::PixelOutsideBounds { .. })
        ));
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut buffer = PixelBuffer::new(5, 4).unwrap();
        let white = Colour::grey(255);

        buffer.fill_rect(PixelRect::new(Point { x: 3, y: 2 }, 4, 4), white);

        for y in 0..4 {
            for x in 0..5 {
                let expected = if x >= 3 && y >= 2 { white } else { Colour::BLACK };
                assert_eq!(buffer.pixel(Point { x, y }).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_into_data_hands_over_bytes() {
        let mut buffer = PixelBuffer::new(1, 1).unwrap();
        buffer.fill_rect(PixelRect::new(Point { x: 0, y: 0 }, 1, 1), Colour { r: 7, g: 8, b: 9 });

        assert_eq!(buffer.into_data(), vec![7, 8, 9]);
    }
}
