use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum EncodeError {
    Io(std::io::Error),
    Encoding(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Encoding(err) => write!(f, "encoding error: {}", err),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err.as_ref()),
        }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Writes a finished export to disk as an RGB PNG.
///
/// The buffer is moved in; it is released when the call returns, whatever
/// the outcome.
pub trait ImageEncoderPort: Send + Sync {
    fn encode_png(&self, path: &Path, buffer: PixelBuffer) -> Result<(), EncodeError>;
}
