use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    /// Another export holds the slot; the request was dropped.
    AlreadyRunning,
    /// The worker thread could not be started.
    Spawn(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "an export is already running"),
            Self::Spawn(err) => write!(f, "could not start export worker: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyRunning => None,
            Self::Spawn(err) => Some(err),
        }
    }
}
