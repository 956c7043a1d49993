//! Background export of high-resolution stills.
//!
//! One export may run at a time. The interactive loop starts it with an
//! [`ExportRequest`] snapshot and afterwards only polls [`ExportStatus`]; the
//! finished buffer is moved to the image encoder port on the worker thread.

mod controller;
pub mod errors;
pub mod request;
pub mod status;

pub use controller::{ExportController, ExportHandle};
pub use errors::ExportError;
pub use request::{ExportRequest, ExportSettings};
pub use status::ExportStatus;
