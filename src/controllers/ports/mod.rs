//! Port definitions for the controllers.

pub mod image_encoder;
