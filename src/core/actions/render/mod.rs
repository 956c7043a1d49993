//! Render orchestration: drives the sample grid over either the live
//! display surface or an owned pixel buffer.

pub mod errors;
pub mod mandelbrot;
pub mod ports;
pub mod render_to_buffer;
pub mod render_to_surface;
