pub mod actions;
pub mod camera;
pub mod data;
pub mod fractals;
pub mod util;
