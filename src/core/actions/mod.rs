pub mod progress;
pub mod render;
pub mod sample_grid;
