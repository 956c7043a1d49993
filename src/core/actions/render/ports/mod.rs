pub mod colour_map;
pub mod display_surface;
pub mod fractal_algorithm;
