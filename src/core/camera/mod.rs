pub mod controls;

pub use controls::{CAMERA_SPEED, CameraControlsSnapshot, apply_controls, apply_wheel};
