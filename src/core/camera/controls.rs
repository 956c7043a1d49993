use crate::core::data::viewport::Viewport;

/// Pan and zoom rate, in scales per second.
pub const CAMERA_SPEED: f64 = 0.5;

/// Held camera inputs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraControlsSnapshot {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

impl CameraControlsSnapshot {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Moves `viewport` for `dt` seconds of held input.
///
/// Panning is proportional to the current scale, so the on-screen speed is
/// the same at every zoom level. Returns whether the viewport changed.
pub fn apply_controls(viewport: &mut Viewport, controls: &CameraControlsSnapshot, dt: f64) -> bool {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    if controls.is_idle() || dt == 0.0 {
        return false;
    }

    let before = *viewport;
    let step = CAMERA_SPEED * dt;

    if controls.zoom_in {
        viewport.zoom(1.0 - step);
    }
    if controls.zoom_out {
        viewport.zoom(1.0 + step);
    }

    let dx = axis(controls.right, controls.left) * step;
    let dy = axis(controls.down, controls.up) * step;
    viewport.pan(dx, dy);

    *viewport != before
}

/// Zooms by `CAMERA_SPEED` of the scale per wheel notch; positive scrolls in.
///
/// A scroll large enough to flip the scale's sign is ignored.
pub fn apply_wheel(viewport: &mut Viewport, notches: f64) -> bool {
    if !notches.is_finite() || notches == 0.0 {
        return false;
    }

    let before = *viewport;
    viewport.zoom(1.0 - notches * CAMERA_SPEED);

    *viewport != before
}

fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
