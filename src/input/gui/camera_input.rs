use crate::core::camera::CameraControlsSnapshot;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// One-shot commands bound to key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiAction {
    IncreaseDensity,
    DecreaseDensity,
    IncreaseIterations,
    DecreaseIterations,
    Export,
}

/// Held keys and buttons, plus presses and wheel motion since the last frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CameraInputState {
    held: CameraControlsSnapshot,
    pending_actions: Vec<GuiAction>,
    wheel_notches: f64,
}

impl CameraInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.held.up = pressed,
            KeyCode::KeyA => self.held.left = pressed,
            KeyCode::KeyS => self.held.down = pressed,
            KeyCode::KeyD => self.held.right = pressed,
            _ if pressed && !repeat => {
                if let Some(action) = action_for_key(key_code) {
                    self.pending_actions.push(action);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.held.zoom_in = pressed,
            MouseButton::Right => self.held.zoom_out = pressed,
            _ => {}
        }
    }

    /// Positive values scroll away from the user, which zooms in.
    pub fn handle_wheel(&mut self, notches: f64) {
        if notches.is_finite() {
            self.wheel_notches += notches;
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CameraControlsSnapshot {
        self.held
    }

    pub fn take_actions(&mut self) -> Vec<GuiAction> {
        std::mem::take(&mut self.pending_actions)
    }

    pub fn take_wheel(&mut self) -> f64 {
        std::mem::take(&mut self.wheel_notches)
    }

    /// Drops held state, e.g. when the window loses focus and release
    /// events would be missed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn action_for_key(key_code: KeyCode) -> Option<GuiAction> {
    match key_code {
        KeyCode::ShiftRight => Some(GuiAction::IncreaseDensity),
        KeyCode::ControlRight => Some(GuiAction::DecreaseDensity),
        KeyCode::ShiftLeft => Some(GuiAction::IncreaseIterations),
        KeyCode::ControlLeft => Some(GuiAction::DecreaseIterations),
        KeyCode::KeyR => Some(GuiAction::Export),
        _ => None,
    }
}
