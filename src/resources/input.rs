//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the camera cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use the arrow keys for
//! free-camera movement, **F** to toggle free mode and **F11** for debug.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Snapshot of the directional keys consumed by
/// [`Camera::update`](crate::resources::camera::Camera::update).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraKeys {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

/// Resource capturing the per-frame keyboard state relevant to the camera.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_right: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    /// Switches the camera between following and free roaming.
    pub toggle_free: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            toggle_free: BoolState::bound_to(KeyboardKey::KEY_F),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Directional keys held this frame.
    pub fn camera_keys(&self) -> CameraKeys {
        CameraKeys {
            up: self.direction_up.active,
            right: self.direction_right.active,
            down: self.direction_down.active,
            left: self.direction_left.active,
        }
    }
}
