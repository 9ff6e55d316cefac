//! Key press event and the camera's keydown observer.
//!
//! The input system triggers a [`KeyDownEvent`] for bound keys when they are
//! pressed. [`camera_keydown_observer`] forwards the key code to the
//! [`Camera`] resource, resolving the followed entity first so that a
//! despawned target does not count as following.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::resources::camera::Camera;

/// A key was pressed this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct KeyDownEvent {
    /// Raw key code (raylib's `KeyboardKey` value).
    pub key_code: i32,
}

/// Observer that lets the camera react to key presses.
///
/// Does nothing when no [`Camera`] resource exists.
pub fn camera_keydown_observer(
    trigger: On<KeyDownEvent>,
    camera: Option<ResMut<Camera>>,
    positions: Query<&MapPosition>,
) {
    let Some(mut camera) = camera else {
        return;
    };
    let following = camera
        .followed_one
        .is_some_and(|entity| positions.get(entity).is_ok());
    camera.on_keydown(trigger.event().key_code, following);
}
