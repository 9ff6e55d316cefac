//! Camera systems.
//!
//! - [`camera_update_system`] advances the [`Camera`] one tick, resolving the
//!   followed entity to its current [`MapPosition`].
//! - [`camera_sync_system`] mirrors the camera into [`Camera2DRes`] so the
//!   render pass draws from the camera's point of view.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::{Camera2D, Vector2};

use crate::components::mapposition::MapPosition;
use crate::resources::camera::Camera;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::input::InputState;

/// Resolve the followed entity of `camera` to a world position.
///
/// Returns `None` when nothing is followed or the entity has no position
/// (for example, it was despawned).
pub fn followed_position(camera: &Camera, positions: &Query<&MapPosition>) -> Option<Vector2> {
    let entity = camera.followed_one?;
    match positions.get(entity) {
        Ok(position) => Some(position.pos),
        Err(_) => {
            debug!("Followed entity {:?} has no MapPosition", entity);
            None
        }
    }
}

/// Advance the camera with this frame's directional keys.
pub fn camera_update_system(
    mut camera: ResMut<Camera>,
    input: Res<InputState>,
    positions: Query<&MapPosition>,
) {
    let target = followed_position(&camera, &positions);
    camera.update(&input.camera_keys(), target);
}

/// Copy the camera into the raylib [`Camera2D`] used for rendering.
///
/// The camera position lands at the centre of the viewport.
pub fn camera_sync_system(camera: Res<Camera>, mut camera2d: ResMut<Camera2DRes>) {
    camera2d.0 = Camera2D {
        offset: Vector2 {
            x: camera.viewport.x * 0.5,
            y: camera.viewport.y * 0.5,
        },
        target: camera.position,
        rotation: 0.0,
        zoom: camera.zoom,
    };
}
