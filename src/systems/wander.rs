//! Wander system.
//!
//! Moves [`Wanderer`] entities towards their waypoint. New waypoints are drawn
//! from the camera's viewport with
//! [`Camera::random_viewport_position_with`] and mapped to world space, so
//! wanderers keep roaming around whatever the camera is looking at.
use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::wanderer::Wanderer;
use crate::resources::camera::Camera;

/// Step `from` towards `to` by at most `step`. Returns the new position and
/// whether `to` was reached.
pub fn step_towards(from: Vector2, to: Vector2, step: f32) -> (Vector2, bool) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance <= step {
        return (to, true);
    }
    let ratio = step / distance;
    (
        Vector2 {
            x: from.x + dx * ratio,
            y: from.y + dy * ratio,
        },
        false,
    )
}

pub fn wander_system(
    mut query: Query<(&mut MapPosition, &mut Wanderer)>,
    camera: Res<Camera>,
    mut rng: Local<Rng>,
) {
    for (mut position, mut wanderer) in query.iter_mut() {
        let waypoint = match wanderer.waypoint {
            Some(waypoint) => waypoint,
            None => {
                let local = camera.random_viewport_position_with(&mut rng);
                let waypoint = camera.world_position_from_viewport_position(local);
                wanderer.waypoint = Some(waypoint);
                waypoint
            }
        };

        let (next, arrived) = step_towards(position.pos, waypoint, wanderer.speed);
        position.pos = next;
        if arrived {
            wanderer.waypoint = None;
        }
    }
}
