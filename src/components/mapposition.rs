//! World-space position component.
//!
//! Entities the camera can follow carry a [`MapPosition`]. The camera keeps an
//! [`Entity`](bevy_ecs::entity::Entity) handle and reads this component each
//! tick, so moving the entity is all it takes to move the camera.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an entity in world coordinates.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }
}
