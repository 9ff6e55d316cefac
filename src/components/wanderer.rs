//! Wandering behaviour for demo entities.
//!
//! A [`Wanderer`] walks towards a waypoint at a fixed speed per tick. When it
//! arrives, [`wander_system`](crate::systems::wander::wander_system) picks a
//! new waypoint somewhere in the camera's view.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Debug, Clone, Copy)]
pub struct Wanderer {
    /// Where the entity is heading; `None` until the first waypoint is picked.
    pub waypoint: Option<Vector2>,
    /// Distance covered per tick.
    pub speed: f32,
}

impl Wanderer {
    pub fn new(speed: f32) -> Self {
        Wanderer {
            waypoint: None,
            speed,
        }
    }
}
