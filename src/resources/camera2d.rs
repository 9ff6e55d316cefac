//! Raylib 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so the render pass can enter a
//! 2D mode that matches the [`Camera`](crate::resources::camera::Camera)
//! resource. It is rebuilt every frame by
//! [`camera_sync_system`](crate::systems::camera::camera_sync_system).

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the raylib camera parameters for rendering.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);

impl Default for Camera2DRes {
    fn default() -> Self {
        Camera2DRes(Camera2D {
            offset: Vector2 { x: 0.0, y: 0.0 },
            target: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}
