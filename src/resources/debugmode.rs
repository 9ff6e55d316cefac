//! Debug toggle resource.
//!
//! The mere presence of this resource turns on the camera overlay: bounds,
//! zoom and mode are printed on screen. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
