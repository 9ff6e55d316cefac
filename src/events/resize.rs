//! Window resize event and the camera's resize observer.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::camera::Camera;

/// The window changed size.
///
/// `size` is `None` when the platform reported a resize without dimensions;
/// the camera ignores those.
#[derive(Event, Debug, Clone, Copy)]
pub struct WindowResizedEvent {
    /// New (width, height) in pixels.
    pub size: Option<(f32, f32)>,
}

/// Observer that keeps the camera viewport in sync with the window.
pub fn camera_resize_observer(trigger: On<WindowResizedEvent>, camera: Option<ResMut<Camera>>) {
    if let Some(mut camera) = camera {
        camera.on_resize(trigger.event().size);
    }
}
