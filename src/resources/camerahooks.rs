//! Camera hook registration.
//!
//! The camera listens to two events, [`KeyDownEvent`] and
//! [`WindowResizedEvent`]. Their observers are spawned as entities and the ids
//! are kept in the [`CameraHooks`] resource so they can be despawned again when
//! the camera goes away.
//!
//! [`KeyDownEvent`]: crate::events::keydown::KeyDownEvent
//! [`WindowResizedEvent`]: crate::events::resize::WindowResizedEvent

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::keydown::camera_keydown_observer;
use crate::events::resize::camera_resize_observer;
use crate::resources::camera::Camera;

/// Observer entities registered on behalf of the camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraHooks {
    pub keydown: Entity,
    pub resize: Entity,
}

/// Spawn the camera's observers.
///
/// Registering twice returns the existing hooks instead of adding a second set
/// of observers.
pub fn register_camera_hooks(world: &mut World) -> CameraHooks {
    if let Some(hooks) = world.get_resource::<CameraHooks>() {
        return *hooks;
    }
    let keydown = world.spawn(Observer::new(camera_keydown_observer)).id();
    let resize = world.spawn(Observer::new(camera_resize_observer)).id();
    // observers must exist before anything triggers
    world.flush();

    let hooks = CameraHooks { keydown, resize };
    world.insert_resource(hooks);
    info!("Camera hooks registered");
    hooks
}

/// Despawn the camera's observers. Returns `false` if none were registered.
pub fn unregister_camera_hooks(world: &mut World) -> bool {
    let Some(hooks) = world.remove_resource::<CameraHooks>() else {
        return false;
    };
    world.despawn(hooks.keydown);
    world.despawn(hooks.resize);
    info!("Camera hooks unregistered");
    true
}

/// Insert `camera` into the world and register its hooks.
pub fn install_camera(world: &mut World, camera: Camera) -> CameraHooks {
    world.insert_resource(camera);
    register_camera_hooks(world)
}

/// Remove the camera and its hooks. Returns the camera if one was installed.
pub fn uninstall_camera(world: &mut World) -> Option<Camera> {
    unregister_camera_hooks(world);
    world.remove_resource::<Camera>()
}
