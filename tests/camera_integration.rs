//! Camera integration tests: hooks, follow resolution and per-tick systems
//! running inside a bevy_ecs World.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use followcam::components::mapposition::MapPosition;
use followcam::components::wanderer::Wanderer;
use followcam::events::keydown::KeyDownEvent;
use followcam::events::resize::WindowResizedEvent;
use followcam::resources::camera::{Camera, TOGGLE_FREE_KEY};
use followcam::resources::camera2d::Camera2DRes;
use followcam::resources::camerahooks::{
    CameraHooks, install_camera, register_camera_hooks, uninstall_camera,
    unregister_camera_hooks,
};
use followcam::resources::input::InputState;
use followcam::systems::camera::{camera_sync_system, camera_update_system};
use followcam::systems::render::{followed_world_position, visible_wanderers};
use followcam::systems::wander::wander_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(camera: Camera) -> World {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    world.insert_resource(Camera2DRes::default());
    install_camera(&mut world, camera);
    world
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_update_system);
    schedule.run(world);
}

fn camera(world: &World) -> &Camera {
    world.resource::<Camera>()
}

#[test]
fn keydown_toggles_free_once_per_event() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));

    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    assert!(camera(&world).free);

    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    assert!(!camera(&world).free);
}

#[test]
fn keydown_other_codes_leave_free_unchanged() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    for key_code in [32, 65, 69, 71, 300] {
        world.trigger(KeyDownEvent { key_code });
    }
    assert!(!camera(&world).free);
}

#[test]
fn keydown_nudges_only_when_followed_entity_exists() {
    let mut world = World::new();
    let target = world.spawn(MapPosition::new(0.0, 0.0)).id();
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 100.0, 100.0, false, Some(target)),
    );

    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    let cam = camera(&world);
    assert!(cam.free);
    assert!(approx_eq(cam.position.x, 90.0));
    assert!(approx_eq(cam.position.y, 90.0));
}

#[test]
fn keydown_despawned_target_counts_as_not_following() {
    let mut world = World::new();
    let target = world.spawn(MapPosition::new(0.0, 0.0)).id();
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 100.0, 100.0, false, Some(target)),
    );
    world.despawn(target);

    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    let cam = camera(&world);
    assert!(cam.free);
    assert!(approx_eq(cam.position.x, 100.0));
    assert!(approx_eq(cam.position.y, 100.0));
}

#[test]
fn resize_without_payload_keeps_viewport() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    world.trigger(WindowResizedEvent { size: None });
    let cam = camera(&world);
    assert!(approx_eq(cam.viewport.x, 800.0));
    assert!(approx_eq(cam.viewport.y, 600.0));
}

#[test]
fn resize_with_payload_sets_viewport_exactly() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    world.trigger(WindowResizedEvent {
        size: Some((1920.0, 1080.0)),
    });
    let cam = camera(&world);
    assert_eq!(cam.viewport.x, 1920.0);
    assert_eq!(cam.viewport.y, 1080.0);
}

#[test]
fn events_without_camera_are_ignored() {
    let mut world = World::new();
    register_camera_hooks(&mut world);
    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    world.trigger(WindowResizedEvent {
        size: Some((10.0, 10.0)),
    });
    assert!(!world.contains_resource::<Camera>());
}

#[test]
fn register_is_idempotent() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    let first = *world.resource::<CameraHooks>();
    let second = register_camera_hooks(&mut world);
    assert_eq!(first, second);

    // a single toggle must not be applied twice
    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    assert!(camera(&world).free);
}

#[test]
fn unregister_stops_event_delivery() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    assert!(unregister_camera_hooks(&mut world));
    assert!(!unregister_camera_hooks(&mut world));

    world.trigger(KeyDownEvent {
        key_code: TOGGLE_FREE_KEY,
    });
    world.trigger(WindowResizedEvent {
        size: Some((10.0, 10.0)),
    });
    let cam = camera(&world);
    assert!(!cam.free);
    assert!(approx_eq(cam.viewport.x, 800.0));
}

#[test]
fn uninstall_returns_camera_and_removes_hooks() {
    let mut world = make_world(Camera::new(800.0, 600.0, 3.0, 4.0, false, None));
    let cam = uninstall_camera(&mut world).unwrap();
    assert!(approx_eq(cam.position.x, 3.0));
    assert!(!world.contains_resource::<Camera>());
    assert!(!world.contains_resource::<CameraHooks>());
}

#[test]
fn update_system_smooths_towards_followed_entity() {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    let target = world.spawn(MapPosition::new(100.0, 0.0)).id();
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 0.0, 0.0, false, Some(target)),
    );

    tick_camera(&mut world);
    assert!(approx_eq(camera(&world).position.x, 5.0));
    assert!(approx_eq(camera(&world).position.y, 0.0));

    tick_camera(&mut world);
    assert!(approx_eq(camera(&world).position.x, 9.75));
}

#[test]
fn update_system_tracks_moving_target() {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    let target = world.spawn(MapPosition::new(100.0, 0.0)).id();
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 0.0, 0.0, false, Some(target)),
    );

    tick_camera(&mut world);
    world.get_mut::<MapPosition>(target).unwrap().pos = Vector2 { x: 5.0, y: 200.0 };
    tick_camera(&mut world);

    let cam = camera(&world);
    assert!(approx_eq(cam.position.x, 5.0));
    assert!(approx_eq(cam.position.y, 10.0));
}

#[test]
fn update_system_with_despawned_target_stays_put() {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    let target = world.spawn(MapPosition::new(100.0, 100.0)).id();
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 0.0, 0.0, false, Some(target)),
    );
    world.despawn(target);

    tick_camera(&mut world);
    let cam = camera(&world);
    assert!(approx_eq(cam.position.x, 0.0));
    assert!(approx_eq(cam.position.y, 0.0));
}

#[test]
fn update_system_free_mode_reads_input_state() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    world.resource_mut::<Camera>().free = true;
    {
        let mut input = world.resource_mut::<InputState>();
        input.direction_up.active = true;
        input.direction_right.active = true;
    }

    tick_camera(&mut world);
    let cam = camera(&world);
    assert!(approx_eq(cam.position.x, 10.0));
    assert!(approx_eq(cam.position.y, -10.0));
}

#[test]
fn follow_switches_target_between_ticks() {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    let a = world.spawn(MapPosition::new(100.0, 0.0)).id();
    let b = world.spawn(MapPosition::new(0.0, 100.0)).id();
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 0.0, 0.0, false, Some(a)),
    );

    world.resource_mut::<Camera>().follow(Some(b));
    tick_camera(&mut world);
    let cam = camera(&world);
    assert!(approx_eq(cam.position.x, 0.0));
    assert!(approx_eq(cam.position.y, 5.0));

    world.resource_mut::<Camera>().follow(None);
    tick_camera(&mut world);
    assert!(approx_eq(camera(&world).position.y, 5.0));
}

#[test]
fn sync_system_centres_raylib_camera_on_position() {
    let mut world = make_world(Camera::new(800.0, 600.0, 12.0, -3.0, false, None));
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_sync_system);
    schedule.run(&mut world);

    let cam2d = world.resource::<Camera2DRes>().0;
    assert!(approx_eq(cam2d.offset.x, 400.0));
    assert!(approx_eq(cam2d.offset.y, 300.0));
    assert!(approx_eq(cam2d.target.x, 12.0));
    assert!(approx_eq(cam2d.target.y, -3.0));
    assert!(approx_eq(cam2d.zoom, 0.8));
}

#[test]
fn wanderers_move_and_pick_waypoints() {
    let mut world = make_world(Camera::with_viewport(800.0, 600.0));
    let entity = world
        .spawn((MapPosition::new(0.0, 0.0), Wanderer::new(2.0)))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(wander_system);
    schedule.run(&mut world);

    // one tick covers at most `speed`
    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    let moved = (pos.x * pos.x + pos.y * pos.y).sqrt();
    assert!(moved <= 2.0 + EPSILON);
    assert!(moved > 0.0 || world.get::<Wanderer>(entity).unwrap().waypoint.is_none());
}

#[test]
fn render_helpers_cull_and_resolve_followed() {
    let mut world = World::new();
    let near = world
        .spawn((MapPosition::new(10.0, 10.0), Wanderer::new(1.0)))
        .id();
    world.spawn((MapPosition::new(5000.0, 5000.0), Wanderer::new(1.0)));
    install_camera(
        &mut world,
        Camera::new(800.0, 600.0, 0.0, 0.0, true, Some(near)),
    );

    let visible = visible_wanderers(&mut world);
    assert_eq!(visible.len(), 1);
    assert!(approx_eq(visible[0].x, 10.0));

    let followed = followed_world_position(&world).unwrap();
    assert!(approx_eq(followed.x, 10.0));

    let marks = camera(&world).focus_marks(Some(followed));
    assert_eq!(marks.len(), 2);
    assert!(marks[1].is_followed);
}
