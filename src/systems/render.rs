use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::wanderer::Wanderer;
use crate::resources::camera::{Camera, Edge};
use crate::resources::debugmode::DebugMode;

/// Pixels per metre for the focus reticle.
pub const METRE: f32 = 32.0;
/// Radius of a wanderer dot, also used as its culling radius.
pub const WANDERER_RADIUS: f32 = 8.0;

/// Positions of the wanderers the camera can see.
pub fn visible_wanderers(world: &mut World) -> Vec<Vector2> {
    let mut q = world.query_filtered::<&MapPosition, With<Wanderer>>();
    let Some(camera) = world.get_resource::<Camera>() else {
        return Vec::new();
    };
    q.iter(world)
        .map(|p| p.pos)
        .filter(|pos| camera.is_in_viewport(*pos, WANDERER_RADIUS))
        .collect()
}

/// Current position of the followed entity, if it still has one.
pub fn followed_world_position(world: &World) -> Option<Vector2> {
    let entity = world.get_resource::<Camera>()?.followed_one?;
    world.get::<MapPosition>(entity).map(|p| p.pos)
}

/// We render inside raylib's drawing scopes and query the ECS World.
/// Wanderers outside the camera view are culled with
/// [`Camera::is_in_viewport`].
pub fn render_pass(
    world: &mut World,
    d2: &mut RaylibMode2D<RaylibDrawHandle>, // drawing in 2D camera space
) {
    let followed = followed_world_position(world);

    for pos in visible_wanderers(world) {
        d2.draw_circle_v(pos, WANDERER_RADIUS, Color::DARKGRAY);
    }

    if let Some(camera) = world.get_resource::<Camera>() {
        camera.draw(d2, METRE, followed);
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let Some(camera) = world.get_resource::<Camera>() else {
        return;
    };

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    let mode = if camera.free { "free" } else { "follow" };
    let cam_text = format!(
        "Camera pos: ({:.1}, {:.1}) Zoom: {:.2} Mode: {} (F to toggle)",
        camera.position.x, camera.position.y, camera.zoom, mode
    );
    d.draw_text(&cam_text, 10, 30, 10, Color::BLACK);

    let bounds = camera.bounds();
    let bounds_text = Edge::ALL
        .iter()
        .map(|edge| format!("{}: {:.1}", edge.key(), bounds.get(*edge)))
        .collect::<Vec<_>>()
        .join(" | ");
    d.draw_text(&bounds_text, 10, 50, 10, Color::BLACK);

    let mouse_pos = d.get_mouse_position();
    let mouse_world = camera.world_position_from_viewport_position(mouse_pos);
    let mouse_text = format!(
        "Mouse viewport: ({:.1}, {:.1}) World: ({:.1}, {:.1})",
        mouse_pos.x, mouse_pos.y, mouse_world.x, mouse_world.y
    );
    d.draw_text(&mouse_text, 10, 70, 10, Color::BLACK);
}
