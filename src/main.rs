//! Followcam demo entry point.
//!
//! Opens a raylib window with a handful of wandering entities and a camera
//! that follows the first of them.
//!
//! # Controls
//!
//! - **F** – toggle free camera mode
//! - **Arrow keys** – move the camera while in free mode
//! - **F11** – toggle the debug overlay
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), open the window
//! 2. Insert resources, install the camera and its hooks
//! 3. Each frame: poll input, detect resizes, move wanderers, advance and sync
//!    the camera, then render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

use followcam::components::mapposition::MapPosition;
use followcam::components::wanderer::Wanderer;
use followcam::events::switchdebug::switch_debug_observer;
use followcam::resources::camera::Camera;
use followcam::resources::camera2d::Camera2DRes;
use followcam::resources::camerahooks::install_camera;
use followcam::resources::gameconfig::GameConfig;
use followcam::resources::input::InputState;
use followcam::resources::windowsize::WindowSize;
use followcam::systems::camera::{camera_sync_system, camera_update_system};
use followcam::systems::input::{detect_window_resize, update_input_state};
use followcam::systems::render::{render_debug_ui, render_pass};
use followcam::systems::wander::wander_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

/// Speed of the demo wanderers, in pixels per tick.
const WANDERER_SPEED: f32 = 2.5;

/// Followcam demo
#[derive(Parser)]
#[command(version, about = "2D follow camera demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Do not draw the focus reticles, whatever the config says.
    #[arg(long)]
    no_focus: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if cli.no_focus {
        config.draw_focus = false;
    }

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Followcam")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(Camera2DRes::default());

    let mut first = None;
    for i in 0..config.wanderers {
        let offset = i as f32 * 40.0;
        let entity = world
            .spawn((
                MapPosition::new(config.start_x + offset, config.start_y),
                Wanderer::new(WANDERER_SPEED),
            ))
            .id();
        first.get_or_insert(entity);
    }

    let (viewport_w, viewport_h) = world.resource::<WindowSize>().as_size();
    let camera = Camera::new(
        viewport_w,
        viewport_h,
        config.start_x,
        config.start_y,
        config.draw_focus,
        first,
    );
    install_camera(&mut world, camera);
    world.insert_resource(config);
    world.insert_non_send_resource(rl);

    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(detect_window_resize);
    update.add_systems(wander_system);
    update.add_systems(
        camera_update_system
            .after(update_input_state)
            .after(detect_window_resize)
            .after(wander_system),
    );
    update.add_systems(camera_sync_system.after(camera_update_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Followcam running: F toggles free mode, arrows move, F11 shows debug");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);

        let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
            break;
        };
        let cam = world.resource::<Camera2DRes>().0;
        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::RAYWHITE);
            {
                let mut d2 = d.begin_mode2D(cam);
                render_pass(&mut world, &mut d2);
            }
            render_debug_ui(&mut world, &mut d);
        }
        world.insert_non_send_resource(rl);

        world.clear_trackers();
    }
}
