//! Game configuration resource.
//!
//! Manages the demo's settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [camera]
//! draw_focus = true
//! start_x = 0
//! start_y = 0
//!
//! [demo]
//! wanderers = 3
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_DRAW_FOCUS: bool = true;
const DEFAULT_WANDERERS: u32 = 3;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels, also the initial camera viewport width.
    pub window_width: u32,
    /// Window height in pixels, also the initial camera viewport height.
    pub window_height: u32,
    /// Target frames per second. The camera moves per frame, so this sets
    /// its speed too.
    pub target_fps: u32,
    /// Draw the focus reticles.
    pub draw_focus: bool,
    /// Initial camera position.
    pub start_x: f32,
    pub start_y: f32,
    /// Number of wandering entities spawned by the demo.
    pub wanderers: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            draw_focus: DEFAULT_DRAW_FOCUS,
            start_x: 0.0,
            start_y: 0.0,
            wanderers: DEFAULT_WANDERERS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [camera] section
        if let Some(draw_focus) = config.getbool("camera", "draw_focus").ok().flatten() {
            self.draw_focus = draw_focus;
        }
        if let Some(x) = config.getfloat("camera", "start_x").ok().flatten() {
            self.start_x = x as f32;
        }
        if let Some(y) = config.getfloat("camera", "start_y").ok().flatten() {
            self.start_y = y as f32;
        }

        // [demo] section
        if let Some(count) = config.getuint("demo", "wanderers").ok().flatten() {
            self.wanderers = count as u32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, focus={}, start=({}, {}), wanderers={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.draw_focus,
            self.start_x,
            self.start_y,
            self.wanderers
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("camera", "draw_focus", Some(self.draw_focus.to_string()));
        config.set("camera", "start_x", Some(self.start_x.to_string()));
        config.set("camera", "start_y", Some(self.start_y.to_string()));

        config.set("demo", "wanderers", Some(self.wanderers.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
