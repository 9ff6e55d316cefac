//! ECS resources made available to systems.
//!
//! Overview
//! - `camera` – the follow camera: state, bounds and coordinate transforms
//! - `camera2d` – raylib camera mirrored from `camera` for rendering
//! - `camerahooks` – observer registration on behalf of the camera
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the camera
//! - `windowsize` – current window dimensions in pixels
pub mod camera;
pub mod camera2d;
pub mod camerahooks;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod windowsize;
