//! Followcam library.
//!
//! A 2D follow camera for bevy_ecs + raylib games. This module exposes the
//! camera resource, its events and systems for use in integration tests and
//! as a reusable library.

pub mod components;
pub mod events;
pub mod focus;
pub mod resources;
pub mod systems;
