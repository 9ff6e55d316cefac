//! Event types and observers used by the camera.
//!
//! Submodules:
//! - [`keydown`] – key presses forwarded to the camera (free-mode toggle)
//! - [`resize`] – window resizes forwarded to the camera viewport
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod keydown;
pub mod resize;
pub mod switchdebug;
