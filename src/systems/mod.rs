//! ECS systems.
//!
//! - [`camera`] – per-tick camera advance and sync to the raylib camera
//! - [`input`] – keyboard polling and window resize detection
//! - [`render`] – world, focus reticles and debug overlay
//! - [`wander`] – demo entities roaming around the view
pub mod camera;
pub mod input;
pub mod render;
pub mod wander;
