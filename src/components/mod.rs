//! ECS components.
//!
//! - [`mapposition`] – world-space position, the thing the camera follows
//! - [`wanderer`] – demo behaviour moving entities between random waypoints
pub mod mapposition;
pub mod wanderer;
