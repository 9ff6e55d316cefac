//! Follow camera resource.
//!
//! [`Camera`] is a viewport window into the world. It either follows an entity
//! (smoothly, a fixed fraction of the remaining distance per tick) or roams
//! freely under keyboard control. It also answers geometric questions about
//! what it currently sees:
//!
//! - [`Camera::get_bounds`] – the four edges of the camera rectangle
//! - [`Camera::viewport_position`] – whether a point (plus radius) is visible
//! - [`Camera::world_position_from_viewport_position`] – viewport → world
//! - [`Camera::random_viewport_position`] – a random viewport-local point
//!
//! # Sign conventions
//!
//! The bounds rectangle and the containment test use mirrored conventions.
//! [`Camera::get_bounds`] reports `top` as `y + half height` and `left` as
//! `x + half width`, while [`Camera::viewport_position`] treats `top` as
//! `y - half height` and `left` as `x - half width`. Callers rely on both, so
//! they are kept as they are.
//!
//! # Hooks
//!
//! Key presses and window resizes reach the camera through observers, see
//! [`crate::resources::camerahooks`]. The followed entity is stored as an
//! [`Entity`] handle and resolved by the caller, so a despawned target behaves
//! like no target at all.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::debug;
use raylib::prelude::Vector2;

use crate::focus::Focus;
use crate::resources::input::CameraKeys;

/// Key code that toggles free mode (the **F** key).
pub const TOGGLE_FREE_KEY: i32 = 70;
/// Distance moved per tick and per held direction in free mode.
pub const FREE_STEP: f32 = 10.0;
/// Offset applied on both axes when entering free mode while following.
pub const FREE_TOGGLE_NUDGE: f32 = 10.0;
/// Fraction of the remaining distance to the target covered each tick.
pub const FOLLOW_LERP: f32 = 0.05;
pub const MIN_ZOOM: f32 = 0.8;
pub const MAX_ZOOM: f32 = 1.1;
/// Query type for [`Camera::viewport_position`] that only wants a yes/no answer.
pub const TRUE_OR_FALSE_ONLY: &str = "trueOrFalseOnly";

/// One edge of a camera rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Edges in evaluation order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Parse a bound key (`"top"`, `"right"`, `"bottom"`, `"left"`).
    pub fn from_key(key: &str) -> Option<Edge> {
        match key {
            "top" => Some(Edge::Top),
            "right" => Some(Edge::Right),
            "bottom" => Some(Edge::Bottom),
            "left" => Some(Edge::Left),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

/// The four edges of a camera rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Bounds {
    pub fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// Result of [`Camera::get_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsQuery {
    /// A single edge was requested by key.
    Edge(f32),
    /// No key, or an unrecognized one.
    All(Bounds),
}

/// Per-edge flags: which sides a point lies beyond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeFlags {
    pub fn get(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    fn set(&mut self, edge: Edge) {
        match edge {
            Edge::Top => self.top = true,
            Edge::Right => self.right = true,
            Edge::Bottom => self.bottom = true,
            Edge::Left => self.left = true,
        }
    }
}

/// Full answer of a containment test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportReport {
    pub is_in_viewport: bool,
    pub out_of_viewport_map: EdgeFlags,
}

/// Result of [`Camera::viewport_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportQuery {
    /// Answer to a [`TRUE_OR_FALSE_ONLY`] query.
    Inside(bool),
    Report(ViewportReport),
}

/// A focus reticle to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusMark {
    pub position: Vector2,
    pub is_free: bool,
    pub is_followed: bool,
}

/// ECS resource holding the active camera.
#[derive(Resource, Debug, Clone)]
pub struct Camera {
    /// Visible screen area (width, height) in pixels.
    pub viewport: Vector2,
    /// World-space centre of the camera.
    pub position: Vector2,
    /// Entity tracked while not in free mode. Only a handle: the camera never
    /// keeps the entity alive.
    pub followed_one: Option<Entity>,
    /// Reticle feedback, created once at construction.
    pub focus: Option<Focus>,
    /// Manual control when `true`, auto-follow when `false`.
    pub free: bool,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom: f32,
}

impl Camera {
    /// Create a camera with a `width` x `height` viewport centred on
    /// (`x_position`, `y_position`).
    pub fn new(
        width: f32,
        height: f32,
        x_position: f32,
        y_position: f32,
        draw_focus: bool,
        whom_to_follow: Option<Entity>,
    ) -> Self {
        Camera {
            viewport: Vector2 {
                x: width,
                y: height,
            },
            position: Vector2 {
                x: x_position,
                y: y_position,
            },
            followed_one: whom_to_follow,
            focus: if draw_focus { Some(Focus::new()) } else { None },
            free: false,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom: MIN_ZOOM,
        }
    }

    /// Camera at the world origin with no focus and nothing to follow.
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self::new(width, height, 0.0, 0.0, false, None)
    }

    /// Replace the followed entity. `None` stops following.
    pub fn follow(&mut self, whom_to_follow: Option<Entity>) {
        self.followed_one = whom_to_follow;
    }

    fn half_extent(&self) -> Vector2 {
        Vector2 {
            x: self.viewport.x / 2.0 / self.zoom,
            y: self.viewport.y / 2.0 / self.zoom,
        }
    }

    /// The four edges of the camera rectangle.
    pub fn bounds(&self) -> Bounds {
        let half = self.half_extent();
        Bounds {
            top: self.position.y + half.y,
            right: self.position.x - half.x,
            bottom: self.position.y - half.y,
            left: self.position.x + half.x,
        }
    }

    pub fn bound(&self, edge: Edge) -> f32 {
        self.bounds().get(edge)
    }

    /// Bounds lookup by key.
    ///
    /// A recognized key returns that edge alone. `None` or any other string
    /// returns all four edges.
    pub fn get_bounds(&self, specific_bound: Option<&str>) -> BoundsQuery {
        match specific_bound.and_then(Edge::from_key) {
            Some(edge) => BoundsQuery::Edge(self.bound(edge)),
            None => BoundsQuery::All(self.bounds()),
        }
    }

    /// Random point inside the viewport, in viewport-local pixels.
    pub fn random_viewport_position(&self) -> Vector2 {
        self.random_viewport_position_with(&mut Rng::new())
    }

    /// Same as [`Camera::random_viewport_position`] with a caller-owned
    /// generator.
    pub fn random_viewport_position_with(&self, rng: &mut Rng) -> Vector2 {
        Vector2 {
            x: rng.f32() * self.viewport.x,
            y: rng.f32() * self.viewport.y,
        }
    }

    /// Handle a key press.
    ///
    /// [`TOGGLE_FREE_KEY`] flips free mode. Entering free mode while
    /// `following` nudges the camera off the target so the two reticles do not
    /// overlap. Other key codes are ignored.
    pub fn on_keydown(&mut self, key_code: i32, following: bool) {
        if key_code != TOGGLE_FREE_KEY {
            return;
        }
        self.free = !self.free;
        if self.free && following {
            self.position.x -= FREE_TOGGLE_NUDGE;
            self.position.y -= FREE_TOGGLE_NUDGE;
        }
        debug!("Camera free mode: {}", self.free);
    }

    /// Handle a window resize. `None` carries no size and changes nothing.
    pub fn on_resize(&mut self, size: Option<(f32, f32)>) {
        if let Some((width, height)) = size {
            self.viewport.x = width;
            self.viewport.y = height;
            debug!("Camera viewport resized to {}x{}", width, height);
        }
    }

    /// Advance the camera one tick.
    ///
    /// `followed_position` is the resolved position of `followed_one`, or
    /// `None` when there is nothing to follow.
    pub fn update(&mut self, keys: &CameraKeys, followed_position: Option<Vector2>) {
        if self.free {
            if keys.up {
                self.position.y -= FREE_STEP;
            }
            if keys.right {
                self.position.x += FREE_STEP;
            }
            if keys.down {
                self.position.y += FREE_STEP;
            }
            if keys.left {
                self.position.x -= FREE_STEP;
            }
        } else if let Some(target) = followed_position {
            self.position.x += (target.x - self.position.x) * FOLLOW_LERP;
            self.position.y += (target.y - self.position.y) * FOLLOW_LERP;
        }

        if let Some(focus) = self.focus.as_mut() {
            focus.update();
        }
    }

    /// Edges of the containment rectangle grown by `radius`.
    fn containment_limits(&self, radius: f32) -> Bounds {
        let half = self.half_extent();
        Bounds {
            top: self.position.y - half.y - radius,
            right: self.position.x + half.x + radius,
            bottom: self.position.y + half.y + radius,
            left: self.position.x - half.x - radius,
        }
    }

    fn beyond(edge: Edge, position: Vector2, limits: &Bounds) -> bool {
        match edge {
            Edge::Top => position.y < limits.top,
            Edge::Right => position.x > limits.right,
            Edge::Bottom => position.y > limits.bottom,
            Edge::Left => position.x < limits.left,
        }
    }

    /// Whether `position`, grown by `radius`, is visible. Stops at the first
    /// violated edge.
    pub fn is_in_viewport(&self, position: Vector2, radius: f32) -> bool {
        let limits = self.containment_limits(radius);
        Edge::ALL
            .iter()
            .all(|&edge| !Self::beyond(edge, position, &limits))
    }

    /// Containment test that checks every edge.
    pub fn viewport_report(&self, position: Vector2, radius: f32) -> ViewportReport {
        let limits = self.containment_limits(radius);
        let mut report = ViewportReport {
            is_in_viewport: true,
            out_of_viewport_map: EdgeFlags::default(),
        };
        for edge in Edge::ALL {
            if Self::beyond(edge, position, &limits) {
                report.is_in_viewport = false;
                report.out_of_viewport_map.set(edge);
            }
        }
        report
    }

    /// Containment test selected by query type.
    ///
    /// [`TRUE_OR_FALSE_ONLY`] gives [`ViewportQuery::Inside`]; anything else,
    /// including `None`, gives the full [`ViewportQuery::Report`].
    pub fn viewport_position(
        &self,
        position: Vector2,
        radius: f32,
        kind: Option<&str>,
    ) -> ViewportQuery {
        if kind == Some(TRUE_OR_FALSE_ONLY) {
            ViewportQuery::Inside(self.is_in_viewport(position, radius))
        } else {
            ViewportQuery::Report(self.viewport_report(position, radius))
        }
    }

    /// Map a viewport-local pixel position to world space.
    pub fn world_position_from_viewport_position(&self, viewport_position: Vector2) -> Vector2 {
        let origin_x = self.position.x - self.viewport.x / 2.0;
        let origin_y = self.position.y - self.viewport.y / 2.0;
        Vector2 {
            x: (viewport_position.x + origin_x) / self.zoom,
            y: (viewport_position.y + origin_y) / self.zoom,
        }
    }

    /// Reticles to draw this frame: the camera centre, then the followed
    /// entity when it resolves. Empty without a focus.
    pub fn focus_marks(&self, followed_position: Option<Vector2>) -> Vec<FocusMark> {
        if self.focus.is_none() {
            return Vec::new();
        }
        let mut marks = vec![FocusMark {
            position: self.position,
            is_free: self.free,
            is_followed: false,
        }];
        if let Some(position) = followed_position {
            marks.push(FocusMark {
                position,
                is_free: self.free,
                is_followed: true,
            });
        }
        marks
    }

    /// Draw the focus reticles. Must be called inside a 2D camera scope so the
    /// world positions land on screen.
    pub fn draw<D: raylib::prelude::RaylibDraw>(
        &self,
        d: &mut D,
        metre: f32,
        followed_position: Option<Vector2>,
    ) {
        let Some(focus) = self.focus.as_ref() else {
            return;
        };
        for mark in self.focus_marks(followed_position) {
            focus.draw(d, metre, mark.position, mark.is_free, mark.is_followed);
        }
    }
}
