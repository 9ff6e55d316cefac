//! Focus reticle drawn by the camera.
//!
//! [`Focus`] is a small visual helper owned by
//! [`Camera`](crate::resources::camera::Camera). It draws a pulsing ring at a
//! world position: once at the camera centre and, when the camera follows an
//! entity, once more over that entity.
//!
//! The pulse is tick based. Each call to [`Focus::update`] advances the phase
//! by a fixed step, so the animation speed follows the frame loop.

use std::f32::consts::TAU;

use raylib::prelude::*;

/// Phase advance per tick, in radians.
const PULSE_STEP: f32 = 0.08;
/// Ring radius at zero phase, in metres.
const BASE_RADIUS: f32 = 0.6;
/// How far the radius swings around [`BASE_RADIUS`], in metres.
const PULSE_AMPLITUDE: f32 = 0.15;
/// Half length of the cross drawn over a followed entity, in metres.
const CROSS_HALF: f32 = 0.25;

/// Pulsing reticle used as camera feedback.
#[derive(Debug, Clone)]
pub struct Focus {
    /// Current pulse phase in `[0, TAU)`.
    pub phase: f32,
    /// Colour of the camera mark while following.
    pub camera_color: Color,
    /// Colour of the camera mark while in free mode.
    pub free_color: Color,
    /// Colour of the mark drawn over the followed entity.
    pub followed_color: Color,
}

impl Default for Focus {
    fn default() -> Self {
        Self::new()
    }
}

impl Focus {
    pub fn new() -> Self {
        Focus {
            phase: 0.0,
            camera_color: Color::SKYBLUE,
            free_color: Color::ORANGE,
            followed_color: Color::RED,
        }
    }

    /// Advance the pulse by one tick.
    pub fn update(&mut self) {
        self.phase = (self.phase + PULSE_STEP) % TAU;
    }

    /// Ring radius in pixels for the current phase.
    pub fn radius(&self, metre: f32) -> f32 {
        metre * (BASE_RADIUS + PULSE_AMPLITUDE * self.phase.sin())
    }

    /// Pick the ring colour for a mark.
    pub fn color(&self, is_free: bool, is_followed: bool) -> Color {
        if is_followed {
            self.followed_color
        } else if is_free {
            self.free_color
        } else {
            self.camera_color
        }
    }

    /// Draw the reticle at `position`.
    ///
    /// `metre` converts the reticle's metre-based sizes into pixels.
    pub fn draw<D: RaylibDraw>(
        &self,
        d: &mut D,
        metre: f32,
        position: Vector2,
        is_free: bool,
        is_followed: bool,
    ) {
        let color = self.color(is_free, is_followed);
        d.draw_circle_lines(
            position.x as i32,
            position.y as i32,
            self.radius(metre),
            color,
        );

        if is_followed {
            let half = CROSS_HALF * metre;
            d.draw_line_v(
                Vector2 {
                    x: position.x - half,
                    y: position.y,
                },
                Vector2 {
                    x: position.x + half,
                    y: position.y,
                },
                color,
            );
            d.draw_line_v(
                Vector2 {
                    x: position.x,
                    y: position.y - half,
                },
                Vector2 {
                    x: position.x,
                    y: position.y + half,
                },
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_advances_and_wraps_phase() {
        let mut focus = Focus::new();
        focus.update();
        assert!((focus.phase - PULSE_STEP).abs() < 1e-6);

        for _ in 0..1000 {
            focus.update();
        }
        assert!(focus.phase >= 0.0 && focus.phase < TAU);
    }

    #[test]
    fn test_radius_at_rest_is_base() {
        let focus = Focus::new();
        assert!((focus.radius(10.0) - BASE_RADIUS * 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_radius_stays_within_pulse_range() {
        let mut focus = Focus::new();
        for _ in 0..200 {
            focus.update();
            let r = focus.radius(1.0);
            assert!(r >= BASE_RADIUS - PULSE_AMPLITUDE - 1e-6);
            assert!(r <= BASE_RADIUS + PULSE_AMPLITUDE + 1e-6);
        }
    }

    fn same(a: Color, b: Color) -> bool {
        (a.r, a.g, a.b, a.a) == (b.r, b.g, b.b, b.a)
    }

    #[test]
    fn test_color_prefers_followed_then_free() {
        let focus = Focus::new();
        assert!(same(focus.color(true, true), focus.followed_color));
        assert!(same(focus.color(false, true), focus.followed_color));
        assert!(same(focus.color(true, false), focus.free_color));
        assert!(same(focus.color(false, false), focus.camera_color));
    }
}
