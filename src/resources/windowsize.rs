//! Window size resource.
//!
//! Tracks the OS window dimensions in pixels. The input system refreshes it
//! every frame and fires a resize event when it changes, which is how the
//! camera viewport follows the window.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Size as floats, the form the camera viewport uses.
    pub fn as_size(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }

    /// Store a new size. Returns `true` if it differs from the current one.
    pub fn replace(&mut self, w: i32, h: i32) -> bool {
        if self.w == w && self.h == h {
            return false;
        }
        self.w = w;
        self.h = h;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_reports_change() {
        let mut size = WindowSize { w: 800, h: 600 };
        assert!(!size.replace(800, 600));
        assert!(size.replace(1024, 600));
        assert_eq!(size, WindowSize { w: 1024, h: 600 });
        assert_eq!(size.as_size(), (1024.0, 600.0));
    }
}
