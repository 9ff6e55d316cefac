//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//!   Pressing a bound action key triggers the matching event:
//!   [`KeyDownEvent`] for the free-camera toggle, [`SwitchDebugEvent`] for
//!   the debug overlay.
//! - [`detect_window_resize`] compares the window with [`WindowSize`] and
//!   triggers [`WindowResizedEvent`] when it changed.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::keydown::KeyDownEvent;
use crate::events::resize::WindowResizedEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};
use crate::resources::windowsize::WindowSize;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };

    poll(&mut input.direction_up);
    poll(&mut input.direction_right);
    poll(&mut input.direction_down);
    poll(&mut input.direction_left);
    poll(&mut input.toggle_free);
    poll(&mut input.mode_debug);

    if input.toggle_free.just_pressed {
        commands.trigger(KeyDownEvent {
            key_code: key_code(input.toggle_free.key_binding),
        });
    }
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

fn key_code(key: KeyboardKey) -> i32 {
    key as i32
}

/// Fire a [`WindowResizedEvent`] when the window size changed since the last
/// frame.
pub fn detect_window_resize(
    rl: NonSend<raylib::RaylibHandle>,
    mut window_size: ResMut<WindowSize>,
    mut commands: Commands,
) {
    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    if window_size.replace(w, h) {
        commands.trigger(WindowResizedEvent {
            size: Some(window_size.as_size()),
        });
    }
}
