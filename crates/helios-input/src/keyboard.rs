//! Frame-coherent keyboard state tracker.
//!
//! Accumulates winit key events during a frame and answers, for any physical
//! key: is it held, and did it transition to pressed this frame. Physical key
//! codes are used so WASD motion is layout-independent.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal key event for processing without a winit event loop.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    pub key: KeyCode,
    pub pressed: bool,
    pub repeat: bool,
}

/// Per-frame keyboard state over physical key codes.
///
/// Forward every [`KeyEvent`] to [`process_event`](Self::process_event),
/// query with [`is_held`](Self::is_held) / [`was_pressed`](Self::was_pressed),
/// then call [`end_frame`](Self::end_frame) after the frame's logic ran.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a winit key event into the state. Non-code keys and OS key
    /// repeats are ignored.
    pub fn process_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        self.process_raw(RawKeyEvent {
            key,
            pressed: event.state == ElementState::Pressed,
            repeat: event.repeat,
        });
    }

    /// Fold a [`RawKeyEvent`] into the state.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        if event.pressed {
            if self.held.insert(event.key) {
                self.pressed_this_frame.insert(event.key);
            }
        } else {
            self.held.remove(&event.key);
        }
    }

    /// True while the key is held down.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// True only during the frame the key went down.
    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// Signed axis from a negative and a positive key, for camera motion.
    /// Both or neither held yields 0.
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }

    /// Drop the per-frame press set. Call once per frame, after input logic.
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
    }
}
