//! Keyboard input: frame-coherent key state and the viewer's action map.

pub mod bindings;
pub mod keyboard;

pub use bindings::{ViewerAction, camera_motion, viewer_actions};
pub use keyboard::{KeyboardState, RawKeyEvent};
