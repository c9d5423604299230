//! Shading mode selection state machine.

pub mod state;

pub use state::{ShadingMode, ShadingState};
