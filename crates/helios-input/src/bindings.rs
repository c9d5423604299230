//! Key bindings for the sphere viewer.

use glam::Vec3;
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Discrete actions triggered on key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Cycle to the next shading mode.
    AdvanceShadingMode,
    /// Toggle tangent-space normal mapping.
    ToggleNormalMap,
    /// Toggle height-based bump mapping.
    ToggleBumpMap,
    /// Reset camera and animation to their initial state.
    ResetScene,
    /// Close the application.
    Exit,
}

const ACTION_KEYS: [(KeyCode, ViewerAction); 5] = [
    (KeyCode::KeyB, ViewerAction::AdvanceShadingMode),
    (KeyCode::KeyN, ViewerAction::ToggleNormalMap),
    (KeyCode::KeyM, ViewerAction::ToggleBumpMap),
    (KeyCode::KeyR, ViewerAction::ResetScene),
    (KeyCode::Escape, ViewerAction::Exit),
];

/// Actions whose keys went down this frame, in binding order.
pub fn viewer_actions(keyboard: &KeyboardState) -> Vec<ViewerAction> {
    ACTION_KEYS
        .iter()
        .filter(|(key, _)| keyboard.was_pressed(*key))
        .map(|(_, action)| *action)
        .collect()
}

/// Camera translation for this frame, in camera-local units.
///
/// WASD moves forward/left/back/right, Q/E up/down; holding shift applies
/// `boost`. The returned vector is scaled by `speed * dt` but not normalized,
/// matching per-axis key motion.
pub fn camera_motion(keyboard: &KeyboardState, speed: f32, boost: f32, dt: f32) -> Vec3 {
    let direction = Vec3::new(
        keyboard.axis(KeyCode::KeyA, KeyCode::KeyD),
        keyboard.axis(KeyCode::KeyE, KeyCode::KeyQ),
        keyboard.axis(KeyCode::KeyW, KeyCode::KeyS),
    );
    let shift =
        keyboard.is_held(KeyCode::ShiftLeft) || keyboard.is_held(KeyCode::ShiftRight);
    let multiplier = if shift { boost } else { 1.0 };
    direction * speed * multiplier * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;

    fn press(keyboard: &mut KeyboardState, key: KeyCode) {
        keyboard.process_raw(RawKeyEvent {
            key,
            pressed: true,
            repeat: false,
        });
    }

    #[test]
    fn test_action_keys_map_to_actions() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyB);
        press(&mut keyboard, KeyCode::Escape);
        let actions = viewer_actions(&keyboard);
        assert_eq!(
            actions,
            vec![ViewerAction::AdvanceShadingMode, ViewerAction::Exit]
        );
    }

    #[test]
    fn test_actions_fire_once_per_press() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyR);
        assert_eq!(viewer_actions(&keyboard), vec![ViewerAction::ResetScene]);
        keyboard.end_frame();
        assert!(viewer_actions(&keyboard).is_empty());
    }

    #[test]
    fn test_unbound_keys_produce_no_actions() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyZ);
        assert!(viewer_actions(&keyboard).is_empty());
    }

    #[test]
    fn test_camera_motion_forward() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyW);
        let motion = camera_motion(&keyboard, 10.0, 3.0, 0.5);
        // Forward is local -Z.
        assert_eq!(motion, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_camera_motion_shift_boost() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyQ);
        press(&mut keyboard, KeyCode::ShiftLeft);
        let motion = camera_motion(&keyboard, 10.0, 3.0, 0.1);
        assert!((motion.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_motion_opposed_keys_cancel() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyA);
        press(&mut keyboard, KeyCode::KeyD);
        press(&mut keyboard, KeyCode::KeyE);
        let motion = camera_motion(&keyboard, 10.0, 3.0, 1.0);
        assert_eq!(motion.x, 0.0);
        assert_eq!(motion.y, -10.0);
    }
}
