//! Scene animation state: earth spin, sun placement, FPS accounting.

use glam::{Mat4, Vec3};

/// Earth spin rate in degrees per second.
const EARTH_ROTATION_RATE: f32 = 30.0;
/// Fixed sun orbit angle in degrees.
const SUN_ROTATION_DEGREES: f32 = 90.0;
/// Earth model scale (mean diameter in thousands of km).
const EARTH_SCALE: f32 = 12.756;
/// Sun body offset before its orbit rotation.
const SUN_OFFSET: Vec3 = Vec3::new(90.0, 0.0, -50.0);

/// Animated transforms for the two sphere instances. The point light sits at
/// the sun body's world position.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Earth rotation about +Y, degrees, wrapped to [0, 360).
    pub earth_rotation: f32,
    /// Sun orbit angle about -Y, degrees.
    pub sun_rotation: f32,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            earth_rotation: 0.0,
            sun_rotation: SUN_ROTATION_DEGREES,
        }
    }

    /// Advance the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.earth_rotation = (self.earth_rotation + EARTH_ROTATION_RATE * dt) % 360.0;
        self.sun_rotation = SUN_ROTATION_DEGREES;
    }

    /// Restore the initial animation state.
    pub fn reset(&mut self) {
        self.earth_rotation = 0.0;
        self.sun_rotation = SUN_ROTATION_DEGREES;
    }

    /// Model matrix for the earth: spin about +Y, then uniform scale.
    pub fn earth_model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.earth_rotation.to_radians())
            * Mat4::from_scale(Vec3::splat(EARTH_SCALE))
    }

    /// Model matrix for the sun body: orbit rotation about -Y applied to a
    /// fixed offset.
    pub fn sun_model_matrix(&self) -> Mat4 {
        Mat4::from_axis_angle(Vec3::NEG_Y, self.sun_rotation.to_radians())
            * Mat4::from_translation(SUN_OFFSET)
    }

    /// World-space point light position: the sun body's translation.
    pub fn light_position(&self) -> Vec3 {
        self.sun_model_matrix().w_axis.truncate()
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame-rate counter sampling over a fixed window.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    elapsed: f32,
    frames: u32,
}

/// FPS sampling window in seconds.
const FPS_WINDOW: f32 = 2.0;

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame. Returns the average FPS once per sampling window.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed > FPS_WINDOW {
            let fps = self.frames as f32 / self.elapsed;
            self.elapsed = 0.0;
            self.frames = 0;
            Some(fps)
        } else {
            None
        }
    }
}
