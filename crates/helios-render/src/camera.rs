//! Free-fly camera with perspective projection.

use glam::{Mat4, Quat, Vec3};

/// Vertical field of view in degrees.
const FOV_Y_DEGREES: f32 = 30.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 200.0;

/// Position/orientation camera producing view and projection matrices.
///
/// Translation happens in the camera's local frame so WASDQE motion follows
/// the current orientation. The initial pose is remembered for reset.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    aspect: f32,
    initial_position: Vec3,
    initial_rotation: Quat,
}

impl Camera {
    /// Camera at `position` looking down -Z, with the given aspect ratio.
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            aspect,
            initial_position: position,
            initial_rotation: Quat::IDENTITY,
        }
    }

    /// Update the aspect ratio after a window resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Move along the camera's local axes. `+x` is right, `+y` is up, `-z`
    /// is forward.
    pub fn translate_local(&mut self, delta: Vec3) {
        self.position += self.rotation * delta;
    }

    /// Restore the initial pose.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.rotation = self.initial_rotation;
    }

    /// World-to-view matrix (inverse of the camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Right-handed perspective projection.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Combined projection * view, ready for the camera uniform.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_matrix_inverts_position() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 60.0), 1.0);
        let origin_in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
        // World origin should sit 60 units in front of the camera (-Z).
        assert!((origin_in_view - Vec3::new(0.0, 0.0, -60.0)).length() < 1e-4);
    }

    #[test]
    fn test_translate_local_follows_rotation() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        // Yaw 90 degrees left: local -Z (forward) now points down world -X.
        camera.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        camera.translate_local(Vec3::new(0.0, 0.0, -1.0));
        assert!((camera.position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_reset_restores_initial_pose() {
        let start = Vec3::new(0.0, 0.0, 60.0);
        let mut camera = Camera::new(start, 1.0);
        camera.translate_local(Vec3::new(5.0, -2.0, 10.0));
        camera.rotation = Quat::from_rotation_y(0.7);
        camera.reset();
        assert_eq!(camera.position, start);
        assert_eq!(camera.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_projection_maps_near_plane_depth_to_zero() {
        let camera = Camera::new(Vec3::ZERO, 16.0 / 9.0);
        let proj = camera.projection_matrix();
        let near_point = proj.project_point3(Vec3::new(0.0, 0.0, -NEAR_PLANE));
        assert!(near_point.z.abs() < 1e-5, "near plane should project to z=0");
    }

    #[test]
    fn test_view_projection_centers_point_in_front() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 60.0), 1.0);
        let clip = camera.view_projection().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }
}
