//! Analytic Phong and Blinn-Phong evaluation.
//!
//! CPU-side reference for the lighting model the shaders implement. The LUT
//! generator in [`crate::lut`] approximates exactly these terms, so tests use
//! this module as the oracle for table contents.

use glam::{Vec3, Vec4};

use crate::material::{Material, PointLight};

/// Clamped Lambert diffuse factor `max(0, N·L)`.
pub fn lambert_diffuse(normal: Vec3, to_light: Vec3) -> f32 {
    normal.dot(to_light).max(0.0)
}

/// Phong specular factor `max(0, R·V)^shininess` with `R = reflect(-L, N)`.
pub fn phong_specular(normal: Vec3, to_light: Vec3, to_eye: Vec3, shininess: f32) -> f32 {
    let reflected = reflect(-to_light, normal);
    reflected.dot(to_eye).max(0.0).powf(shininess)
}

/// Blinn-Phong specular factor `max(0, N·H)^shininess` with the half-vector
/// `H = normalize(L + V)`.
pub fn blinn_specular(normal: Vec3, to_light: Vec3, to_eye: Vec3, shininess: f32) -> f32 {
    let half = (to_light + to_eye).normalize_or_zero();
    normal.dot(half).max(0.0).powf(shininess)
}

/// Full analytic shade of a surface point.
///
/// `blinn` selects the Blinn-Phong half-vector specular term instead of the
/// Phong reflection term. Returns linear RGBA before texturing.
pub fn shade(
    material: &Material,
    light: &PointLight,
    ambient: Vec4,
    position: Vec3,
    normal: Vec3,
    eye: Vec3,
    blinn: bool,
) -> Vec4 {
    let n = normal.normalize_or_zero();
    let to_light = (light.position - position).normalize_or_zero();
    let to_eye = (eye - position).normalize_or_zero();

    let diffuse_factor = lambert_diffuse(n, to_light);
    let specular_factor = if blinn {
        blinn_specular(n, to_light, to_eye, material.shininess)
    } else {
        phong_specular(n, to_light, to_eye, material.shininess)
    };

    material.emissive
        + ambient
        + light.color * material.diffuse * diffuse_factor
        + light.color * material.specular * specular_factor
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_lambert_is_cosine_of_incidence() {
        let n = Vec3::Y;
        assert!((lambert_diffuse(n, Vec3::Y) - 1.0).abs() < 1e-6);
        let grazing = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((lambert_diffuse(n, grazing) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_lambert_clamps_backfacing_light() {
        assert_eq!(lambert_diffuse(Vec3::Y, Vec3::NEG_Y), 0.0);
    }

    #[test]
    fn test_phong_peak_at_mirror_direction() {
        // Light straight down the normal, eye on the normal: R == V.
        let spec = phong_specular(Vec3::Y, Vec3::Y, Vec3::Y, 50.0);
        assert!((spec - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_blinn_peak_when_half_vector_is_normal() {
        let spec = blinn_specular(Vec3::Y, Vec3::Y, Vec3::Y, 50.0);
        assert!((spec - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_blinn_falls_off_slower_than_phong() {
        // Off-peak geometry: the half-vector angle is half the reflection
        // angle, so at equal exponents the Blinn lobe is wider.
        let n = Vec3::Y;
        let l = Vec3::new(0.0, 1.0, 0.3).normalize();
        let v = Vec3::new(0.3, 1.0, 0.0).normalize();
        let phong = phong_specular(n, l, v, 20.0);
        let blinn = blinn_specular(n, l, v, 20.0);
        assert!(
            blinn > phong,
            "expected wider Blinn lobe: blinn={blinn}, phong={phong}"
        );
    }

    #[test]
    fn test_shininess_tightens_highlight() {
        let n = Vec3::Y;
        let l = Vec3::new(0.0, 1.0, 0.2).normalize();
        let v = Vec3::new(0.2, 1.0, 0.0).normalize();
        let loose = blinn_specular(n, l, v, 5.0);
        let tight = blinn_specular(n, l, v, 50.0);
        assert!(tight < loose);
    }

    #[test]
    fn test_shade_includes_emissive_and_ambient_when_unlit() {
        let mut material = Material::earth();
        material.emissive = glam::Vec4::new(0.2, 0.0, 0.0, 0.0);
        let light = PointLight {
            position: Vec3::new(0.0, -10.0, 0.0), // below the surface
            color: glam::Vec4::ONE,
        };
        let ambient = glam::Vec4::new(0.1, 0.1, 0.1, 1.0);

        // Surface faces +Y, light is behind it; only emissive + ambient remain.
        let color = shade(
            &material,
            &light,
            ambient,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
            Vec3::new(0.0, 5.0, 0.0),
            true,
        );
        assert!((color.x - 0.3).abs() < 1e-5);
        assert!((color.y - 0.1).abs() < 1e-5);
        assert!((color.z - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_shade_head_on_is_brightest() {
        let material = Material::default();
        let light = PointLight {
            position: Vec3::new(0.0, 10.0, 0.0),
            color: glam::Vec4::ONE,
        };
        let head_on = shade(
            &material,
            &light,
            glam::Vec4::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Y,
            Vec3::new(0.0, 5.0, 0.0),
            false,
        );
        let oblique = shade(
            &material,
            &light,
            glam::Vec4::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::X,
            Vec3::new(0.0, 5.0, 0.0),
            false,
        );
        assert!(head_on.x > oblique.x);
    }
}
