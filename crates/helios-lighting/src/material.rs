//! Surface material and point light descriptors.

use glam::{Vec3, Vec4};

/// Phong-family surface material.
///
/// Colors are linear RGBA in `[0, 1]` except `specular`, which may exceed 1
/// to overdrive the highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Self-illumination added unconditionally.
    pub emissive: Vec4,
    /// Diffuse reflectance.
    pub diffuse: Vec4,
    /// Specular reflectance.
    pub specular: Vec4,
    /// Specular exponent; higher is a tighter highlight.
    pub shininess: f32,
}

impl Material {
    /// The earth material from the demo scene: white diffuse, overdriven
    /// specular, tight highlight.
    pub fn earth() -> Self {
        Self {
            emissive: Vec4::ZERO,
            diffuse: Vec4::ONE,
            specular: Vec4::new(2.0, 2.0, 2.0, 1.0),
            shininess: 50.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emissive: Vec4::ZERO,
            diffuse: Vec4::ONE,
            specular: Vec4::ONE,
            shininess: 5.0,
        }
    }
}

/// Positional light source.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Linear RGBA color.
    pub color: Vec4,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Vec4::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_material_constants() {
        let mat = Material::earth();
        assert_eq!(mat.diffuse, Vec4::ONE);
        assert_eq!(mat.specular, Vec4::new(2.0, 2.0, 2.0, 1.0));
        assert_eq!(mat.shininess, 50.0);
        assert_eq!(mat.emissive, Vec4::ZERO);
    }

    #[test]
    fn test_default_light_is_white() {
        let light = PointLight::default();
        assert_eq!(light.color, Vec4::ONE);
    }
}
