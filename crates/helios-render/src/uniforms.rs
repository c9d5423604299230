//! Uniform buffer layouts shared between CPU and WGSL.
//!
//! All structs are `#[repr(C)]` with explicit padding so their byte layout
//! matches the WGSL uniform address space rules (16-byte alignment for
//! vec3/vec4 members). Sizes are pinned by compile-time asserts.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Per-frame camera data: combined view-projection plus the eye position
/// needed for specular terms. 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye_position: [f32; 3],
    pub _pad: f32,
}

const _: () = assert!(std::mem::size_of::<CameraUniform>() == 80);

impl CameraUniform {
    pub fn new(view_proj: Mat4, eye_position: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye_position: eye_position.to_array(),
            _pad: 0.0,
        }
    }
}

/// Per-object model matrix. 64 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

const _: () = assert!(std::mem::size_of::<ModelUniform>() == 64);

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Point light position and color plus the global ambient term. 48 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
    pub ambient: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<LightUniform>() == 48);

impl LightUniform {
    pub fn new(position: Vec3, color: Vec4, ambient: Vec4) -> Self {
        Self {
            position: position.to_array(),
            _pad: 0.0,
            color: color.to_array(),
            ambient: ambient.to_array(),
        }
    }
}

/// Surface material terms. `shininess` rides in the x component of the last
/// vec4 slot. 64 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MaterialUniform {
    pub emissive: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<MaterialUniform>() == 64);

impl MaterialUniform {
    pub fn from_material(material: &helios_lighting::Material) -> Self {
        Self {
            emissive: material.emissive.to_array(),
            diffuse: material.diffuse.to_array(),
            specular: material.specular.to_array(),
            shininess: [material.shininess, 0.0, 0.0, 0.0],
        }
    }
}

/// Shading branch selector and detail-map toggles. 16 bytes.
///
/// `mode` is 0 for Phong, 1 for Blinn-Phong, 2 for the LUT path; the toggles
/// are 0 or 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ShadingUniform {
    pub mode: u32,
    pub normal_map: u32,
    pub bump_map: u32,
    pub _pad: u32,
}

const _: () = assert!(std::mem::size_of::<ShadingUniform>() == 16);

impl ShadingUniform {
    pub fn from_state(state: &helios_shading::ShadingState) -> Self {
        Self {
            mode: state.mode().shader_index(),
            normal_map: state.normal_map_enabled() as u32,
            bump_map: state.bump_map_enabled() as u32,
            _pad: 0,
        }
    }
}
