//! Interleaved GPU vertex format for sphere rendering.
//!
//! All sphere render pipelines (lit and unlit) reference
//! [`sphere_vertex_buffer_layout`] so vertex fetch cannot drift from the
//! WGSL input declarations.

use std::mem;

use bytemuck::{Pod, Zeroable};
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::sphere::SphereMesh;

/// Interleaved vertex: position, normal, uv, tangent. 44 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub tangent: [f32; 3],
}

/// Vertex attributes matching the sphere shader's input locations.
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 4] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 32,
        shader_location: 3,
    },
];

/// The vertex buffer layout shared by every sphere pipeline.
pub fn sphere_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    VertexBufferLayout {
        array_stride: mem::size_of::<SphereVertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &SPHERE_VERTEX_ATTRIBUTES,
    }
}

/// Stride must match the interleaved struct size.
const _: () = assert!(
    mem::size_of::<SphereVertex>() == 44,
    "SphereVertex size changed, update SPHERE_VERTEX_ATTRIBUTES"
);

impl SphereMesh {
    /// Interleave the attribute streams into GPU-uploadable vertices.
    pub fn interleave(&self) -> Vec<SphereVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.texcoords)
            .zip(&self.tangents)
            .map(|(((pos, normal), uv), tangent)| SphereVertex {
                position: pos.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
                tangent: tangent.to_array(),
            })
            .collect()
    }
}
