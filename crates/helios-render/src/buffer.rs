//! Vertex and index buffer upload.

use helios_mesh::SphereMesh;
use wgpu::util::DeviceExt;

/// GPU-resident mesh: interleaved vertex buffer plus u32 index buffer.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Upload interleaved vertex data and indices.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        vertices: &[helios_mesh::SphereVertex],
        indices: &[u32],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-vertices")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// Bind the buffers and issue an indexed draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Upload a generated sphere as an interleaved mesh buffer.
pub fn upload_sphere(device: &wgpu::Device, label: &str, mesh: &SphereMesh) -> MeshBuffer {
    let vertices = mesh.interleave();
    MeshBuffer::new(device, label, &vertices, &mesh.indices)
}
