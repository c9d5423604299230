//! Parametric UV-sphere generation.
//!
//! Produces a latitude/longitude sphere as a stack-major grid of
//! `(stacks + 1) * (slices + 1)` vertices. The seam column and both poles are
//! duplicated so that texture coordinates stay continuous across the wrap;
//! pole cells and the closing band collapse to degenerate (zero-area)
//! triangles, which keeps the index arithmetic uniform over the whole grid.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

/// Immutable sphere geometry in separate attribute streams.
///
/// All attribute vectors have the same length and share vertex order;
/// `indices` references them as a triangle list.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    /// Vertex positions, `radius * normal`.
    pub positions: Vec<Vec3>,
    /// Unit outward radial directions.
    pub normals: Vec<Vec3>,
    /// (U, V) with U = longitude fraction, V = latitude fraction pole to pole.
    pub texcoords: Vec<Vec2>,
    /// Unit tangents along increasing longitude, for tangent-space mapping.
    pub tangents: Vec<Vec3>,
    /// Triangle list, six indices per quad cell.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Generate a UV sphere with the given radius and tessellation.
    ///
    /// `slices` is the number of longitude bands (minimum 3), `stacks` the
    /// number of latitude bands (minimum 2). Inputs below those minimums
    /// produce degenerate geometry rather than an error; callers validate.
    pub fn generate(radius: f32, slices: u32, stacks: u32) -> Self {
        debug_assert!(slices >= 3, "sphere needs at least 3 slices, got {slices}");
        debug_assert!(stacks >= 2, "sphere needs at least 2 stacks, got {stacks}");

        // Row stride of the vertex grid. The index loop below depends on the
        // vertex loop laying out exactly this many vertices per stack row.
        let row_stride = slices + 1;

        let vertex_count = ((stacks + 1) * row_stride) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut texcoords = Vec::with_capacity(vertex_count);
        let mut tangents = Vec::with_capacity(vertex_count);

        for i in 0..=stacks {
            let v = i as f32 / stacks as f32;
            let phi = v * PI;

            for j in 0..row_stride {
                let u = j as f32 / slices as f32;
                let theta = u * 2.0 * PI;

                let x = theta.cos() * phi.sin();
                let y = phi.cos();
                let z = theta.sin() * phi.sin();

                let normal = Vec3::new(x, y, z);
                positions.push(normal * radius);
                normals.push(normal);
                texcoords.push(Vec2::new(u, v));
                // d(position)/d(theta), normalized. Well defined even at the
                // poles, where the radial normal degenerates.
                tangents.push(Vec3::new(-theta.sin(), 0.0, theta.cos()));
            }
        }

        // Two triangles per grid cell, row by row. One extra band of cells
        // past the last stack folds onto the final vertex row, so its
        // triangles are zero-area and every index stays inside the grid.
        let cell_count = slices * stacks + slices;
        let mut indices = Vec::with_capacity(6 * cell_count as usize);
        for stack in 0..=stacks {
            let row = stack * row_stride;
            let next_row = (stack + 1).min(stacks) * row_stride;
            for slice in 0..slices {
                let a = row + slice;
                let b = next_row + slice;

                indices.push(a + 1);
                indices.push(b + 1);
                indices.push(b);

                indices.push(b);
                indices.push(a);
                indices.push(a + 1);
            }
        }

        debug_assert!(
            indices.iter().all(|&idx| (idx as usize) < vertex_count),
            "index generation produced an out-of-bounds index"
        );

        Self {
            positions,
            normals,
            texcoords,
            tangents,
            indices,
        }
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices in the triangle list.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        for (slices, stacks) in [(3, 2), (8, 4), (16, 8), (32, 32), (48, 24)] {
            let mesh = SphereMesh::generate(1.0, slices, stacks);
            let expected_vertices = ((stacks + 1) * (slices + 1)) as usize;
            let expected_indices = (6 * (slices * stacks + slices)) as usize;
            assert_eq!(
                mesh.vertex_count(),
                expected_vertices,
                "vertex count for {slices}x{stacks}"
            );
            assert_eq!(
                mesh.index_count(),
                expected_indices,
                "index count for {slices}x{stacks}"
            );
            assert_eq!(mesh.normals.len(), expected_vertices);
            assert_eq!(mesh.texcoords.len(), expected_vertices);
            assert_eq!(mesh.tangents.len(), expected_vertices);
        }
    }

    #[test]
    fn test_reference_tessellation_32x32() {
        let mesh = SphereMesh::generate(1.0, 32, 32);
        assert_eq!(mesh.vertex_count(), 33 * 33);
        assert_eq!(mesh.vertex_count(), 1089);
        assert_eq!(mesh.index_count(), 6 * (1024 + 32));
        assert_eq!(mesh.index_count(), 6336);
    }

    #[test]
    fn test_all_indices_in_bounds() {
        for (slices, stacks) in [(3, 2), (5, 3), (7, 11), (32, 32), (64, 13)] {
            let mesh = SphereMesh::generate(2.0, slices, stacks);
            let max = mesh.indices.iter().copied().max().unwrap() as usize;
            assert!(
                max < mesh.vertex_count(),
                "max index {max} out of bounds for {slices}x{stacks} ({} vertices)",
                mesh.vertex_count()
            );
        }
    }

    #[test]
    fn test_indices_in_bounds_when_slices_exceed_stacks() {
        // Wide tessellations stress the closing band the hardest.
        let mesh = SphereMesh::generate(1.0, 8, 4);
        let max = mesh.indices.iter().copied().max().unwrap() as usize;
        assert!(
            max < mesh.vertex_count(),
            "max index {max} out of bounds ({} vertices)",
            mesh.vertex_count()
        );
        assert_eq!(mesh.index_count(), 6 * (8 * 4 + 8));
    }

    #[test]
    fn test_closing_band_is_degenerate() {
        let mesh = SphereMesh::generate(1.0, 8, 4);
        let row_stride = 9;
        let last_row_start = (mesh.vertex_count() - row_stride) as u32;
        // The final 6 * slices indices form the folded band; every one of
        // them references the bottom pole row, so the triangles are zero-area.
        let band = &mesh.indices[mesh.index_count() - 6 * 8..];
        for &idx in band {
            assert!(
                idx >= last_row_start,
                "closing band index {idx} escapes the bottom pole row"
            );
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = SphereMesh::generate(3.5, 16, 12);
        for (i, normal) in mesh.normals.iter().enumerate() {
            assert!(
                (normal.length() - 1.0).abs() < 1e-5,
                "normal {i} has length {}",
                normal.length()
            );
        }
    }

    #[test]
    fn test_position_is_radius_times_normal() {
        let radius = 12.756;
        let mesh = SphereMesh::generate(radius, 16, 12);
        for (pos, normal) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((*pos - *normal * radius).length() < 1e-4);
        }
    }

    #[test]
    fn test_pole_rows_are_at_poles() {
        let mesh = SphereMesh::generate(1.0, 8, 4);
        let row_stride = 9;
        // First row: phi = 0, so every vertex sits at (0, 1, 0).
        for j in 0..row_stride {
            assert!((mesh.positions[j] - Vec3::Y).length() < 1e-6);
        }
        // Last row: phi = pi, (0, -1, 0).
        let last_row = mesh.vertex_count() - row_stride;
        for j in 0..row_stride {
            assert!((mesh.positions[last_row + j] - Vec3::NEG_Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_texcoords_cover_unit_square() {
        let mesh = SphereMesh::generate(1.0, 8, 4);
        for uv in &mesh.texcoords {
            assert!((0.0..=1.0).contains(&uv.x), "U out of range: {}", uv.x);
            assert!((0.0..=1.0).contains(&uv.y), "V out of range: {}", uv.y);
        }
        // Seam column duplicates longitude 0 at U = 1.
        assert!((mesh.texcoords[8].x - 1.0).abs() < 1e-6);
        assert!((mesh.positions[0] - mesh.positions[8]).length() < 1e-5);
    }

    #[test]
    fn test_tangents_orthogonal_to_normals() {
        let mesh = SphereMesh::generate(1.0, 16, 12);
        for (i, (tangent, normal)) in mesh.tangents.iter().zip(&mesh.normals).enumerate() {
            assert!(
                (tangent.length() - 1.0).abs() < 1e-5,
                "tangent {i} is not unit length"
            );
            assert!(
                tangent.dot(*normal).abs() < 1e-5,
                "tangent {i} is not orthogonal to its normal: dot = {}",
                tangent.dot(*normal)
            );
        }
    }

    #[test]
    fn test_equator_vertex_positions() {
        // 4 stacks puts row 2 on the equator; slice 0 is at theta = 0.
        let mesh = SphereMesh::generate(1.0, 8, 4);
        let equator_start = 2 * 9;
        assert!((mesh.positions[equator_start] - Vec3::X).length() < 1e-6);
        // Quarter turn: theta = pi/2 maps to +Z.
        assert!((mesh.positions[equator_start + 2] - Vec3::Z).length() < 1e-6);
    }
}
