//! Procedural sphere geometry: UV-sphere generation and the GPU vertex format.

pub mod sphere;
pub mod vertex;

pub use sphere::SphereMesh;
pub use vertex::{SPHERE_VERTEX_ATTRIBUTES, SphereVertex, sphere_vertex_buffer_layout};
