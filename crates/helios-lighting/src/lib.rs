//! Lighting: material/light descriptors, analytic Phong and Blinn-Phong
//! evaluation, and the precomputed lookup tables that replace the analytic
//! specular math with texture samples.

pub mod lut;
pub mod material;
pub mod phong;

pub use lut::{LightingLut, LutParams};
pub use material::{Material, PointLight};
pub use phong::{blinn_specular, lambert_diffuse, phong_specular, shade};
