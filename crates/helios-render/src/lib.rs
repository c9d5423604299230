//! GPU plumbing for the sphere viewer: device/surface management, buffers,
//! camera, depth, texture upload, and the two render pipelines.

pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod sphere_pipeline;
pub mod texture;
pub mod uniforms;
pub mod unlit_pipeline;

pub use buffer::{MeshBuffer, upload_sphere};
pub use camera::Camera;
pub use depth::DepthBuffer;
pub use gpu::{GpuContext, GpuContextError, SurfaceError, init_gpu_blocking};
pub use sphere_pipeline::{SPHERE_SHADER_SOURCE, SpherePipeline, draw_sphere};
pub use texture::{
    GpuTexture, LutTextures, TextureError, surface_sampler, upload_lighting_lut,
    upload_rgba_texture,
};
pub use uniforms::{CameraUniform, LightUniform, MaterialUniform, ModelUniform, ShadingUniform};
pub use unlit_pipeline::{UNLIT_SHADER_SOURCE, UnlitPipeline, draw_unlit};
