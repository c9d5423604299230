//! Lit sphere pipeline with three selectable shading strategies.
//!
//! Uniforms bind camera + model at `@group(0)`, light + material + shading
//! state at `@group(1)`, and all textures at `@group(2)`. The fragment shader
//! branches on `shading.mode`: 0 evaluates analytic Phong (reflection
//! vector), 1 analytic Blinn-Phong (half vector), and 2 replaces the lighting
//! math with fetches from the precomputed lookup tables. The normal-map and
//! bump-map flags layer tangent-space detail onto the geometric normal; the
//! LUT path ignores the normal map.

use std::num::NonZeroU64;

use helios_mesh::sphere_vertex_buffer_layout;

use crate::buffer::MeshBuffer;
use crate::depth::DepthBuffer;

/// Sphere pipeline: scene uniforms at groups 0-1, textures at group 2.
pub struct SpherePipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Camera + model uniform layout (group 0).
    pub transform_bind_group_layout: wgpu::BindGroupLayout,
    /// Light + material + shading uniform layout (group 1).
    pub lighting_bind_group_layout: wgpu::BindGroupLayout,
    /// Surface maps + lookup tables layout (group 2).
    pub texture_bind_group_layout: wgpu::BindGroupLayout,
}

fn uniform_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
    min_size: u64,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: NonZeroU64::new(min_size),
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

impl SpherePipeline {
    pub fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let transform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sphere-transform-bgl"),
                entries: &[
                    // binding 0: CameraUniform
                    uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT, 80),
                    // binding 1: ModelUniform
                    uniform_entry(1, wgpu::ShaderStages::VERTEX, 64),
                ],
            });

        let lighting_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sphere-lighting-bgl"),
                entries: &[
                    // binding 0: LightUniform
                    uniform_entry(0, wgpu::ShaderStages::FRAGMENT, 48),
                    // binding 1: MaterialUniform
                    uniform_entry(1, wgpu::ShaderStages::FRAGMENT, 64),
                    // binding 2: ShadingUniform
                    uniform_entry(2, wgpu::ShaderStages::FRAGMENT, 16),
                ],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sphere-texture-bgl"),
                entries: &[
                    // binding 0: base color map
                    texture_entry(0),
                    // binding 1: repeat sampler for surface maps
                    sampler_entry(1),
                    // binding 2: tangent-space normal map
                    texture_entry(2),
                    // binding 3: height map for bump mapping
                    texture_entry(3),
                    // binding 4: diffuse lookup table
                    texture_entry(4),
                    // binding 5: specular lookup table
                    texture_entry(5),
                    // binding 6: clamp-to-edge sampler for the tables
                    sampler_entry(6),
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere-pipeline-layout"),
            bind_group_layouts: &[
                &transform_bind_group_layout,
                &lighting_bind_group_layout,
                &texture_bind_group_layout,
            ],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[sphere_vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(DepthBuffer::depth_stencil_state()),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            transform_bind_group_layout,
            lighting_bind_group_layout,
            texture_bind_group_layout,
        }
    }
}

/// Draw the sphere with transform, lighting, and texture bind groups.
pub fn draw_sphere<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &SpherePipeline,
    transform_bind_group: &'a wgpu::BindGroup,
    lighting_bind_group: &'a wgpu::BindGroup,
    texture_bind_group: &'a wgpu::BindGroup,
    mesh: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, transform_bind_group, &[]);
    render_pass.set_bind_group(1, lighting_bind_group, &[]);
    render_pass.set_bind_group(2, texture_bind_group, &[]);
    mesh.draw(render_pass);
}

/// WGSL shader source for the lit textured sphere.
///
/// All texture fetches happen unconditionally so control flow stays uniform;
/// the shading branches only select between already-sampled values and the
/// analytic terms.
pub const SPHERE_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    eye_position: vec3<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

struct LightUniform {
    position: vec3<f32>,
    color: vec4<f32>,
    ambient: vec4<f32>,
};

struct MaterialUniform {
    emissive: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    shininess: vec4<f32>,
};

struct ShadingUniform {
    mode: u32,
    normal_map: u32,
    bump_map: u32,
    _pad: u32,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(0) @binding(1)
var<uniform> object: ModelUniform;

@group(1) @binding(0)
var<uniform> light: LightUniform;

@group(1) @binding(1)
var<uniform> material: MaterialUniform;

@group(1) @binding(2)
var<uniform> shading: ShadingUniform;

@group(2) @binding(0)
var t_base: texture_2d<f32>;

@group(2) @binding(1)
var s_surface: sampler;

@group(2) @binding(2)
var t_normal: texture_2d<f32>;

@group(2) @binding(3)
var t_height: texture_2d<f32>;

@group(2) @binding(4)
var t_lut_diffuse: texture_2d<f32>;

@group(2) @binding(5)
var t_lut_specular: texture_2d<f32>;

@group(2) @binding(6)
var s_lut: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) tangent: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) world_tangent: vec3<f32>,
};

const BUMP_STRENGTH: f32 = 4.0;

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_position = object.model * vec4<f32>(in.position, 1.0);
    out.clip_position = camera.view_proj * world_position;
    out.world_position = world_position.xyz;
    // Model transform is rotation * uniform scale, so transforming by the
    // upper 3x3 and renormalizing keeps normals correct.
    let rotation = mat3x3<f32>(
        object.model[0].xyz,
        object.model[1].xyz,
        object.model[2].xyz,
    );
    out.world_normal = normalize(rotation * in.normal);
    out.world_tangent = normalize(rotation * in.tangent);
    out.uv = in.uv;
    return out;
}

// Normal perturbed by the detail maps, in world space. Starts from the
// tangent-space up vector, optionally replaced by the normal-map sample and
// tilted by the height-map gradient, then rotated into world space by the
// TBN basis.
fn surface_normal(in: VertexOutput, use_normal_map: bool) -> vec3<f32> {
    let normal_sample = textureSample(t_normal, s_surface, in.uv).xyz;

    let dims = vec2<f32>(textureDimensions(t_height));
    let texel = vec2<f32>(1.0, 1.0) / dims;
    let h_left = textureSample(t_height, s_surface, in.uv - vec2<f32>(texel.x, 0.0)).r;
    let h_right = textureSample(t_height, s_surface, in.uv + vec2<f32>(texel.x, 0.0)).r;
    let h_down = textureSample(t_height, s_surface, in.uv - vec2<f32>(0.0, texel.y)).r;
    let h_up = textureSample(t_height, s_surface, in.uv + vec2<f32>(0.0, texel.y)).r;

    var tangent_normal = vec3<f32>(0.0, 0.0, 1.0);
    if use_normal_map && shading.normal_map == 1u {
        tangent_normal = normalize(normal_sample * 2.0 - 1.0);
    }
    if shading.bump_map == 1u {
        // Central-difference gradient tilts the normal against the slope.
        let gradient = vec2<f32>(h_right - h_left, h_up - h_down) * BUMP_STRENGTH;
        tangent_normal = normalize(tangent_normal - vec3<f32>(gradient, 0.0));
    }

    let n = normalize(in.world_normal);
    let t = normalize(in.world_tangent - dot(in.world_tangent, n) * n);
    let b = cross(n, t);
    return normalize(t * tangent_normal.x + b * tangent_normal.y + n * tangent_normal.z);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let base_color = textureSample(t_base, s_surface, in.uv);

    // The LUT path ignores the normal map.
    let n = surface_normal(in, shading.mode != 2u);
    let l = normalize(light.position - in.world_position);
    let v = normalize(camera.eye_position - in.world_position);
    let h = normalize(l + v);

    let n_dot_l = max(dot(n, l), 0.0);
    let n_dot_h = max(dot(n, h), 0.0);

    let lut_diffuse = textureSample(t_lut_diffuse, s_lut, vec2<f32>(n_dot_l, n_dot_h));
    let lut_specular = textureSample(t_lut_specular, s_lut, vec2<f32>(n_dot_h, 0.5));

    var diffuse: vec4<f32>;
    var specular: vec4<f32>;
    if shading.mode == 2u {
        diffuse = vec4<f32>(lut_diffuse.rgb, 1.0);
        specular = lut_specular;
    } else {
        var spec_factor: f32;
        if shading.mode == 0u {
            let r = reflect(-l, n);
            spec_factor = pow(max(dot(r, v), 0.0), material.shininess.x);
        } else {
            spec_factor = pow(n_dot_h, material.shininess.x);
        }
        // No specular on back-facing geometry.
        spec_factor *= step(0.0001, n_dot_l);
        diffuse = light.color * material.diffuse * n_dot_l;
        specular = light.color * material.specular * spec_factor;
    }

    let lit = material.emissive + light.ambient + diffuse;
    let color = lit.rgb * base_color.rgb + specular.rgb;
    return vec4<f32>(color, base_color.a);
}
"#;
