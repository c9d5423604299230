//! Window creation, event handling, and per-frame rendering.
//!
//! [`AppState`] implements winit's [`ApplicationHandler`]: `resumed` creates
//! the window and all GPU resources, `window_event` folds input and drives a
//! continuous redraw loop.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use helios_config::Config;
use helios_input::{KeyboardState, ViewerAction, camera_motion, viewer_actions};
use helios_lighting::{LightingLut, LutParams, Material};
use helios_mesh::SphereMesh;
use helios_render::{
    Camera, CameraUniform, DepthBuffer, GpuContext, LightUniform, MaterialUniform, MeshBuffer,
    ModelUniform, SPHERE_SHADER_SOURCE, ShadingUniform, SpherePipeline, SurfaceError,
    UNLIT_SHADER_SOURCE, UnlitPipeline, draw_sphere, draw_unlit, init_gpu_blocking,
    surface_sampler, upload_lighting_lut, upload_sphere,
};
use helios_shading::ShadingState;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::scene::{FpsCounter, SceneState};
use crate::textures::load_surface_maps;

/// Initial camera position, matching the scene's framing of the earth.
const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 60.0);

/// Returns [`WindowAttributes`] based on the given configuration.
fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// GPU resources for the two sphere draws.
struct SceneRenderer {
    sphere_pipeline: SpherePipeline,
    unlit_pipeline: UnlitPipeline,
    mesh: MeshBuffer,
    depth: DepthBuffer,
    camera_buffer: wgpu::Buffer,
    earth_model_buffer: wgpu::Buffer,
    sun_model_buffer: wgpu::Buffer,
    light_buffer: wgpu::Buffer,
    shading_buffer: wgpu::Buffer,
    earth_transform_bind_group: wgpu::BindGroup,
    lighting_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    sun_transform_bind_group: wgpu::BindGroup,
    sun_color_bind_group: wgpu::BindGroup,
}

fn uniform_buffer(device: &wgpu::Device, label: &str, contents: &[u8]) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

impl SceneRenderer {
    fn new(gpu: &GpuContext, config: &Config, texture_dir: &PathBuf) -> Self {
        let device = &gpu.device;

        let mesh_data = SphereMesh::generate(
            config.sphere.radius,
            config.sphere.slices.max(3),
            config.sphere.stacks.max(2),
        );
        info!(
            "Sphere mesh: {} vertices, {} indices",
            mesh_data.vertex_count(),
            mesh_data.index_count()
        );
        let mesh = upload_sphere(device, "sphere", &mesh_data);

        let material = Material {
            emissive: glam::Vec4::ZERO,
            diffuse: glam::Vec4::from_array(config.lighting.material_diffuse),
            specular: glam::Vec4::from_array(config.lighting.material_specular),
            shininess: config.lighting.shininess,
        };
        let lut = LightingLut::build(&LutParams {
            width: config.lut.width.max(1),
            height: config.lut.height.max(1),
            shininess: material.shininess,
            light_color: glam::Vec4::from_array(config.lighting.light_color),
            material_diffuse: material.diffuse,
            material_specular: material.specular,
        });
        info!(
            "Lighting LUT baked: {}x{} diffuse, {}x1 specular",
            lut.width, lut.height, lut.width
        );
        let lut_textures =
            upload_lighting_lut(device, &gpu.queue, &lut).expect("LUT upload failed");

        let maps = load_surface_maps(device, &gpu.queue, texture_dir)
            .expect("surface map upload failed");
        let sampler = surface_sampler(device);

        let sphere_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere-shader"),
            source: wgpu::ShaderSource::Wgsl(SPHERE_SHADER_SOURCE.into()),
        });
        let unlit_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("unlit-shader"),
            source: wgpu::ShaderSource::Wgsl(UNLIT_SHADER_SOURCE.into()),
        });
        let sphere_pipeline = SpherePipeline::new(device, &sphere_shader, gpu.surface_format);
        let unlit_pipeline = UnlitPipeline::new(device, &unlit_shader, gpu.surface_format);

        let depth = DepthBuffer::new(device, gpu.surface_config.width, gpu.surface_config.height);

        // Uniform buffers; frame values are written before each draw.
        let camera_buffer = uniform_buffer(
            device,
            "camera-uniform",
            bytemuck::bytes_of(&CameraUniform::new(glam::Mat4::IDENTITY, Vec3::ZERO)),
        );
        let earth_model_buffer = uniform_buffer(
            device,
            "earth-model-uniform",
            bytemuck::bytes_of(&ModelUniform::new(glam::Mat4::IDENTITY)),
        );
        let sun_model_buffer = uniform_buffer(
            device,
            "sun-model-uniform",
            bytemuck::bytes_of(&ModelUniform::new(glam::Mat4::IDENTITY)),
        );
        let light_buffer = uniform_buffer(
            device,
            "light-uniform",
            bytemuck::bytes_of(&LightUniform::new(
                Vec3::ZERO,
                glam::Vec4::from_array(config.lighting.light_color),
                glam::Vec4::from_array(config.lighting.ambient),
            )),
        );
        let material_buffer = uniform_buffer(
            device,
            "material-uniform",
            bytemuck::bytes_of(&MaterialUniform::from_material(&material)),
        );
        let shading_buffer = uniform_buffer(
            device,
            "shading-uniform",
            bytemuck::bytes_of(&ShadingUniform::from_state(&ShadingState::new())),
        );
        let sun_color_buffer = uniform_buffer(
            device,
            "sun-color-uniform",
            bytemuck::bytes_of(&[1.0f32, 1.0, 1.0, 1.0]),
        );

        let earth_transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("earth-transform-bg"),
            layout: &sphere_pipeline.transform_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: earth_model_buffer.as_entire_binding(),
                },
            ],
        });
        let lighting_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lighting-bg"),
            layout: &sphere_pipeline.lighting_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: light_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: material_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: shading_buffer.as_entire_binding(),
                },
            ],
        });
        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("texture-bg"),
            layout: &sphere_pipeline.texture_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&maps.base.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&maps.normal.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&maps.height.view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::TextureView(&lut_textures.diffuse.view),
                },
                wgpu::BindGroupEntry {
                    binding: 5,
                    resource: wgpu::BindingResource::TextureView(&lut_textures.specular.view),
                },
                wgpu::BindGroupEntry {
                    binding: 6,
                    resource: wgpu::BindingResource::Sampler(&lut_textures.sampler),
                },
            ],
        });
        let sun_transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sun-transform-bg"),
            layout: &unlit_pipeline.transform_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: sun_model_buffer.as_entire_binding(),
                },
            ],
        });
        let sun_color_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sun-color-bg"),
            layout: &unlit_pipeline.color_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: sun_color_buffer.as_entire_binding(),
            }],
        });

        Self {
            sphere_pipeline,
            unlit_pipeline,
            mesh,
            depth,
            camera_buffer,
            earth_model_buffer,
            sun_model_buffer,
            light_buffer,
            shading_buffer,
            earth_transform_bind_group,
            lighting_bind_group,
            texture_bind_group,
            sun_transform_bind_group,
            sun_color_bind_group,
        }
    }
}

/// Application state driving the window, input, and rendering.
pub struct AppState {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
    config: Config,
    texture_dir: PathBuf,
    camera: Camera,
    keyboard: KeyboardState,
    scene: SceneState,
    shading: ShadingState,
    fps: FpsCounter,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: Config, texture_dir: PathBuf) -> Self {
        let aspect = config.window.width.max(1) as f32 / config.window.height.max(1) as f32;
        Self {
            window: None,
            gpu: None,
            renderer: None,
            config,
            texture_dir,
            camera: Camera::new(CAMERA_START, aspect),
            keyboard: KeyboardState::new(),
            scene: SceneState::new(),
            shading: ShadingState::new(),
            fps: FpsCounter::new(),
            last_frame: Instant::now(),
        }
    }

    fn apply_actions(&mut self, event_loop: &ActiveEventLoop) {
        for action in viewer_actions(&self.keyboard) {
            match action {
                ViewerAction::AdvanceShadingMode => {
                    self.shading.advance_mode();
                    info!("Shading: {}", self.shading.headline());
                }
                ViewerAction::ToggleNormalMap => {
                    self.shading.toggle_normal_map();
                    info!("Shading: {}", self.shading.headline());
                }
                ViewerAction::ToggleBumpMap => {
                    self.shading.toggle_bump_map();
                    info!("Shading: {}", self.shading.headline());
                }
                ViewerAction::ResetScene => {
                    self.camera.reset();
                    self.scene.reset();
                    info!("Scene reset");
                }
                ViewerAction::Exit => {
                    info!("Exit requested");
                    event_loop.exit();
                }
            }
        }
    }

    fn update(&mut self, dt: f32) {
        self.scene.update(dt);
        let motion = camera_motion(
            &self.keyboard,
            self.config.camera.speed,
            self.config.camera.boost,
            dt,
        );
        self.camera.translate_local(motion);

        if let Some(fps) = self.fps.tick(dt) {
            info!("{fps:.1} fps | {}", self.shading.headline());
        }
    }

    fn render(&mut self) -> Result<(), SurfaceError> {
        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return Ok(());
        };

        // Per-frame uniform updates.
        let camera_uniform =
            CameraUniform::new(self.camera.view_projection(), self.camera.position);
        gpu.queue.write_buffer(
            &renderer.camera_buffer,
            0,
            bytemuck::bytes_of(&camera_uniform),
        );
        gpu.queue.write_buffer(
            &renderer.earth_model_buffer,
            0,
            bytemuck::bytes_of(&ModelUniform::new(self.scene.earth_model_matrix())),
        );
        gpu.queue.write_buffer(
            &renderer.sun_model_buffer,
            0,
            bytemuck::bytes_of(&ModelUniform::new(self.scene.sun_model_matrix())),
        );
        gpu.queue.write_buffer(
            &renderer.light_buffer,
            0,
            bytemuck::bytes_of(&LightUniform::new(
                self.scene.light_position(),
                glam::Vec4::from_array(self.config.lighting.light_color),
                glam::Vec4::from_array(self.config.lighting.ambient),
            )),
        );
        gpu.queue.write_buffer(
            &renderer.shading_buffer,
            0,
            bytemuck::bytes_of(&ShadingUniform::from_state(&self.shading)),
        );

        let frame = gpu.acquire_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(renderer.depth.attachment()),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            draw_unlit(
                &mut pass,
                &renderer.unlit_pipeline,
                &renderer.sun_transform_bind_group,
                &renderer.sun_color_bind_group,
                &renderer.mesh,
            );
            draw_sphere(
                &mut pass,
                &renderer.sphere_pipeline,
                &renderer.earth_transform_bind_group,
                &renderer.lighting_bind_group,
                &renderer.texture_bind_group,
                &renderer.mesh,
            );
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        match init_gpu_blocking(window.clone()) {
            Ok(gpu) => {
                let renderer = SceneRenderer::new(&gpu, &self.config, &self.texture_dir);
                self.renderer = Some(renderer);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        self.last_frame = Instant::now();
        self.window = Some(window);
        info!("Controls: B shading mode, N normal map, M bump map, R reset, Esc quit");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let (w, h) = (new_size.width, new_size.height);
                self.camera.set_aspect(w, h);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(w, h);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.depth = DepthBuffer::new(&gpu.device, w, h);
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                self.apply_actions(event_loop);
                self.update(dt);
                self.keyboard.end_frame();

                match self.render() {
                    Ok(()) => {}
                    Err(SurfaceError::OutOfMemory) => {
                        error!("Out of GPU memory, shutting down");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        // Lost or timed out; skip the frame and retry.
                        tracing::warn!("Frame skipped: {e}");
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Creates an event loop and runs the viewer with the given config.
///
/// Blocks until the window is closed.
pub fn run(config: Config, texture_dir: PathBuf) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = AppState::new(config, texture_dir);
    event_loop.run_app(&mut app).expect("Event loop failed");
}
