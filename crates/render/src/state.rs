//! The renderer's aggregate state and per-frame driving logic.
//!
//! [`State`] owns the window, the GPU handles, the meshes and buffers, the
//! bokeh pass and the simulation itself. The event loop calls `input`,
//! `update` and `render` on it; nothing else holds GPU state.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wgpu::util::DeviceExt;
use winit::event::WindowEvent;
use winit::window::Window;

use motion::{BodyField, Look, Updatable, BODY_COUNT};

use crate::bokeh::{BokehPass, SCENE_FORMAT};
use crate::camera::{Camera, CameraState};
use crate::gpu_types::{BodyGpu, CameraGpu, LightsGpu};
use crate::mesh::{self, BACKGROUND_RADIUS, BODY_RADIUS, BODY_SUBDIVISIONS};
use crate::pipeline::{self, ScenePipelines};
use crate::ramp;

pub struct State {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: ScenePipelines,
    background_buffer: wgpu::Buffer,
    background_count: u32,
    toon_mesh_buffer: wgpu::Buffer,
    toon_mesh_count: u32,
    glass_mesh_buffer: wgpu::Buffer,
    glass_mesh_count: u32,
    toon_instance_buffer: wgpu::Buffer,
    glass_instance_buffer: wgpu::Buffer,
    toon_instances: Vec<BodyGpu>,
    glass_instances: Vec<BodyGpu>,
    camera_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    camera: Camera,
    camera_state: CameraState,
    bokeh: BokehPass,
    field: BodyField,
    rng: StdRng,
    started: Instant,
}

impl State {
    pub async fn new(window: Arc<Window>, seed: Option<u64>) -> Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = unsafe {
            instance.create_surface_unsafe(wgpu::SurfaceTargetUnsafe::from_window(&*window)?)?
        };
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to get adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Orrery Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let camera = Camera::new(config.width, config.height);
        let camera_state = CameraState::new();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraGpu::from(&camera)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lights Buffer"),
            contents: bytemuck::cast_slice(&[LightsGpu::at(0.0)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let background = mesh::background_sphere(BACKGROUND_RADIUS);
        let background_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Background Vertices"),
            contents: bytemuck::cast_slice(&background),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let toon_mesh = mesh::icosphere(BODY_RADIUS, BODY_SUBDIVISIONS);
        let toon_mesh_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Toon Mesh"),
            contents: bytemuck::cast_slice(&toon_mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let glass_mesh = mesh::icosahedron(BODY_RADIUS);
        let glass_mesh_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Glass Mesh"),
            contents: bytemuck::cast_slice(&glass_mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let toon_instance_buffer = pipeline::create_instance_buffer(&device, "Toon Instances");
        let glass_instance_buffer = pipeline::create_instance_buffer(&device, "Glass Instances");

        let ramp_view = ramp::load_tone_ramp(&device, &queue);
        let ramp_sampler = ramp::create_ramp_sampler(&device);

        let bind_group_layout = pipeline::create_bind_group_layout(&device);
        let bind_group = pipeline::create_bind_group(
            &device,
            &bind_group_layout,
            &camera_buffer,
            &lights_buffer,
            &toon_instance_buffer,
            &glass_instance_buffer,
            &ramp_view,
            &ramp_sampler,
        );
        let pipelines = pipeline::create_scene_pipelines(&device, &bind_group_layout, SCENE_FORMAT);

        let bokeh = BokehPass::new(&device, &config, camera.znear, camera.zfar);

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field = BodyField::generate(BODY_COUNT, &mut rng);
        tracing::info!("generated {} bodies (seed: {seed:?})", field.bodies.len());

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipelines,
            background_buffer,
            background_count: background.len() as u32,
            toon_mesh_buffer,
            toon_mesh_count: toon_mesh.len() as u32,
            glass_mesh_buffer,
            glass_mesh_count: glass_mesh.len() as u32,
            toon_instance_buffer,
            glass_instance_buffer,
            toon_instances: Vec::with_capacity(BODY_COUNT),
            glass_instances: Vec::with_capacity(BODY_COUNT),
            camera_buffer,
            lights_buffer,
            bind_group,
            camera,
            camera_state,
            bokeh,
            field,
            rng,
            started: Instant::now(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.camera.resize(new_size.width, new_size.height);
            self.surface.configure(&self.device, &self.config);
            self.bokeh.resize(&self.device, &self.queue, &self.config);
        }
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key:
                            winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::KeyR),
                        state: winit::event::ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.field.respawn(&mut self.rng);
                tracing::info!("rescattered {} bodies", self.field.bodies.len());
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == winit::event::MouseButton::Left {
                    self.camera_state.mouse_pressed =
                        *state == winit::event::ElementState::Pressed;
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.camera_state.mouse_pressed {
                    let dx = (position.x - self.camera_state.last_mouse_pos.x) as f32;
                    let dy = (position.y - self.camera_state.last_mouse_pos.y) as f32;
                    self.camera.orbit(dx, dy);
                }
                self.camera_state.last_mouse_pos = *position;
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => *y * 0.1,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.02,
                };
                self.camera.zoom(scroll);
                true
            }
            _ => false,
        }
    }

    /// One simulation step: advance the scene clock, move everything, and
    /// upload the per-frame buffers.
    pub fn update(&mut self) {
        let t = self.started.elapsed().as_secs_f32() * 1000.0;
        self.field.update(t);

        self.toon_instances.clear();
        self.glass_instances.clear();
        for body in &self.field.bodies {
            let instance = BodyGpu::from_body(body, self.field.rotation);
            match body.look {
                Look::Toon { .. } => self.toon_instances.push(instance),
                Look::Glass => self.glass_instances.push(instance),
            }
        }
        if !self.toon_instances.is_empty() {
            self.queue.write_buffer(
                &self.toon_instance_buffer,
                0,
                bytemuck::cast_slice(&self.toon_instances),
            );
        }
        if !self.glass_instances.is_empty() {
            self.queue.write_buffer(
                &self.glass_instance_buffer,
                0,
                bytemuck::cast_slice(&self.glass_instances),
            );
        }
        self.queue
            .write_buffer(&self.lights_buffer, 0, bytemuck::cast_slice(&[LightsGpu::at(t)]));
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraGpu::from(&self.camera)]),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.bokeh.scene_color(),
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.bokeh.scene_depth(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_pipeline(&self.pipelines.background);
            rpass.set_vertex_buffer(0, self.background_buffer.slice(..));
            rpass.draw(0..self.background_count, 0..1);

            rpass.set_pipeline(&self.pipelines.toon);
            rpass.set_vertex_buffer(0, self.toon_mesh_buffer.slice(..));
            rpass.draw(0..self.toon_mesh_count, 0..self.toon_instances.len() as u32);

            // Transparent bodies last, over everything opaque.
            rpass.set_pipeline(&self.pipelines.glass);
            rpass.set_vertex_buffer(0, self.glass_mesh_buffer.slice(..));
            rpass.draw(0..self.glass_mesh_count, 0..self.glass_instances.len() as u32);
        }
        self.bokeh.render(&mut encoder, &view);

        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}
