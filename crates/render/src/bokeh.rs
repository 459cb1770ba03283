//! Depth-of-field post-processing.
//!
//! The scene pass renders into an offscreen color and depth pair owned by
//! this module; the bokeh pass then reads both and writes the blurred
//! result to the swapchain. Per pixel, the depth is linearized back to a
//! view-space distance and the offset from the focus distance becomes a
//! circle of confusion that scales a fixed ring of 41 color taps.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::pipeline::DEPTH_FORMAT;

/// Focus distance of the lens in world units.
pub const FOCUS: f32 = 2.5;
/// Aperture scale mapping defocus to blur radius.
pub const APERTURE: f32 = 0.025;
/// Upper bound on the blur offset in UV units.
pub const MAX_BLUR: f32 = 0.03;

/// Offscreen color format. Float, so blending and averaging stay linear.
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Uniform parameters of the blur.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct BokehGpu {
    focus: f32,
    aperture: f32,
    max_blur: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    _pad: [f32; 2],
}

impl BokehGpu {
    fn new(config: &wgpu::SurfaceConfiguration, znear: f32, zfar: f32) -> Self {
        Self {
            focus: FOCUS,
            aperture: APERTURE,
            max_blur: MAX_BLUR,
            aspect: config.width.max(1) as f32 / config.height.max(1) as f32,
            znear,
            zfar,
            _pad: [0.0; 2],
        }
    }
}

/// The bokeh pass plus the offscreen targets the scene renders into.
pub struct BokehPass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    scene_color: wgpu::TextureView,
    scene_depth: wgpu::TextureView,
    znear: f32,
    zfar: f32,
}

impl BokehPass {
    /// Build the pass, its offscreen targets and its pipeline.
    ///
    /// `znear` and `zfar` must match the camera so depth linearization
    /// inverts the projection exactly.
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let shader_src = include_str!("bokeh.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bokeh Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bokeh Bind Group Layout"),
            entries: &[
                // Scene color
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // Scene color sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                // Scene depth, read with plain loads
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // Blur parameters
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Bokeh Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Bokeh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_fullscreen",
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_bokeh",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Bokeh Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Bokeh Params"),
            contents: bytemuck::cast_slice(&[BokehGpu::new(config, znear, zfar)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let (scene_color, scene_depth) = create_targets(device, config);
        let bind_group = create_bind_group(
            device,
            &bind_group_layout,
            &scene_color,
            &sampler,
            &scene_depth,
            &uniform_buffer,
        );

        Self {
            pipeline,
            bind_group_layout,
            bind_group,
            uniform_buffer,
            sampler,
            scene_color,
            scene_depth,
            znear,
            zfar,
        }
    }

    /// Color attachment for the scene pass.
    pub fn scene_color(&self) -> &wgpu::TextureView {
        &self.scene_color
    }

    /// Depth attachment for the scene pass.
    pub fn scene_depth(&self) -> &wgpu::TextureView {
        &self.scene_depth
    }

    /// Recreate the offscreen targets for a new surface size.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        config: &wgpu::SurfaceConfiguration,
    ) {
        let (scene_color, scene_depth) = create_targets(device, config);
        self.scene_color = scene_color;
        self.scene_depth = scene_depth;
        self.bind_group = create_bind_group(
            device,
            &self.bind_group_layout,
            &self.scene_color,
            &self.sampler,
            &self.scene_depth,
            &self.uniform_buffer,
        );
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[BokehGpu::new(config, self.znear, self.zfar)]),
        );
    }

    /// Blur the offscreen scene into `destination`.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, destination: &wgpu::TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Bokeh Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: destination,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}

fn create_targets(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> (wgpu::TextureView, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: config.width.max(1),
        height: config.height.max(1),
        depth_or_array_layers: 1,
    };
    let color = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Scene Color"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SCENE_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let depth = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Scene Depth"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    (
        color.create_view(&wgpu::TextureViewDescriptor::default()),
        depth.create_view(&wgpu::TextureViewDescriptor::default()),
    )
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    scene_color: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    scene_depth: &wgpu::TextureView,
    uniform_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Bokeh Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(scene_color),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(scene_depth),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: uniform_buffer.as_entire_binding(),
            },
        ],
    })
}
