//! Desktop viewer: the same field, camera, and scheduling as the web build,
//! driven by a winit event loop instead of requestAnimationFrame.

use std::time::Instant;

use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use drift_core::{
    Camera, CameraRig, FieldParams, FrameGate, LoopState, ParticleField, PointerState,
    ResizeDebouncer, SpriteUniforms, Viewport, FRAME_DIVISOR, PARTICLES_WGSL, POINT_OPACITY,
    POINT_SIZE, QUAD_CORNERS, RESIZE_QUIET_MS,
};

// Fixed seed so repeated runs show the same cloud.
const DEMO_SEED: u64 = 42;

// Opaque backdrop standing in for the page behind the web canvas.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    corner_vb: wgpu::Buffer,
    position_vb: wgpu::Buffer,
    color_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particle_count: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, field: &ParticleField) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No suitable GPU adapter found"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: caps.formats[0],
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_uniforms"),
            size: std::mem::size_of::<SpriteUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let corner_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_corners"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let position_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_positions"),
            contents: bytemuck::cast_slice(field.positions()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let color_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_colors"),
            contents: bytemuck::cast_slice(field.colors()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: 8,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        }],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 1,
                        }],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 2,
                        }],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(ADDITIVE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            corner_vb,
            position_vb,
            color_vb,
            bind_group,
            particle_count: field.len() as u32,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(
        &mut self,
        field: &ParticleField,
        camera: &Camera,
        upload_positions: bool,
    ) -> Result<(), wgpu::SurfaceError> {
        if upload_positions {
            self.queue
                .write_buffer(&self.position_vb, 0, bytemuck::cast_slice(field.positions()));
        }
        let uniforms =
            SpriteUniforms::for_frame(camera, field.model_matrix(), POINT_SIZE, POINT_OPACITY);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("field_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.corner_vb.slice(..));
            rpass.set_vertex_buffer(1, self.position_vb.slice(..));
            rpass.set_vertex_buffer(2, self.color_vb.slice(..));
            rpass.draw(0..6, 0..self.particle_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("drift field")
        .build(&event_loop)
        .expect("window");

    // The particle budget keys off logical width, matching the web build.
    let scale = window.scale_factor();
    let physical = window.inner_size();
    let logical_width = (physical.width as f64 / scale) as f32;
    let mut field = ParticleField::new(&FieldParams::for_viewport(logical_width, DEMO_SEED));
    log::info!("[field] {} particles", field.len());

    let mut rig = CameraRig::new(
        Viewport::new(physical.width as f32, physical.height as f32).aspect(),
    );
    let mut pointer = PointerState::default();
    let mut debouncer = ResizeDebouncer::new(RESIZE_QUIET_MS);
    let mut gate = FrameGate::new(FRAME_DIVISOR);
    let run = LoopState::new();
    run.begin();
    let started = Instant::now();

    // Same stance as the web build: no adapter/device means no renderer,
    // but the loop still runs.
    let mut gpu = match pollster::block_on(GpuState::new(&window, &field)) {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("gpu init error: {:?}; running without a renderer", e);
            None
        }
    };

    // Shadow as a reference so the move closure copies it instead of taking
    // the window away from the surface borrow above.
    let window = &window;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                let now_ms = started.elapsed().as_secs_f64() * 1000.0;
                debouncer.submit(
                    Viewport::new(size.width as f32, size.height as f32),
                    now_ms,
                );
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let size = window.inner_size();
                pointer = PointerState::from_client(
                    position.x as f32,
                    position.y as f32,
                    Viewport::new(size.width as f32, size.height as f32),
                );
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                run.stop();
                elwt.exit();
            }
            Event::AboutToWait => {
                if run.is_running() && gate.tick() {
                    let elapsed = started.elapsed();
                    let now_ms = elapsed.as_secs_f64() * 1000.0;
                    if let Some(viewport) = debouncer.fire(now_ms) {
                        rig.set_aspect(viewport.aspect());
                        if let Some(gpu) = &mut gpu {
                            gpu.resize(winit::dpi::PhysicalSize::new(
                                viewport.width as u32,
                                viewport.height as u32,
                            ));
                        }
                        log::info!(
                            "[resize] {}x{}",
                            viewport.width as u32,
                            viewport.height as u32
                        );
                    }

                    field.step(elapsed.as_secs_f32());
                    rig.ease_toward(pointer);

                    let upload = field.take_dirty();
                    if let Some(gpu) = &mut gpu {
                        match gpu.render(&field, &rig.camera, upload) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) => gpu.resize(window.inner_size()),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::warn!("surface error: {:?}", e),
                        }
                    }
                }
                window.request_redraw();
            }
            _ => {}
        })
        .expect("event loop run");
}
