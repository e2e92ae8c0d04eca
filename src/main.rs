use std::sync::Arc;

use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use ugraf::controller::{InputState, SceneController};
use ugraf::model::{Camera, Mesh, MeshBuffer};
use ugraf::view::{render, GpuContext, TransformUniform};
use ugraf::logging;

struct App {
    // Core GPU resources
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    window: Arc<Window>,

    // Rendering state
    pipeline: wgpu::RenderPipeline,
    mesh: MeshBuffer,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    transform_buffer: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,

    // Scene state
    camera: Camera,
    scene: SceneController,
    input_state: InputState,

    // Frame timing
    last_frame_time: std::time::Instant,
}

impl App {
    async fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone()).unwrap();
        let gpu = GpuContext::new(&instance, surface, size.width, size.height).await;

        let device = gpu.device.clone();
        let queue = gpu.queue.clone();
        let config = gpu.config.clone();

        let depth_format = wgpu::TextureFormat::Depth32Float;
        let (depth_texture, depth_view) =
            render::create_depth_texture(&device, size.width, size.height);

        // Upload the static U mesh once
        let mesh = Mesh::u_shape().upload(&device);

        let transform_res = render::create_transform_resources(&device);
        let pipeline = render::create_mesh_pipeline(
            &device,
            config.format,
            &transform_res.bind_group_layout,
            depth_format,
        );

        let camera = Camera::default();
        let scene = SceneController::new();
        let input_state = InputState::new();

        tracing::info!("scene loaded, mesh renderable");

        Self {
            surface: gpu.surface,
            device,
            queue,
            config,
            size,
            window,
            pipeline,
            mesh,
            depth_texture,
            depth_view,
            transform_buffer: transform_res.transform_buffer,
            transform_bind_group: transform_res.bind_group,
            camera,
            scene,
            input_state,
            last_frame_time: std::time::Instant::now(),
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    match state {
                        ElementState::Pressed => self.input_state.key_down(*code),
                        ElementState::Released => self.input_state.key_up(*code),
                    }
                }
                true
            }
            WindowEvent::Focused(false) => {
                // Keys released while unfocused never reach us
                self.input_state.clear_keys();
                true
            }
            _ => false,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let (depth_texture, depth_view) =
                render::create_depth_texture(&self.device, new_size.width, new_size.height);
            self.depth_texture = depth_texture;
            self.depth_view = depth_view;

            tracing::debug!("viewport resized to {}x{}", new_size.width, new_size.height);
        }
    }

    fn update(&mut self, dt: f32) {
        if let Some(pos) = self.scene.update(dt, &self.input_state) {
            println!("Posición actual: ({}, {}, {})", pos.x, pos.y, pos.z);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Matrices are a pure function of the pose and viewport size
        let transforms = TransformUniform::compose(
            self.scene.position(),
            &self.camera,
            self.config.width,
            self.config.height,
        );
        self.queue
            .write_buffer(&self.transform_buffer, 0, bytemuck::bytes_of(&transforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.transform_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn main() {
    logging::init();

    let event_loop = EventLoop::new().unwrap();
    let window_attributes = Window::default_attributes()
        .with_title("Grafica U en 3D")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 600));
    let window = event_loop.create_window(window_attributes).unwrap();
    let window = Arc::new(window);

    let mut app = pollster::block_on(App::new(window.clone()));

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == app.window.id() => {
                    if !app.input(event) {
                        match event {
                            WindowEvent::CloseRequested => {
                                tracing::info!("window closed, shutting down");
                                elwt.exit();
                            }
                            WindowEvent::Resized(physical_size) => {
                                app.resize(*physical_size);
                            }
                            WindowEvent::RedrawRequested => {
                                let now = std::time::Instant::now();
                                let dt = (now - app.last_frame_time).as_secs_f32();
                                app.last_frame_time = now;

                                app.update(dt);

                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => tracing::warn!("surface error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.window.request_redraw();
                }
                _ => {}
            }
        })
        .unwrap();
}
