pub mod init;
pub mod pipeline;
pub mod shaders;

use std::sync::Arc;

use glam::Mat4;
use wgpu::util::DeviceExt;
use wgpu::*;
use winit::window::Window;

use pong_core::{DrawBackend, QuadHandle, ShapeSet};

/// Per-draw transform, uploaded as four vec4 instance attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [[f32; 4]; 4],
}

/// One frame's draws, recorded through the core's backend seam and played
/// back into a single render pass.
pub struct DrawBatch {
    draws: Vec<(QuadHandle, InstanceData)>,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self { draws: Vec::new() }
    }
}

impl DrawBackend for DrawBatch {
    fn draw_quad(&mut self, shape: QuadHandle, transform: Mat4) {
        self.draws.push((
            shape,
            InstanceData {
                transform: transform.to_cols_array_2d(),
            },
        ));
    }
}

// 3 plain quads + 15 cells per board is 33; leave headroom.
const MAX_INSTANCES: usize = 64;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub pipeline: RenderPipeline,
    pub quad_vertices: Buffer,
    pub instances: Buffer,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, shapes: &ShapeSet) -> Result<Self, String> {
        let ctx = init::init_wgpu(window).await?;
        let pipeline = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        // Both quads live in one shared vertex buffer; a draw selects its
        // shape by vertex range.
        let quad_vertices = ctx.device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(shapes.vertices()),
            usage: BufferUsages::VERTEX,
        });

        let instances = ctx.device.create_buffer(&BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (MAX_INSTANCES * std::mem::size_of::<InstanceData>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline,
            quad_vertices,
            instances,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw_frame(&mut self, batch: &DrawBatch) -> Result<(), String> {
        let draws = &batch.draws[..batch.draws.len().min(MAX_INSTANCES)];
        if draws.len() < batch.draws.len() {
            log::warn!("draw batch truncated to {MAX_INSTANCES} instances");
        }

        let instance_data: Vec<InstanceData> = draws.iter().map(|(_, data)| *data).collect();
        if !instance_data.is_empty() {
            self.queue
                .write_buffer(&self.instances, 0, bytemuck::cast_slice(&instance_data));
        }

        let output = self
            .surface
            .get_current_texture()
            .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
        let view = output.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.quad_vertices.slice(..));
            pass.set_vertex_buffer(1, self.instances.slice(..));
            for (i, (shape, _)) in draws.iter().enumerate() {
                let instance = i as u32;
                pass.draw(
                    shape.first_vertex..shape.first_vertex + shape.vertex_count,
                    instance..instance + 1,
                );
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
