use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{pixel_to_ndc, Viewport};
use crate::render::{RenderCtx, RenderTarget};

use super::shader::{check_wgsl, ShaderStage};

const VS_SOURCE: &str = include_str!("shaders/line_vs.wgsl");
const FS_SOURCE: &str = include_str!("shaders/line_fs.wgsl");

/// Line-segment renderer.
///
/// Geometry is provided as pixel-unit positions, converted to NDC in the
/// vertex shader using the projection uniform. The segment is fixed at
/// construction and uploaded to the GPU once, on first render.
pub struct LineRenderer {
    segment: [LineVertex; 2],

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    projection_ubo: Option<wgpu::Buffer>,
    uploaded_viewport: Option<Viewport>,

    segment_vbo: Option<wgpu::Buffer>,

    stages_rejected: bool,
}

impl LineRenderer {
    pub fn new(segment: [LineVertex; 2]) -> Self {
        Self {
            segment,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            projection_ubo: None,
            uploaded_viewport: None,
            segment_vbo: None,
            stages_rejected: false,
        }
    }

    /// Records one line-list draw over the fixed segment.
    ///
    /// If the stage sources were rejected there is no pipeline and the call
    /// draws nothing; the frame loop is unaffected.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        self.write_projection_uniform(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(segment_vbo) = self.segment_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("strake line pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, segment_vbo.slice(..));
        rpass.draw(0..self.segment.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.stages_rejected {
            return;
        }
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let vs = check_wgsl(VS_SOURCE, ShaderStage::Vertex, "vs_main");
        if !vs.ok {
            log::error!("line vertex stage rejected: {}", vs.log);
        }
        let fs = check_wgsl(FS_SOURCE, ShaderStage::Fragment, "fs_main");
        if !fs.ok {
            log::error!("line fragment stage rejected: {}", fs.log);
        }
        if !(vs.ok && fs.ok) {
            // Keep running without a pipeline; draws become no-ops.
            self.stages_rejected = true;
            return;
        }

        let vs_module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("strake line vs"),
            source: wgpu::ShaderSource::Wgsl(VS_SOURCE.into()),
        });
        let fs_module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("strake line fs"),
            source: wgpu::ShaderSource::Wgsl(FS_SOURCE.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("strake line bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(
                                std::num::NonZeroU64::new(
                                    std::mem::size_of::<ProjectionUniform>() as u64,
                                )
                                .unwrap(),
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("strake line pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("strake line pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[LineVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Rebind against the fresh layout.
        self.bind_group = None;
        self.projection_ubo = None;
        self.uploaded_viewport = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.segment_vbo.is_some() {
            return;
        }

        // Upload-once geometry: no COPY_DST, the segment never changes.
        self.segment_vbo = Some(ctx.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("strake line segment vbo"),
                contents: bytemuck::cast_slice(&self.segment),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.projection_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let projection_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("strake line projection ubo"),
            size: std::mem::size_of::<ProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("strake line bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_ubo.as_entire_binding(),
            }],
        });

        self.projection_ubo = Some(projection_ubo);
        self.bind_group = Some(bind_group);
    }

    /// Rewrites the projection uniform, but only when the drawable size
    /// changed since the last upload. The first frame counts as a change.
    fn write_projection_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.projection_ubo.as_ref() else { return };
        if !ctx.viewport.is_valid() {
            return;
        }
        if self.uploaded_viewport == Some(ctx.viewport) {
            return;
        }

        let u = ProjectionUniform {
            projection: pixel_to_ndc(ctx.viewport),
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
        self.uploaded_viewport = Some(ctx.viewport);
    }
}

/// Single line vertex: 3D position in pixel units.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

impl LineVertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ProjectionUniform {
    projection: [[f32; 4]; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── vertex layout ─────────────────────────────────────────────────────

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 12);

        let layout = LineVertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn segment_bytes_are_two_vertices() {
        let segment = [
            LineVertex::new(0.0, 0.0, 0.0),
            LineVertex::new(100.0, 100.0, 0.0),
        ];
        assert_eq!(bytemuck::cast_slice::<_, u8>(&segment).len(), 24);
    }

    // ── uniform layout ────────────────────────────────────────────────────

    #[test]
    fn projection_uniform_is_one_mat4() {
        assert_eq!(std::mem::size_of::<ProjectionUniform>(), 64);
    }
}
