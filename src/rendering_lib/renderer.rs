// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::mesh::{self, Mesh};
use super::shader::WGSL_SHADER_SOURCE;
use super::vertex::Vertex;
use crate::engine_lib::camera::{scene_rotation, Camera};
use crate::engine_lib::scene_types::{Scene, Shape, TechniqueToggles};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Fixed directional light, slightly above and behind the viewer.
const LIGHT_DIRECTION: Vec3 = Vec3::new(2.0, 2.0, 5.0);
const AMBIENT: f32 = 0.3;

// Dynamic-offset slots are spaced by the WebGPU default uniform alignment.
const OBJECT_UNIFORM_STRIDE: u64 = 256;
const MAX_OBJECTS: usize = 16;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FrameUniform {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    ambient: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// One pipeline per rasterizer configuration. wgpu bakes cull mode and
/// depth state into the pipeline, so switching technique is a per-frame
/// pipeline selection rather than state toggling.
struct TechniquePipelines {
    /// No culling, depth test passes always: None and PainterAlgorithm.
    plain: wgpu::RenderPipeline,
    /// Back faces culled, depth test passes always.
    culled: wgpu::RenderPipeline,
    /// Depth compare Less with depth writes.
    depth_tested: wgpu::RenderPipeline,
}

impl TechniquePipelines {
    fn select(&self, toggles: TechniqueToggles) -> &wgpu::RenderPipeline {
        if toggles.cull_back_faces {
            &self.culled
        } else if toggles.depth_test {
            &self.depth_tested
        } else {
            &self.plain
        }
    }
}

pub struct Renderer {
    pipelines: TechniquePipelines,
    depth_view: wgpu::TextureView,

    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_uniform_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,

    cube: GpuMesh,
    sphere: GpuMesh,
    torus: GpuMesh,
    cone: GpuMesh,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        initial_width: u32,
        initial_height: u32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Renderer Shader Module"),
            source: wgpu::ShaderSource::Wgsl(WGSL_SHADER_SOURCE.into()),
        });

        let frame_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform Buffer"),
            size: std::mem::size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let object_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: OBJECT_UNIFORM_STRIDE * MAX_OBJECTS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("frame_bind_group_layout"),
            });

        let object_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<ObjectUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
                label: Some("object_bind_group_layout"),
            });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        let object_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &object_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &object_uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ObjectUniform>() as u64),
                }),
            }],
            label: Some("object_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Renderer Pipeline Layout"),
            bind_group_layouts: &[&frame_bind_group_layout, &object_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipelines = TechniquePipelines {
            plain: create_pipeline(
                device,
                &pipeline_layout,
                &shader_module,
                surface_format,
                "Plain Pipeline",
                None,
                wgpu::CompareFunction::Always,
                false,
            ),
            culled: create_pipeline(
                device,
                &pipeline_layout,
                &shader_module,
                surface_format,
                "Back-Face Culling Pipeline",
                Some(wgpu::Face::Back),
                wgpu::CompareFunction::Always,
                false,
            ),
            depth_tested: create_pipeline(
                device,
                &pipeline_layout,
                &shader_module,
                surface_format,
                "Z-Buffer Pipeline",
                None,
                wgpu::CompareFunction::Less,
                true,
            ),
        };

        let depth_view = create_depth_texture(device, initial_width, initial_height);

        Self {
            pipelines,
            depth_view,
            frame_uniform_buffer,
            frame_bind_group,
            object_uniform_buffer,
            object_bind_group,
            cube: GpuMesh::upload(device, &mesh::for_shape(Shape::Cube), "Cube Mesh"),
            sphere: GpuMesh::upload(device, &mesh::for_shape(Shape::Sphere), "Sphere Mesh"),
            torus: GpuMesh::upload(device, &mesh::for_shape(Shape::Torus), "Torus Mesh"),
            cone: GpuMesh::upload(device, &mesh::for_shape(Shape::Cone), "Cone Mesh"),
        }
    }

    fn mesh_for(&self, shape: Shape) -> &GpuMesh {
        match shape {
            Shape::Cube => &self.cube,
            Shape::Sphere => &self.sphere,
            Shape::Torus => &self.torus,
            Shape::Cone => &self.cone,
        }
    }

    /// Recreates the depth buffer for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = create_depth_texture(device, width, height);
    }

    pub fn render_scene(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        scene: &Scene,
        camera: &Camera,
        width: u32,
        height: u32,
        clear_color: wgpu::Color,
    ) {
        let frame_uniform = FrameUniform {
            view_proj: camera.view_projection(width, height).to_cols_array_2d(),
            light_dir: LIGHT_DIRECTION.normalize().extend(0.0).to_array(),
            ambient: [AMBIENT, AMBIENT, AMBIENT, 1.0],
        };
        queue.write_buffer(
            &self.frame_uniform_buffer,
            0,
            bytemuck::bytes_of(&frame_uniform),
        );

        if scene.objects.len() > MAX_OBJECTS {
            log::warn!(
                "scene has {} objects, drawing only the first {}",
                scene.objects.len(),
                MAX_OBJECTS
            );
        }
        let rotation = scene_rotation(scene.rotation_deg);
        let objects = &scene.objects[..scene.objects.len().min(MAX_OBJECTS)];
        for (i, object) in objects.iter().enumerate() {
            let object_uniform = ObjectUniform {
                model: (rotation * Mat4::from_translation(object.position)).to_cols_array_2d(),
                color: object.color,
            };
            queue.write_buffer(
                &self.object_uniform_buffer,
                i as u64 * OBJECT_UNIFORM_STRIDE,
                bytemuck::bytes_of(&object_uniform),
            );
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            // The depth buffer is always attached and cleared; whether it
            // is consulted depends on the selected pipeline.
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(self.pipelines.select(scene.mode.toggles()));
        render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
        for (i, object) in objects.iter().enumerate() {
            let offset = (i as u64 * OBJECT_UNIFORM_STRIDE) as wgpu::DynamicOffset;
            render_pass.set_bind_group(1, &self.object_bind_group, &[offset]);
            let gpu_mesh = self.mesh_for(object.shape);
            render_pass.set_vertex_buffer(0, gpu_mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(gpu_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..gpu_mesh.index_count, 0, 0..1);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader_module: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    label: &str,
    cull_mode: Option<wgpu::Face>,
    depth_compare: wgpu::CompareFunction,
    depth_write_enabled: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader_module,
            entry_point: "vs_main",
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader_module,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
