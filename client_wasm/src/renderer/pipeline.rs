use super::shaders::PONG_SHADER;
use crate::mesh::Vertex;
use crate::scene::InstanceData;
use wgpu::*;

const VERTEX_ATTRIBUTES: [VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
// transform, tint
const INSTANCE_ATTRIBUTES: [VertexAttribute; 2] =
    wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

// Size of the WGSL `Camera` struct; the uniform buffer is padded past it
const CAMERA_BINDING_SIZE: u64 = 64;

/// Flat-colour pipeline for every shape on the field
pub struct FieldPipeline {
    pub pipeline: RenderPipeline,
    camera_layout: BindGroupLayout,
}

impl FieldPipeline {
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Field Camera Layout"),
            entries: &[BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::VERTEX,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: BufferSize::new(CAMERA_BINDING_SIZE),
                },
                count: None,
            }],
        });

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Field Shader"),
            source: ShaderSource::Wgsl(PONG_SHADER.into()),
        });

        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Field Pipeline Layout"),
            bind_group_layouts: &[&camera_layout],
            push_constant_ranges: &[],
        });

        let buffers = [
            VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
                step_mode: VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            },
            VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as BufferAddress,
                step_mode: VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            },
        ];

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Field Pipeline"),
            layout: Some(&layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState::from(format))],
                compilation_options: Default::default(),
            }),
            // The y-down camera mirrors winding, so nothing is culled
            primitive: PrimitiveState::default(),
            depth_stencil: None,
            multisample: MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_layout,
        }
    }

    /// Bind group exposing the camera uniform to the vertex stage
    pub fn bind_camera(&self, device: &Device, camera: &Buffer) -> BindGroup {
        device.create_bind_group(&BindGroupDescriptor {
            label: Some("Field Camera Bind Group"),
            layout: &self.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera.as_entire_binding(),
            }],
        })
    }
}
