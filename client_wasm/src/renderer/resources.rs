use crate::camera::{Camera, CameraUniform};
use crate::scene::{InstanceData, RECT_INSTANCES};
use wgpu::util::DeviceExt;
use wgpu::*;

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub ball: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_size * RECT_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let ball = device.create_buffer(&BufferDescriptor {
        label: Some("Ball Instance Buffer"),
        size: instance_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        ball,
    }
}
