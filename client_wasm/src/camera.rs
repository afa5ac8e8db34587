//! Camera for the play field
//!
//! Simple 2D orthographic camera with the origin at the top-left corner and
//! y growing downwards, matching the simulation's coordinates.

use glam::{Mat4, Vec3, Vec4};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera covering `width` x `height` field units
    pub fn orthographic(width: f32, height: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);

        // bottom = height, top = 0 flips y so that +y points down the screen
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, 0.1, 100.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Field point to normalized device coordinates
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let clip = self.view_proj() * Vec4::new(x, y, 0.0, 1.0);
        (clip.x / clip.w, clip.y / clip.w)
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
