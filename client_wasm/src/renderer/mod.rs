pub mod draw;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scene::{Scene, RECT_INSTANCES};
use game_core::Config;
use pipeline::FieldPipeline;
use resources::GameBuffers;
use web_sys::HtmlCanvasElement;
use wgpu::*;

const BALL_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub camera: Camera,

    pub field: FieldPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
    pub rect_count: u32,

    pub last_scene: Option<Scene>,
}

impl Renderer {
    /// Set up WebGPU on the canvas with a camera covering the whole field
    pub async fn new(canvas: HtmlCanvasElement, config: &Config) -> Result<Self, String> {
        let (width, height) = (canvas.width().max(1), canvas.height().max(1));

        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {:?}", e))?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .ok_or_else(|| "No WebGPU adapter available".to_string())?;

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("Pong Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| format!("Failed to create device: {:?}", e))?;

        let mut surface_config = surface
            .get_default_config(&adapter, width, height)
            .ok_or_else(|| "Canvas surface is not supported by the adapter".to_string())?;
        // Tints are written as display colours, so skip the sRGB encode
        let caps = surface.get_capabilities(&adapter);
        if let Some(linear) = caps.formats.iter().copied().find(|f| !f.is_srgb()) {
            surface_config.format = linear;
        }
        surface_config.present_mode = PresentMode::AutoVsync;
        surface.configure(&device, &surface_config);

        let camera = Camera::orthographic(config.field_width, config.field_height);
        let buffers = resources::create_buffers(&device, &camera);
        let field = FieldPipeline::new(&device, surface_config.format);
        let camera_bind_group = field.bind_camera(&device, &buffers.camera);

        let meshes = (
            create_rectangle(&device),
            create_circle(&device, BALL_SEGMENTS),
        );

        log::info!(
            "renderer ready: {}x{} canvas, {:?}",
            width,
            height,
            surface_config.format
        );

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            camera,
            field,
            camera_bind_group,
            buffers,
            meshes,
            rect_count: RECT_INSTANCES as u32,
            last_scene: None,
        })
    }

    /// Reconfigure the surface after the canvas changes size.
    /// The camera keeps covering the field, so the picture stretches.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0
            || height == 0
            || (width, height) == (self.surface_config.width, self.surface_config.height)
        {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_frame(self, scene)
    }
}
