use super::Renderer;
use crate::scene::Scene;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, scene);

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
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, scene: &Scene) {
    // Border strips never move; only rewrite when something changed
    if renderer.last_scene.as_ref() == Some(scene) {
        return;
    }

    renderer
        .queue
        .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(&scene.rects));
    renderer
        .queue
        .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[scene.ball]));
    renderer.last_scene = Some(scene.clone());
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.field.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (border, paddles)
    let rect = &renderer.meshes.0;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..renderer.rect_count);

    // Circle (Ball)
    let circle = &renderer.meshes.1;
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..1);
}
