//! Point cloud rendering - ticks the scene and draws every particle

use super::state::GPU_STATE;
use crate::bridge;
use crate::cloud::ParticleCloud;

/// Opacity of every particle; additive blending stacks overlapping dots
/// into the glow.
const PARTICLE_ALPHA: f32 = 0.9;

/// Background clear color (near-black blue).
const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.02,
    a: 1.0,
};

/// Vertex structure for rendering colored particles
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Build two triangles per particle. The camera never rotates (it only
/// slides along +z), so axis-aligned world-space quads are already
/// screen-facing billboards.
pub fn build_cloud_vertices(cloud: &ParticleCloud, point_size: f32) -> Vec<Vertex> {
    let h = point_size * 0.5;
    let mut vertices = Vec::with_capacity(cloud.count * 6);

    for (pos, col) in cloud
        .positions
        .chunks_exact(3)
        .zip(cloud.colors.chunks_exact(3))
    {
        let (x, y, z) = (pos[0], pos[1], pos[2]);
        let color = [col[0], col[1], col[2], PARTICLE_ALPHA];

        vertices.push(Vertex { position: [x - h, y - h, z], color });
        vertices.push(Vertex { position: [x + h, y - h, z], color });
        vertices.push(Vertex { position: [x + h, y + h, z], color });

        vertices.push(Vertex { position: [x - h, y - h, z], color });
        vertices.push(Vertex { position: [x + h, y + h, z], color });
        vertices.push(Vertex { position: [x - h, y + h, z], color });
    }

    vertices
}

/// Render one frame: advance the animator, upload positions/colors and the
/// camera matrix, draw.
pub fn render_frame() {
    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let frame_data = bridge::with_scene(|scene| {
            scene.tick();
            (
                build_cloud_vertices(&scene.cloud, state.point_size),
                scene.camera.view_proj(state.aspect()),
            )
        });
        let (vertices, view_proj) = match frame_data {
            Some(d) => d,
            None => return,
        };

        // Get surface and render
        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") }
        );

        state.queue.write_buffer(
            &state.camera_buffer,
            0,
            bytemuck::cast_slice(&view_proj.to_cols_array()),
        );

        if !vertices.is_empty() {
            state.queue.write_buffer(
                &state.vertex_buffer,
                0,
                bytemuck::cast_slice(&vertices),
            );
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Cloud Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_bind_group(0, &state.camera_bind_group, &[]);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
