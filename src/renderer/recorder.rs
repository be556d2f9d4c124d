//! Headless renderer that records draw calls
//!
//! Keeps the commands of the most recent frame only.

use glam::Mat4;

use super::vertex::unit_quad;
use super::{Renderer, TextureHandle, UvRect, Vertex};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Quad {
        transform: Mat4,
        texture: TextureHandle,
        uv: UvRect,
        /// Expanded quad geometry, two triangles in model space
        vertices: [Vertex; 6],
    },
    Triangles {
        transform: Mat4,
        texture: TextureHandle,
        vertices: Vec<Vertex>,
    },
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Commands since the last `clear`
    pub commands: Vec<DrawCommand>,
    pub frames_presented: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of quads drawn in the current frame
    pub fn quad_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Quad { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_quad(&mut self, transform: Mat4, texture: TextureHandle, uv: UvRect) {
        self.commands.push(DrawCommand::Quad {
            transform,
            texture,
            uv,
            vertices: unit_quad(uv),
        });
    }

    fn draw_triangles(&mut self, transform: Mat4, vertices: &[Vertex], texture: TextureHandle) {
        self.commands.push(DrawCommand::Triangles {
            transform,
            texture,
            vertices: vertices.to_vec(),
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames_presented += 1;
    }
}
