//! Vertex types for textured 2D quads

use bytemuck::{Pod, Zeroable};

/// Textured 2D vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            tex_coord: [u, v],
        }
    }
}

/// Sub-rectangle of a texture in UV space (v grows downward in the image)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

impl UvRect {
    /// The whole texture
    pub const FULL: UvRect = UvRect {
        u: 0.0,
        v: 0.0,
        width: 1.0,
        height: 1.0,
    };
}

/// Two triangles covering the unit quad centered on the origin
pub fn unit_quad(uv: UvRect) -> [Vertex; 6] {
    let UvRect {
        u,
        v,
        width: w,
        height: h,
    } = uv;
    [
        Vertex::new(-0.5, -0.5, u, v + h),
        Vertex::new(0.5, -0.5, u + w, v + h),
        Vertex::new(0.5, 0.5, u + w, v),
        Vertex::new(-0.5, -0.5, u, v + h),
        Vertex::new(0.5, 0.5, u + w, v),
        Vertex::new(-0.5, 0.5, u, v),
    ]
}
