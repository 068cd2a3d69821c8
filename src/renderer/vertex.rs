//! Vertex types for 3D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 3D vertex with position and flat color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const PURPLE: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// One flat color per cuboid face, in front/back/top/bottom/right/left
    /// order
    pub const CUBOID_FACES: [[f32; 4]; 6] = [YELLOW, RED, WHITE, GREEN, BLUE, PURPLE];

    /// Per-vertex colors for each spike face (base, base, apex): red edges
    /// fading to a black apex
    pub const SPIKE_FACE: [[f32; 4]; 3] = [RED, RED, BLACK];

    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
