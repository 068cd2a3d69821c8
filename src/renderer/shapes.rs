//! Shape generation for tunnel primitives
//!
//! The whole scene is rebuilt as one flat triangle list every frame: each
//! solid's local quad/triangle template is expanded and transformed on the
//! CPU by the composed model matrix (tunnel, then segment, then solid, each
//! applying translation and Z/X/Y rotation in that fixed order). One vertex
//! buffer, one draw call.

use glam::{Mat4, Vec3};

use super::vertex::{Vertex, colors};
use crate::sim::{Obstacle, Solid, SolidKind, Tunnel};

/// Triangulation of a quad's four corners
const QUAD_INDICES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Vertices emitted per cuboid (6 faces x 2 triangles)
pub const CUBOID_VERTEX_COUNT: usize = 36;
/// Vertices emitted per pyramid (4 triangular faces)
pub const PYRAMID_VERTEX_COUNT: usize = 12;

fn push_transformed(out: &mut Vec<Vertex>, transform: &Mat4, point: Vec3, color: [f32; 4]) {
    let p = transform.transform_point3(point);
    out.push(Vertex::new([p.x, p.y, p.z], color));
}

/// Expand a cuboid of the given full extents, centered on the local origin,
/// with one flat color per face
fn push_cuboid(out: &mut Vec<Vertex>, transform: &Mat4, size: Vec3) {
    let h = size / 2.0;
    // Corner quads in front/back/top/bottom/right/left order
    let faces: [[Vec3; 4]; 6] = [
        [
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(-h.x, h.y, h.z),
        ],
        [
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(h.x, -h.y, -h.z),
        ],
        [
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, h.y, -h.z),
        ],
        [
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(-h.x, -h.y, h.z),
        ],
        [
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
        ],
        [
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(-h.x, h.y, -h.z),
        ],
    ];

    for (quad, color) in faces.iter().zip(colors::CUBOID_FACES) {
        for &i in &QUAD_INDICES {
            push_transformed(out, transform, quad[i], color);
        }
    }
}

/// Expand a pyramid with a square base of side `base` on the local y=0 plane
/// and its apex at +y `height`
fn push_pyramid(out: &mut Vec<Vertex>, transform: &Mat4, base: f32, height: f32) {
    let b = base / 2.0;
    let apex = Vec3::new(0.0, height, 0.0);
    let corners = [
        Vec3::new(-b, 0.0, b),
        Vec3::new(b, 0.0, b),
        Vec3::new(b, 0.0, -b),
        Vec3::new(-b, 0.0, -b),
    ];

    for i in 0..4 {
        let face = [corners[i], corners[(i + 1) % 4], apex];
        for (point, color) in face.iter().zip(colors::SPIKE_FACE) {
            push_transformed(out, transform, *point, color);
        }
    }
}

/// Emit one solid under its parent's composed transform
pub fn push_solid(out: &mut Vec<Vertex>, parent: &Mat4, solid: &Solid) {
    let transform = *parent * solid.model_matrix();
    match solid.kind {
        SolidKind::Cuboid => push_cuboid(out, &transform, solid.size),
        SolidKind::Pyramid => push_pyramid(out, &transform, solid.size.x, solid.size.y),
    }
}

/// Build the full tunnel triangle list in world space, segments in travel
/// order. Pure: identical tunnel state yields identical vertices.
pub fn tunnel_vertices(tunnel: &Tunnel) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(
        tunnel.segment_count() * (crate::sim::FACE_COUNT + 1) * CUBOID_VERTEX_COUNT,
    );
    let root = tunnel.model_matrix();

    for segment in tunnel.segments() {
        let frame = root * segment.model_matrix();
        for wall in segment.walls() {
            push_solid(&mut out, &frame, wall);
        }
        match segment.obstacle() {
            Obstacle::None => {}
            Obstacle::Pillar(pillar) => push_solid(&mut out, &frame, pillar),
            Obstacle::Spikes(spikes) => {
                for spike in spikes {
                    push_solid(&mut out, &frame, spike);
                }
            }
        }
    }

    out
}
