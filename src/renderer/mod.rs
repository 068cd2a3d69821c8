//! Rendering module
//!
//! Everything GPU-facing lives here. The simulation hands over a tunnel
//! snapshot plus an eye/target pair; this module turns them into a single
//! triangle list and one draw call per frame.

pub mod camera;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::RenderState;
pub use shapes::tunnel_vertices;
pub use vertex::Vertex;
