//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (segments in travel order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod segment;
pub mod solid;
pub mod state;
pub mod tick;
pub mod tunnel;

pub use collision::{eye_hits_pillar, eye_hits_spike, into_rolled_frame};
pub use segment::{FACE_ANGLE, FACE_COUNT, Obstacle, Segment, chord_length};
pub use solid::{Oscillation, Solid, SolidKind};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use tunnel::Tunnel;
