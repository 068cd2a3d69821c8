//! Octo Tunnel - an endless octagonal tunnel dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tunnel generation, segment recycling,
//!   collision, game state)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Tunnel dimensions
    pub const TUNNEL_RADIUS: f32 = 4.0;
    pub const TUNNEL_LENGTH: f32 = 250.0;
    pub const SEGMENT_COUNT: usize = 25;

    /// Forward travel speed (units/s) and its doubling period
    pub const START_SPEED: f32 = 30.0;
    pub const SPEED_DOUBLE_SECS: f32 = 30.0;
    /// Speed that corresponds to one HUD "level"
    pub const SPEED_PER_LEVEL: f32 = 6.0;

    /// Tunnel roll applied per rotate keypress (36 degrees)
    pub const ROLL_STEP: f32 = std::f32::consts::PI / 5.0;

    /// Recycle the nearest segment once it trails the eye by this many
    /// segment thicknesses
    pub const RECYCLE_BUFFER_SEGMENTS: f32 = 3.0;

    /// Obstacle budget at population time (fractions of segment count)
    pub const PILLAR_FRACTION: f32 = 0.05;
    pub const SPIKE_FRACTION: f32 = 0.10;
    /// Per-slot spike roll and hard cap per segment
    pub const SPIKE_SLOT_CHANCE: f64 = 5.0 / 8.0;
    pub const MAX_SPIKES_PER_SEGMENT: usize = 2;

    /// Spike travel-axis oscillation speed (units/s)
    pub const SPIKE_OSC_SPEED: f32 = 12.0;

    /// Scoring
    pub const START_LIFE: f32 = 1000.0;
    pub const SCORE_RATE: f32 = 1.6;
    pub const HIT_SCORE_DRAIN: f32 = 600.0;
    pub const HIT_LIFE_DRAIN: f32 = 60.0;

    /// Half-extent of the "eye" for proximity collision
    pub const EYE_HIT_SLACK: f32 = 0.25;

    /// Camera projection
    pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
    pub const Z_NEAR: f32 = 0.1;
    pub const Z_FAR: f32 = 200.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
