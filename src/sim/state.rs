//! Game state and scoring bookkeeping
//!
//! Everything the per-frame loop needs lives here: the tunnel, the camera
//! eye/target, and the score/life/speed counters.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::tunnel::Tunnel;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active flight
    Playing,
    /// Game is paused
    Paused,
    /// Life counter hit zero
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG threaded through all procedural generation
    pub rng: Pcg32,
    /// Score, clamped at zero
    pub score: f32,
    /// Remaining life; drains while colliding
    pub life: f32,
    /// Forward travel speed (units/s); negative while reversed
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// The endless tunnel
    pub tunnel: Tunnel,
    /// Camera position, advancing along -z
    pub eye: Vec3,
    /// Camera look-at target
    pub target: Vec3,
}

impl GameState {
    /// Create and populate a run with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let origin = Vec3::ZERO;
        let tunnel = Tunnel::new(origin, TUNNEL_RADIUS, TUNNEL_LENGTH, SEGMENT_COUNT, &mut rng);

        // Fly low in the tube, looking down the pipe just above the floor
        let eye = origin + Vec3::new(0.0, -0.8 * TUNNEL_RADIUS, 0.0);
        let target = origin + Vec3::new(0.0, -TUNNEL_RADIUS + 0.1, -TUNNEL_LENGTH / 3.0);

        Self {
            seed,
            rng,
            score: 0.0,
            life: START_LIFE,
            speed: START_SPEED,
            time_ticks: 0,
            phase: GamePhase::Playing,
            tunnel,
            eye,
            target,
        }
    }

    /// HUD difficulty level derived from the current speed
    pub fn level(&self) -> u32 {
        (self.speed.abs() / SPEED_PER_LEVEL).round() as u32
    }
}
