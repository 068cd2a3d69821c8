//! Fixed timestep simulation tick
//!
//! Advances the game deterministically: steering, camera travel, tunnel
//! recycling, collision scoring, and the periodic speed ramp.

use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::normalize_angle;

/// Speed doubles every 30 s of play (at the fixed 120 Hz timestep)
const SPEED_DOUBLE_TICKS: u64 = (SPEED_DOUBLE_SECS / SIM_DT) as u64;

/// Input commands for a single tick (one-shot flags, cleared by the caller
/// after each processed tick)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Roll the tunnel one step counter-clockwise
    pub rotate_left: bool,
    /// Roll the tunnel one step clockwise
    pub rotate_right: bool,
    /// Negate the travel speed
    pub reverse: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                return;
            }
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    if state.time_ticks.is_multiple_of(SPEED_DOUBLE_TICKS) {
        state.speed *= 2.0;
        log::info!("speed ramp: now {} units/s", state.speed);
    }

    if input.reverse {
        state.speed = -state.speed;
    }

    // Steering rolls the whole tube around the camera
    let mut roll = state.tunnel.rotation.z;
    if input.rotate_left {
        roll -= ROLL_STEP;
    }
    if input.rotate_right {
        roll += ROLL_STEP;
    }
    state.tunnel.rotation.z = normalize_angle(roll);

    // Advance the camera down the pipe
    state.eye.z -= state.speed * dt;
    state.target.z -= state.speed * dt;

    state.tunnel.tick(state.eye, dt, &mut state.rng);

    if state.tunnel.detect_collision(state.eye) {
        state.score = (state.score - HIT_SCORE_DRAIN * dt).max(0.0);
        state.life -= HIT_LIFE_DRAIN * dt;
        if state.life <= 0.0 {
            state.life = 0.0;
            state.phase = GamePhase::GameOver;
            log::info!(
                "game over: score {} level {}",
                state.score.round(),
                state.level()
            );
        }
    } else {
        state.score = (state.score + state.speed * SCORE_RATE * dt).max(0.0);
    }
}
