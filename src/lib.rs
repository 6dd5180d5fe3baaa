//! Deadwave - a survival-combat arena simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, hostile AI, combat, game state)
//! - `scheduler`: Fixed-timestep frame driver
//! - `config`: Data-driven run configuration
//!
//! Rendering, input capture, HUD and audio are external collaborators:
//! they consume the per-tick snapshot and the event stream, and supply
//! movement intent, aim and fire commands. Nothing in this crate touches
//! a display or a wall clock.

pub mod config;
pub mod scheduler;
pub mod sim;

pub use config::{ConfigError, RunConfig};
pub use scheduler::FixedTimestep;
pub use sim::{GameEvent, GameState, Session, SimConfig, TickInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the reference cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Interior margin the player cannot leave (keeps the player out of wall geometry)
    pub const WALL_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_START_AMMO: u32 = 15;
    pub const PLAYER_MAX_AMMO: u32 = 30;
    /// Displacement per movement step, per active direction flag
    pub const PLAYER_MOVE_SPEED: f32 = 3.0;
    /// Pitch clamp; pitch has no gameplay effect but is kept for rendering
    pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_4;

    /// Hostile contact combat
    pub const ATTACK_RANGE: f32 = 25.0;
    pub const MELEE_RANGE: f32 = 25.0;
    pub const CONTACT_DAMAGE: f32 = 20.0;
    /// Damage per second under the continuous contact policy
    pub const CONTACT_DPS: f32 = 25.0;

    /// Projectile combat
    pub const PROJECTILE_SPEED: f32 = 12.0;
    pub const PROJECTILE_HIT_RADIUS: f32 = 15.0;
    pub const PROJECTILE_DAMAGE: f32 = 50.0;
    /// Score awarded per landed hit
    pub const HIT_SCORE: u64 = 50;

    /// Hit-scan combat
    pub const HITSCAN_HALF_ANGLE: f32 = 0.18;
    pub const HITSCAN_MAX_RANGE: f32 = 400.0;
    pub const HITSCAN_DAMAGE: f32 = 50.0;

    /// Population growth
    pub const SPAWN_BASE_PROBABILITY: f64 = 0.02;
    pub const INITIAL_SPAWN_COUNT: usize = 3;
}

/// Normalize angle to [-π, π)
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

/// Angle of the ray from `from` to `to`, in arena coordinates
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}
