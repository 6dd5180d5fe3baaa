//! Game state and core simulation types
//!
//! The entity store: the authoritative snapshot of the player, the
//! hostile population and in-flight projectiles. Every other component
//! reads and writes through it; the presentation layer only sees the
//! snapshot published at the end of a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advances every tick
    Running,
    /// Terminal; no further mutation occurs
    GameOver,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle (radians); driven by the aim stream, never clamped
    pub yaw: f32,
    /// Pitch, clamped to ±45°; carried for rendering only
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Keys collected during the run
    pub keys: u32,
    pub score: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            ammo: PLAYER_START_AMMO,
            max_ammo: PLAYER_MAX_AMMO,
            keys: 0,
            score: 0,
        }
    }
}

impl Player {
    /// Apply damage, clamping health at zero
    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Restore health, capped at the maximum
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Spend one round. Returns false (and changes nothing) when empty.
    pub fn consume_ammo(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Add rounds, capped at the maximum
    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = (self.ammo + amount).min(self.max_ammo);
    }

    pub fn add_keys(&mut self, amount: u32) {
        self.keys += amount;
    }

    /// Score only ever grows
    pub fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// A hostile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// True iff health > 0. Inactive hostiles are skipped by AI, combat
    /// and rendering but never removed, so indices stay stable.
    pub active: bool,
    /// Displacement per AI step, set from the difficulty profile at spawn
    pub speed: f32,
    /// Simulation-clock reading of the last landed attack
    pub last_attack_ms: f64,
}

impl Hostile {
    /// Apply damage, clamping at zero and syncing the active flag
    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
        self.active = self.health > 0.0;
    }
}

/// A projectile in flight (projectile combat mode only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Travel angle, fixed at fire time
    pub angle: f32,
    pub speed: f32,
}

impl Projectile {
    /// Move one step along the travel angle
    pub fn advance(&mut self) {
        self.pos += Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed;
    }

    /// Whether the projectile is still inside the arena
    pub fn in_bounds(&self) -> bool {
        self.pos.x > 0.0 && self.pos.x < ARENA_WIDTH && self.pos.y > 0.0 && self.pos.y < ARENA_HEIGHT
    }
}

/// Discrete notifications for the presentation layer.
///
/// These describe what happened during a tick, not state; the embedding
/// application decides how to surface them (HUD flash, toast, sound).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ScoreGained(u64),
    /// A ranged hit landed at this arena position
    HitLanded { pos: Vec2 },
    /// Fire command arrived with an empty magazine
    OutOfAmmo,
    /// Emitted exactly once, when the player's health reaches zero
    GameOver,
}

/// Complete simulation state (the entity store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Simulation clock in milliseconds; drives attack cooldowns
    pub elapsed_ms: f64,
    /// Tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Append-only; soft-deleted via `active`, ids ascend
    pub hostiles: Vec<Hostile>,
    pub projectiles: Vec<Projectile>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state for a new run
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            elapsed_ms: 0.0,
            time_ticks: 0,
            player: Player::default(),
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a hostile by id. Ids ascend with spawn order, so binary
    /// search suffices without a separate index map.
    pub fn hostile_mut(&mut self, id: u32) -> Option<&mut Hostile> {
        let idx = self.hostiles.binary_search_by_key(&id, |h| h.id).ok()?;
        Some(&mut self.hostiles[idx])
    }

    /// Active hostiles only (the soft-deletion filter)
    pub fn active_hostiles(&self) -> impl Iterator<Item = &Hostile> {
        self.hostiles.iter().filter(|h| h.active)
    }
}
