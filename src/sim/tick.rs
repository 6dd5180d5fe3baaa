//! Discrete simulation tick
//!
//! One state transition in fixed order: input, movement, hostile AI,
//! combat, spawn roll, termination check. The session owns the entity
//! store for the duration of a tick; the snapshot it exposes between
//! ticks is what the presentation layer renders.

use serde::{Deserialize, Serialize};

use super::ai;
use super::combat::{self, CombatMode, ContactPolicy};
use super::difficulty::{DifficultyProfile, Tier};
use super::movement::{self, AimInput, MoveIntent, MovementMode};
use super::spawn::SpawnDirector;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Paradigm switches and tier for one run. The movement and combat
/// paradigms are orthogonal; any pairing is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub tier: Tier,
    pub movement_mode: MovementMode,
    pub combat_mode: CombatMode,
    pub contact_policy: ContactPolicy,
}

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub movement: MoveIntent,
    pub aim: AimInput,
    /// Discrete fire command; ammo is the only rate limit
    pub fire: bool,
}

/// One run of the simulation: the entity store plus the systems that
/// drive it. Two phases: Running, then the terminal GameOver.
#[derive(Debug)]
pub struct Session {
    config: SimConfig,
    profile: DifficultyProfile,
    spawner: SpawnDirector,
    state: GameState,
}

impl Session {
    /// Start a run: fresh store, initial hostile batch on the perimeter
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut state = GameState::new(seed);
        let mut spawner = SpawnDirector::new(config.tier, seed);
        let batch = spawner.spawn_batch(&mut state, INITIAL_SPAWN_COUNT);
        state.hostiles.extend(batch);
        log::info!("run started: tier={} seed={}", config.tier.as_str(), seed);

        Self {
            config,
            profile: config.tier.profile(),
            spawner,
            state,
        }
    }

    /// The snapshot published at the end of the last tick
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advance the simulation by one tick.
    ///
    /// `dt` is the elapsed simulation time in seconds. Cooldowns and
    /// elapsed-time damage normalize against it, so correctness does
    /// not depend on whether a fixed timer or a display callback drives
    /// the loop. A terminated session mutates nothing.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != GamePhase::Running {
            return events;
        }

        self.state.time_ticks += 1;
        self.state.elapsed_ms += f64::from(dt) * 1000.0;

        // Movement and orientation
        movement::apply_aim(&mut self.state.player, input.aim);
        self.state.player.pos = movement::resolve_player_move(
            &self.state.player,
            &input.movement,
            self.config.movement_mode,
        );

        // Hostile AI against the new player position
        let attacks = ai::step(
            &mut self.state.hostiles,
            self.state.player.pos,
            &self.profile,
            self.state.elapsed_ms,
        );

        // Combat: pending fire command, projectiles in flight, contact
        if input.fire {
            combat::resolve_fire(&mut self.state, self.config.combat_mode, &mut events);
        }
        if self.config.combat_mode == CombatMode::Projectile {
            combat::resolve_projectiles(&mut self.state, &mut events);
        }
        combat::resolve_contact(&mut self.state, &attacks, self.config.contact_policy, dt);

        // Periodic population growth
        if self.spawner.should_spawn(SPAWN_BASE_PROBABILITY) {
            let batch = self.spawner.spawn_batch(&mut self.state, 1);
            log::debug!("ambient spawn at tick {}", self.state.time_ticks);
            self.state.hostiles.extend(batch);
        }

        // Termination check
        if self.state.player.is_dead() {
            self.state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
            log::info!(
                "game over at tick {} with score {}",
                self.state.time_ticks,
                self.state.player.score
            );
        }

        events
    }
}
