//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Explicit elapsed-time arguments, never a wall clock
//! - No rendering or platform dependencies

pub mod ai;
pub mod combat;
pub mod difficulty;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use ai::AttackEvent;
pub use combat::{CombatMode, ContactPolicy};
pub use difficulty::{DifficultyProfile, ParseTierError, Tier};
pub use movement::{AimInput, MoveIntent, MovementMode};
pub use spawn::SpawnDirector;
pub use state::{GameEvent, GamePhase, GameState, Hostile, Player, Projectile};
pub use tick::{Session, SimConfig, TickInput};
