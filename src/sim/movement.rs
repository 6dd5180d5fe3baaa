//! Player movement and aim resolution
//!
//! The four direction flags map onto the arena in one of two ways:
//! relative to the facing angle (first-person) or along fixed screen
//! axes (top-down). Both are first-class; the run configuration picks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::*;

/// How the direction flags map onto the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    /// Forward follows the facing angle; strafing is perpendicular to it
    #[default]
    RelativeToFacing,
    /// Forward is screen-up, strafing is screen-left/right
    AbsoluteAxes,
}

/// Raw per-tick movement intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

/// Continuous aim input for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AimInput {
    /// No orientation change this tick
    #[default]
    Hold,
    /// Pointer-delta stream (first-person paradigm), radians
    TurnDelta { yaw: f32, pitch: f32 },
    /// Absolute aim point in arena coordinates (top-down paradigm)
    PointAt(Vec2),
}

/// Resolve the movement intent into a new position, clamped to the
/// arena interior. Each active flag contributes one fixed-speed
/// displacement; opposing flags cancel.
pub fn resolve_player_move(player: &Player, intent: &MoveIntent, mode: MovementMode) -> Vec2 {
    let mut delta = Vec2::ZERO;
    match mode {
        MovementMode::AbsoluteAxes => {
            if intent.forward {
                delta.y -= PLAYER_MOVE_SPEED;
            }
            if intent.backward {
                delta.y += PLAYER_MOVE_SPEED;
            }
            if intent.strafe_left {
                delta.x -= PLAYER_MOVE_SPEED;
            }
            if intent.strafe_right {
                delta.x += PLAYER_MOVE_SPEED;
            }
        }
        MovementMode::RelativeToFacing => {
            let facing = Vec2::new(player.yaw.cos(), player.yaw.sin());
            let right = Vec2::new(-facing.y, facing.x);
            if intent.forward {
                delta += facing * PLAYER_MOVE_SPEED;
            }
            if intent.backward {
                delta -= facing * PLAYER_MOVE_SPEED;
            }
            if intent.strafe_left {
                delta -= right * PLAYER_MOVE_SPEED;
            }
            if intent.strafe_right {
                delta += right * PLAYER_MOVE_SPEED;
            }
        }
    }
    clamp_to_arena(player.pos + delta)
}

/// Clamp a position to the arena interior, one margin inward from each wall
pub fn clamp_to_arena(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(WALL_MARGIN, ARENA_WIDTH - WALL_MARGIN),
        pos.y.clamp(WALL_MARGIN, ARENA_HEIGHT - WALL_MARGIN),
    )
}

/// Apply the aim stream to the player's orientation. Yaw wraps freely;
/// pitch is clamped and has no gameplay effect.
pub fn apply_aim(player: &mut Player, aim: AimInput) {
    match aim {
        AimInput::Hold => {}
        AimInput::TurnDelta { yaw, pitch } => {
            player.yaw = crate::normalize_angle(player.yaw + yaw);
            player.pitch = (player.pitch + pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        AimInput::PointAt(target) => {
            player.yaw = crate::angle_between(player.pos, target);
        }
    }
}
