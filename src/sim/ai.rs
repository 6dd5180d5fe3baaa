//! Hostile pursue-or-attack behavior
//!
//! Each active hostile advances independently: straight-line pursuit
//! toward the player, or a cooldown-gated attack once within contact
//! range. Hostiles never interact with each other, so evaluation order
//! cannot change the outcome.

use glam::Vec2;

use super::difficulty::DifficultyProfile;
use super::state::Hostile;
use crate::consts::*;

/// A landed attack, resolved against the player by combat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackEvent {
    pub hostile_id: u32,
    pub damage: f32,
}

/// Advance every active hostile one step.
///
/// `now_ms` is the simulation clock; attack cooldowns compare against
/// it rather than assuming any fixed tick duration. A hostile within
/// range whose cooldown has not elapsed holds position untouched.
pub fn step(
    hostiles: &mut [Hostile],
    player_pos: Vec2,
    profile: &DifficultyProfile,
    now_ms: f64,
) -> Vec<AttackEvent> {
    let mut attacks = Vec::new();

    for hostile in hostiles.iter_mut().filter(|h| h.active) {
        let to_player = player_pos - hostile.pos;
        let distance = to_player.length();

        if distance > ATTACK_RANGE {
            // Pure pursuit: one step of `speed` along the straight line
            hostile.pos += to_player / distance * hostile.speed;
        } else if now_ms - hostile.last_attack_ms > profile.attack_cooldown_ms {
            attacks.push(AttackEvent {
                hostile_id: hostile.id,
                damage: CONTACT_DAMAGE,
            });
            hostile.last_attack_ms = now_ms;
        }
    }

    attacks
}
