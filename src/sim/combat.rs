//! Combat resolution
//!
//! Projectile-vs-hostile overlap, hit-scan cone tests, and
//! hostile-vs-player contact damage. Resolvers mutate the entity store
//! and report everything the presentation layer needs as `GameEvent`s.

use serde::{Deserialize, Serialize};

use super::ai::AttackEvent;
use super::state::{GameEvent, GameState, Projectile};
use crate::consts::*;
use crate::normalize_angle;

/// Ranged-combat paradigm, selected by the calling application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CombatMode {
    /// Simulated traveling entities that must geometrically intersect
    Projectile,
    /// Instantaneous angle/distance test against the aim direction
    #[default]
    HitScan,
}

/// How hostile contact translates into player damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContactPolicy {
    /// Discrete damage per attack event, gated by each hostile's cooldown
    #[default]
    PerAttack,
    /// Small elapsed-time-scaled damage every tick while any active
    /// hostile is within melee range, independent of cooldowns
    Continuous,
}

/// Handle a fire command.
///
/// Ammo is decremented unconditionally on any shot, misses included.
/// With an empty magazine nothing is tested and `OutOfAmmo` is the only
/// effect.
pub fn resolve_fire(state: &mut GameState, mode: CombatMode, events: &mut Vec<GameEvent>) {
    if !state.player.consume_ammo() {
        events.push(GameEvent::OutOfAmmo);
        return;
    }

    match mode {
        CombatMode::Projectile => {
            let id = state.next_entity_id();
            state.projectiles.push(Projectile {
                id,
                pos: state.player.pos,
                angle: state.player.yaw,
                speed: PROJECTILE_SPEED,
            });
        }
        CombatMode::HitScan => resolve_hitscan(state, events),
    }
}

/// Instant cone test: the nearest active hostile within the half-angle
/// of the aim direction and inside the maximum range takes the hit.
fn resolve_hitscan(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let origin = state.player.pos;
    let yaw = state.player.yaw;

    let mut best: Option<(u32, f32)> = None;
    for hostile in state.active_hostiles() {
        let distance = origin.distance(hostile.pos);
        if distance > HITSCAN_MAX_RANGE {
            continue;
        }
        let offset = normalize_angle(crate::angle_between(origin, hostile.pos) - yaw);
        if offset.abs() > HITSCAN_HALF_ANGLE {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((hostile.id, distance));
        }
    }

    if let Some((id, _)) = best {
        apply_ranged_hit(state, id, HITSCAN_DAMAGE, events);
    }
}

/// Advance every projectile one step, cull arena leavers, and resolve
/// overlaps. A projectile hits at most one hostile per tick (first
/// active overlap wins) and is removed on hit.
pub fn resolve_projectiles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.projectiles.retain_mut(|projectile| {
        projectile.advance();
        projectile.in_bounds()
    });

    let in_flight: Vec<u32> = state.projectiles.iter().map(|p| p.id).collect();
    for projectile_id in in_flight {
        let Some(pos) = state
            .projectiles
            .iter()
            .find(|p| p.id == projectile_id)
            .map(|p| p.pos)
        else {
            continue;
        };

        let hit = state
            .active_hostiles()
            .find(|h| pos.distance(h.pos) < PROJECTILE_HIT_RADIUS)
            .map(|h| h.id);

        if let Some(hostile_id) = hit {
            apply_ranged_hit(state, hostile_id, PROJECTILE_DAMAGE, events);
            state.projectiles.retain(|p| p.id != projectile_id);
        }
    }
}

/// Shared tail of both ranged paradigms: damage, soft-delete sync,
/// score, and the hit-location notification.
fn apply_ranged_hit(state: &mut GameState, hostile_id: u32, damage: f32, events: &mut Vec<GameEvent>) {
    let Some(hostile) = state.hostile_mut(hostile_id) else {
        return;
    };
    hostile.damage(damage);
    let pos = hostile.pos;
    if !hostile.active {
        log::debug!("hostile {} down", hostile_id);
    }

    state.player.add_score(HIT_SCORE);
    events.push(GameEvent::HitLanded { pos });
    events.push(GameEvent::ScoreGained(HIT_SCORE));
}

/// Resolve hostile contact into player damage under the configured
/// policy. Health clamps at zero; the terminal transition itself is
/// owned by the tick.
pub fn resolve_contact(
    state: &mut GameState,
    attacks: &[AttackEvent],
    policy: ContactPolicy,
    dt: f32,
) {
    match policy {
        ContactPolicy::PerAttack => {
            for attack in attacks {
                state.player.damage(attack.damage);
            }
        }
        ContactPolicy::Continuous => {
            let player_pos = state.player.pos;
            let in_range = state
                .active_hostiles()
                .any(|h| h.pos.distance(player_pos) <= MELEE_RANGE);
            if in_range {
                state.player.damage(CONTACT_DPS * dt);
            }
        }
    }
}
