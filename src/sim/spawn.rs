//! Hostile spawning
//!
//! Perimeter batch spawns plus a per-tick Bernoulli roll for ambient
//! population growth. The director owns the run's RNG stream so spawn
//! sequences reproduce from the seed alone.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::difficulty::{DifficultyProfile, Tier};
use super::state::{GameState, Hostile};
use crate::consts::*;

/// Creates hostiles at arena-perimeter positions, stat-scaled by tier
#[derive(Debug)]
pub struct SpawnDirector {
    tier: Tier,
    profile: DifficultyProfile,
    rng: Pcg32,
}

impl SpawnDirector {
    pub fn new(tier: Tier, seed: u64) -> Self {
        Self {
            tier,
            profile: tier.profile(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Build a batch of `count` hostiles on uniformly chosen perimeter
    /// edges, at uniform points along them. Ids come from the store;
    /// the caller appends the batch. A count of zero yields an empty
    /// batch.
    pub fn spawn_batch(&mut self, store: &mut GameState, count: usize) -> Vec<Hostile> {
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            batch.push(Hostile {
                id: store.next_entity_id(),
                pos: self.perimeter_point(),
                health: self.profile.base_health,
                max_health: self.profile.base_health,
                active: true,
                speed: self.profile.base_speed,
                last_attack_ms: 0.0,
            });
        }
        batch
    }

    /// One Bernoulli draw for the ambient population-growth roll, at
    /// `base_probability_per_tick` scaled by the tier's multiplier.
    pub fn should_spawn(&mut self, base_probability_per_tick: f64) -> bool {
        let p = (base_probability_per_tick * self.profile.spawn_rate_multiplier).clamp(0.0, 1.0);
        p > 0.0 && self.rng.random_bool(p)
    }

    /// Uniform point on a uniformly chosen arena edge
    fn perimeter_point(&mut self) -> Vec2 {
        // 0: top, 1: right, 2: bottom, 3: left
        match self.rng.random_range(0..4u8) {
            0 => Vec2::new(self.rng.random_range(0.0..=ARENA_WIDTH), 0.0),
            1 => Vec2::new(ARENA_WIDTH, self.rng.random_range(0.0..=ARENA_HEIGHT)),
            2 => Vec2::new(self.rng.random_range(0.0..=ARENA_WIDTH), ARENA_HEIGHT),
            _ => Vec2::new(0.0, self.rng.random_range(0.0..=ARENA_HEIGHT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_perimeter(pos: Vec2) -> bool {
        pos.x == 0.0 || pos.x == ARENA_WIDTH || pos.y == 0.0 || pos.y == ARENA_HEIGHT
    }

    #[test]
    fn test_spawn_batch_zero_is_empty() {
        let mut state = GameState::new(1);
        let mut director = SpawnDirector::new(Tier::Normal, 1);
        assert!(director.spawn_batch(&mut state, 0).is_empty());
    }

    #[test]
    fn test_spawn_batch_count_and_perimeter() {
        let mut state = GameState::new(42);
        let mut director = SpawnDirector::new(Tier::Normal, 42);
        let batch = director.spawn_batch(&mut state, 25);

        assert_eq!(batch.len(), 25);
        for hostile in &batch {
            assert!(on_perimeter(hostile.pos), "spawned off-perimeter at {:?}", hostile.pos);
            assert!(hostile.active);
            assert_eq!(hostile.health, hostile.max_health);
            assert_eq!(hostile.last_attack_ms, 0.0);
        }
    }

    #[test]
    fn test_spawn_stats_follow_tier() {
        let mut state = GameState::new(3);
        let mut director = SpawnDirector::new(Tier::Hard, 3);
        let batch = director.spawn_batch(&mut state, 5);

        let profile = Tier::Hard.profile();
        for hostile in &batch {
            assert_eq!(hostile.max_health, profile.base_health);
            assert_eq!(hostile.speed, profile.base_speed);
        }
    }

    #[test]
    fn test_spawn_ids_unique_and_ascending() {
        let mut state = GameState::new(9);
        let mut director = SpawnDirector::new(Tier::Easy, 9);
        let batch = director.spawn_batch(&mut state, 10);

        for pair in batch.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_zero_probability_never_spawns() {
        let mut director = SpawnDirector::new(Tier::Hard, 1234);
        for _ in 0..1000 {
            assert!(!director.should_spawn(0.0));
        }
    }

    #[test]
    fn test_certain_probability_always_spawns() {
        // Hard tier multiplies by 2; the product clamps to 1
        let mut director = SpawnDirector::new(Tier::Hard, 1234);
        for _ in 0..100 {
            assert!(director.should_spawn(1.0));
        }
    }

    #[test]
    fn test_spawn_sequence_reproducible_from_seed() {
        let mut state_a = GameState::new(77);
        let mut state_b = GameState::new(77);
        let mut director_a = SpawnDirector::new(Tier::Normal, 77);
        let mut director_b = SpawnDirector::new(Tier::Normal, 77);

        let batch_a = director_a.spawn_batch(&mut state_a, 8);
        let batch_b = director_b.spawn_batch(&mut state_b, 8);

        for (a, b) in batch_a.iter().zip(&batch_b) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
