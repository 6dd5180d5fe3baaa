//! Difficulty tiers and their tuning profiles

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty level, selected once before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Numeric scalars for one tier; immutable for the run's lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Health assigned to each hostile at spawn
    pub base_health: f32,
    /// Pursuit displacement per AI step
    pub base_speed: f32,
    /// Scales the per-tick ambient spawn probability
    pub spawn_rate_multiplier: f64,
    /// Minimum simulation-clock gap between attacks from one hostile
    pub attack_cooldown_ms: f64,
}

impl Tier {
    /// Tuning table lookup. Pure; values are used verbatim as spawn
    /// stats and timing constants.
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Tier::Easy => DifficultyProfile {
                base_health: 50.0,
                base_speed: 1.0,
                spawn_rate_multiplier: 0.5,
                attack_cooldown_ms: 2000.0,
            },
            Tier::Normal => DifficultyProfile {
                base_health: 100.0,
                base_speed: 1.5,
                spawn_rate_multiplier: 1.0,
                attack_cooldown_ms: 1500.0,
            },
            Tier::Hard => DifficultyProfile {
                base_health: 150.0,
                base_speed: 2.0,
                spawn_rate_multiplier: 2.0,
                attack_cooldown_ms: 1000.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Normal => "normal",
            Tier::Hard => "hard",
        }
    }
}

/// An unknown tier name is a caller contract violation; it fails at
/// configuration time instead of being silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty tier `{0}`; expected easy, normal or hard")]
pub struct ParseTierError(String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Tier::Easy),
            "normal" => Ok(Tier::Normal),
            "hard" => Ok(Tier::Hard),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_scale_with_tier() {
        let easy = Tier::Easy.profile();
        let normal = Tier::Normal.profile();
        let hard = Tier::Hard.profile();

        assert!(easy.base_health < normal.base_health && normal.base_health < hard.base_health);
        assert!(easy.base_speed < normal.base_speed && normal.base_speed < hard.base_speed);
        assert!(easy.spawn_rate_multiplier < hard.spawn_rate_multiplier);
        // Harder tiers attack more often
        assert!(hard.attack_cooldown_ms < normal.attack_cooldown_ms);
        assert!(normal.attack_cooldown_ms < easy.attack_cooldown_ms);
    }

    #[test]
    fn test_parse_known_tiers() {
        assert_eq!("easy".parse::<Tier>().unwrap(), Tier::Easy);
        assert_eq!("Normal".parse::<Tier>().unwrap(), Tier::Normal);
        assert_eq!("HARD".parse::<Tier>().unwrap(), Tier::Hard);
    }

    #[test]
    fn test_parse_unknown_tier_fails_fast() {
        let err = "nightmare".parse::<Tier>().unwrap_err();
        assert!(err.to_string().contains("nightmare"));
    }
}
