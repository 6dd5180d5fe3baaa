//! Run configuration
//!
//! Supplied once by the embedding application before a run starts. The
//! tier string is validated eagerly: an unknown name is a configuration
//! error, never a silent default.

use serde::{Deserialize, Serialize};

use crate::sim::{CombatMode, ContactPolicy, MovementMode, ParseTierError, SimConfig, Tier};

/// Serializable run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Difficulty tier name: easy | normal | hard
    pub difficulty: String,
    pub movement_mode: MovementMode,
    pub combat_mode: CombatMode,
    pub contact_policy: ContactPolicy,
    /// Run seed for reproducibility
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            difficulty: Tier::default().as_str().to_string(),
            movement_mode: MovementMode::default(),
            combat_mode: CombatMode::default(),
            contact_policy: ContactPolicy::default(),
            seed: 0,
        }
    }
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Tier(#[from] ParseTierError),
}

impl RunConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.to_sim_config()?;
        Ok(config)
    }

    /// Validate and lower into the simulation's config
    pub fn to_sim_config(&self) -> Result<SimConfig, ParseTierError> {
        let tier: Tier = self.difficulty.parse()?;
        Ok(SimConfig {
            tier,
            movement_mode: self.movement_mode,
            combat_mode: self.combat_mode,
            contact_policy: self.contact_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunConfig::default();
        let sim = config.to_sim_config().unwrap();
        assert_eq!(sim.tier, Tier::Normal);
    }

    #[test]
    fn test_from_json_round_trip() {
        let json = r#"{
            "difficulty": "hard",
            "movement_mode": "absolute_axes",
            "combat_mode": "projectile",
            "contact_policy": "continuous",
            "seed": 42
        }"#;
        let config = RunConfig::from_json(json).unwrap();
        let sim = config.to_sim_config().unwrap();
        assert_eq!(sim.tier, Tier::Hard);
        assert_eq!(sim.movement_mode, MovementMode::AbsoluteAxes);
        assert_eq!(sim.combat_mode, CombatMode::Projectile);
        assert_eq!(sim.contact_policy, ContactPolicy::Continuous);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RunConfig::from_json(r#"{"difficulty": "easy"}"#).unwrap();
        let sim = config.to_sim_config().unwrap();
        assert_eq!(sim.tier, Tier::Easy);
        assert_eq!(sim.combat_mode, CombatMode::default());
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let err = RunConfig::from_json(r#"{"difficulty": "brutal"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Tier(_)));
    }
}
