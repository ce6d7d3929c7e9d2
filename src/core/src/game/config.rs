use crate::error::{GameSimError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a single simulated game. Defaults reproduce a standard 48 minute game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSimConfig {
    /// Minutes per regulation quarter.
    pub quarter_length: f64,
    pub num_periods: usize,
    /// Overtime lasts `ceil(factor * quarter_length)` minutes.
    pub overtime_length_factor: f64,
    pub synergy_factor: f64,
    /// A substitution pass runs after a possession with probability `1 / subs_every_n`.
    pub subs_every_n: u32,
    pub home_court_advantage: f64,
    pub injuries_enabled: bool,
    /// Per on-court player, per possession.
    pub injury_rate: f64,
    pub foul_limit: u32,
}

impl Default for GameSimConfig {
    fn default() -> Self {
        GameSimConfig {
            quarter_length: 12.0,
            num_periods: 4,
            overtime_length_factor: 0.4,
            synergy_factor: 0.1,
            subs_every_n: 6,
            home_court_advantage: 0.01,
            injuries_enabled: true,
            injury_rate: 0.000125,
            foul_limit: 6,
        }
    }
}

impl GameSimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameSimConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            GameSimError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.quarter_length > 0.0) {
            return Err(GameSimError::InvalidConfig(format!(
                "quarter_length must be positive, got {}",
                self.quarter_length
            )));
        }

        if self.num_periods == 0 {
            return Err(GameSimError::InvalidConfig("num_periods must be at least 1".to_string()));
        }

        if !(self.overtime_length_factor > 0.0) {
            return Err(GameSimError::InvalidConfig(format!(
                "overtime_length_factor must be positive, got {}",
                self.overtime_length_factor
            )));
        }

        if self.subs_every_n == 0 {
            return Err(GameSimError::InvalidConfig("subs_every_n must be at least 1".to_string()));
        }

        if !(self.synergy_factor >= 0.0) {
            return Err(GameSimError::InvalidConfig(format!(
                "synergy_factor must not be negative, got {}",
                self.synergy_factor
            )));
        }

        if !(0.0..1.0).contains(&self.home_court_advantage) {
            return Err(GameSimError::InvalidConfig(format!(
                "home_court_advantage must be in [0, 1), got {}",
                self.home_court_advantage
            )));
        }

        if !(0.0..=1.0).contains(&self.injury_rate) {
            return Err(GameSimError::InvalidConfig(format!(
                "injury_rate must be a probability, got {}",
                self.injury_rate
            )));
        }

        if self.foul_limit == 0 {
            return Err(GameSimError::InvalidConfig("foul_limit must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Minutes on the clock at the start of an overtime period.
    pub fn overtime_length(&self) -> f64 {
        (self.overtime_length_factor * self.quarter_length).ceil()
    }

    /// Regulation minutes in a full game.
    pub fn regulation_length(&self) -> f64 {
        self.num_periods as f64 * self.quarter_length
    }

    /// Multiplier applied to the composite ratings of the home (0) or away (1) roster.
    pub fn home_court_factor(&self, team: usize) -> f64 {
        if team == 0 {
            1.0 + self.home_court_advantage
        } else {
            1.0 - self.home_court_advantage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameSimConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.overtime_length(), 5.0);
        assert_eq!(config.regulation_length(), 48.0);
    }

    #[test]
    fn test_home_court_factor() {
        let mut config = GameSimConfig::default();
        assert!((config.home_court_factor(0) - 1.01).abs() < 1e-12);
        assert!((config.home_court_factor(1) - 0.99).abs() < 1e-12);

        config.home_court_advantage = 0.0;
        assert_eq!(config.home_court_factor(0), 1.0);
        assert_eq!(config.home_court_factor(1), 1.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = GameSimConfig::default();
        config.subs_every_n = 0;
        assert!(matches!(config.validate(), Err(GameSimError::InvalidConfig(_))));

        let mut config = GameSimConfig::default();
        config.quarter_length = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameSimConfig::default();
        config.quarter_length = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = GameSimConfig::default();
        config.home_court_advantage = 1.0;
        assert!(config.validate().is_err());

        let mut config = GameSimConfig::default();
        config.synergy_factor = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameSimConfig::from_json(r#"{"quarter_length": 10.0, "injuries_enabled": false}"#).unwrap();

        assert_eq!(config.quarter_length, 10.0);
        assert!(!config.injuries_enabled);
        assert_eq!(config.subs_every_n, 6);
        assert_eq!(config.overtime_length(), 4.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = GameSimConfig::from_json(r#"{"quater_length": 10.0}"#);
        assert!(matches!(result, Err(GameSimError::Json(_))));
    }
}
