//! Game configuration
//!
//! Tunables for a session. Every field has a default so a partial JSON
//! document (or none at all) is enough.

use crate::error::{Result, TheoremGuessError};
use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which clock decides the calendar day for the daily puzzle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// The machine's local date
    #[default]
    Local,
    /// The UTC date, so every player rolls over at the same instant
    Utc,
}

impl DatePolicy {
    /// Today's date under this policy
    pub fn today(self) -> NaiveDate {
        match self {
            DatePolicy::Local => Local::now().date_naive(),
            DatePolicy::Utc => Utc::now().date_naive(),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Guesses allowed per puzzle
    pub max_attempts: u32,
    /// How long a repeated guess stays highlighted
    pub duplicate_highlight_ms: u64,
    pub date_policy: DatePolicy,
}

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_DUPLICATE_HIGHLIGHT_MS: u64 = 3_000;

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            duplicate_highlight_ms: DEFAULT_DUPLICATE_HIGHLIGHT_MS,
            date_policy: DatePolicy::Local,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(TheoremGuessError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn duplicate_highlight(&self) -> Duration {
        Duration::from_millis(self.duplicate_highlight_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.duplicate_highlight(), Duration::from_secs(3));
        assert_eq!(config.date_policy, DatePolicy::Local);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"max_attempts": 6, "date_policy": "utc"}"#).unwrap();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.duplicate_highlight_ms, 3_000);
        assert_eq!(config.date_policy, DatePolicy::Utc);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{"max_attempts": 0}"#),
            Err(TheoremGuessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(GameConfig::from_json(r#"{"max_guesses": 6}"#).is_err());
    }
}
