//! Persisted records and their validating decoders

use super::{GameStatus, SessionStore};
use crate::error::{Result, TheoremGuessError};
use crate::evaluator::GuessFeedback;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One day's session as persisted between reloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionRecord {
    /// Daily theorem this session was played against
    pub theorem_id: String,
    /// Calendar day the session belongs to
    pub date: NaiveDate,
    pub guesses: Vec<GuessFeedback>,
    pub attempt: u32,
    pub status: GameStatus,
    pub hint_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revealed_hint: Option<String>,
}

impl SessionRecord {
    /// Check the record against the session invariants
    pub fn validate(&self, max_attempts: u32) -> Result<()> {
        let invalid = |msg: String| Err(TheoremGuessError::InvalidRecord(format!("session: {msg}")));
        let attempts = self.guesses.len();

        if self.attempt as usize != attempts {
            return invalid(format!("attempt {} but {} guesses", self.attempt, attempts));
        }
        if self.attempt > max_attempts {
            return invalid(format!("attempt {} over the limit of {}", self.attempt, max_attempts));
        }
        match self.status {
            GameStatus::Loading => return invalid("loading is not a persistable state".to_string()),
            GameStatus::Playing if self.attempt == max_attempts => {
                return invalid("still playing with no attempts left".to_string())
            }
            GameStatus::Won if self.attempt == 0 => {
                return invalid("won without a guess".to_string())
            }
            GameStatus::Lost if self.attempt != max_attempts => {
                return invalid("lost before using every attempt".to_string())
            }
            _ => {}
        }
        if self.revealed_hint.is_some() && !self.hint_used {
            return invalid("hint text without a used hint".to_string());
        }
        Ok(())
    }
}

/// Decode a JSON record
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Read, decode and validate a record.
///
/// Anything unreadable is dropped from the store and reported as absent.
pub fn load_record<T, S, F>(store: &mut S, key: &str, validate: F) -> Option<T>
where
    T: DeserializeOwned,
    S: SessionStore + ?Sized,
    F: FnOnce(&T) -> Result<()>,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "failed to read persisted record");
            return None;
        }
    };

    match decode::<T>(&raw).and_then(|record| validate(&record).map(|()| record)) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(key, error = %err, "discarding malformed persisted record");
            if let Err(err) = store.remove(key) {
                warn!(key, error = %err, "failed to remove malformed record");
            }
            None
        }
    }
}
