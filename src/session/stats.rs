//! Aggregate statistics across daily games

use crate::error::{Result, TheoremGuessError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Won on the given 1-based attempt
    Won { attempts: u32 },
    Lost,
}

/// Lifetime statistics for a player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Number of wins keyed by the attempt that won
    #[serde(default)]
    pub guesses: BTreeMap<u32, u32>,
}

impl GameStats {
    /// Fold a finished game into the statistics.
    ///
    /// A win on an attempt outside `1..=max_attempts` is rejected and leaves
    /// the statistics untouched.
    pub fn update_on_game_end(&mut self, outcome: GameOutcome, max_attempts: u32) -> Result<()> {
        if let GameOutcome::Won { attempts } = outcome {
            if attempts == 0 || attempts > max_attempts {
                return Err(TheoremGuessError::InvalidGuessCount {
                    count: attempts,
                    max: max_attempts,
                });
            }
        }

        self.games_played = self.games_played.saturating_add(1);
        match outcome {
            GameOutcome::Won { attempts } => {
                self.games_won = self.games_won.saturating_add(1);
                self.current_streak = self.current_streak.saturating_add(1);
                let bucket = self.guesses.entry(attempts).or_insert(0);
                *bucket = bucket.saturating_add(1);
            }
            GameOutcome::Lost => self.current_streak = 0,
        }
        self.max_streak = self.max_streak.max(self.current_streak);
        Ok(())
    }

    /// Share of games won, rounded to a whole percent
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        ((self.games_won as f64 / self.games_played as f64) * 100.0).round() as u32
    }

    /// Wins recorded for a given attempt number
    pub fn wins_at(&self, attempts: u32) -> u32 {
        self.guesses.get(&attempts).copied().unwrap_or(0)
    }

    /// Check that restored statistics are internally consistent
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(TheoremGuessError::InvalidRecord(format!("stats: {msg}")));

        if self.games_won > self.games_played {
            return invalid("more wins than games");
        }
        if self.max_streak > self.games_won || self.current_streak > self.max_streak {
            return invalid("streaks exceed wins");
        }
        if self.guesses.contains_key(&0) {
            return invalid("win histogram has a zero-guess bucket");
        }
        let histogram_wins: u64 = self.guesses.values().map(|&n| n as u64).sum();
        if histogram_wins != self.games_won as u64 {
            return invalid("win histogram does not add up to games won");
        }
        Ok(())
    }
}
