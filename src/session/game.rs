//! GameSession - the daily puzzle state machine
//!
//! A session starts in [`GameStatus::Loading`], resolves today's theorem in
//! [`GameSession::start`] and then accepts guesses until it is won or every
//! attempt is spent. Each accepted change is written through the injected
//! [`SessionStore`]; a failing store never blocks play.

use super::{
    encode, is_same_puzzle, load_record, pick_hint, share_date_label, DuplicateHighlight,
    GameOutcome, GameStats, SessionRecord, SessionStore, SESSION_KEY, STATS_KEY,
};
use crate::catalog::{Catalog, Theorem};
use crate::config::GameConfig;
use crate::error::{GuessRejection, Result, TheoremGuessError};
use crate::evaluator::{evaluate, GuessFeedback};
use crate::normalize::normalize;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle of a daily puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Today's theorem and any saved progress are not resolved yet
    Loading,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Loading => "loading",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// What the player is told after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessNotice {
    Correct,
    Incorrect,
    GameOver { theorem_name: String },
}

impl fmt::Display for GuessNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessNotice::Correct => f.write_str("Correct! You guessed the theorem!"),
            GuessNotice::Incorrect => {
                f.write_str("Incorrect guess. Check the property feedback and try again.")
            }
            GuessNotice::GameOver { theorem_name } => {
                write!(f, "Game over. The theorem was: {theorem_name}")
            }
        }
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub status: GameStatus,
    /// Attempts used, including this one
    pub attempt: u32,
    pub notice: GuessNotice,
    /// Set when the new state could not be saved; play continues regardless
    pub storage_warning: Option<TheoremGuessError>,
}

/// Result of a granted hint request
#[derive(Debug, Clone, PartialEq)]
pub struct HintOutcome {
    pub message: String,
    pub storage_warning: Option<TheoremGuessError>,
}

/// Result of resolving today's puzzle
#[derive(Debug, Clone, PartialEq)]
pub struct StartOutcome {
    /// Whether saved progress for today was picked up
    pub restored: bool,
    pub storage_warning: Option<TheoremGuessError>,
}

/// One player's progress on the daily theorem
pub struct GameSession<S, R> {
    catalog: Arc<Catalog>,
    config: GameConfig,
    store: S,
    rng: R,
    target: Option<Theorem>,
    today: Option<NaiveDate>,
    status: GameStatus,
    guesses: Vec<GuessFeedback>,
    hint_used: bool,
    revealed_hint: Option<String>,
    stats: GameStats,
    highlight: Option<DuplicateHighlight>,
}

impl<S: SessionStore, R: Rng> GameSession<S, R> {
    /// Create a session in the loading state
    pub fn new(catalog: Arc<Catalog>, store: S, rng: R, config: GameConfig) -> Self {
        Self {
            catalog,
            config,
            store,
            rng,
            target: None,
            today: None,
            status: GameStatus::Loading,
            guesses: Vec::new(),
            hint_used: false,
            revealed_hint: None,
            stats: GameStats::default(),
            highlight: None,
        }
    }

    /// [`start`](Self::start) with today's date from the configured clock
    pub fn start_today(&mut self) -> StartOutcome {
        let today = self.config.date_policy.today();
        self.start(today)
    }

    /// Resolve the puzzle for `today`.
    ///
    /// Saved progress is restored only when it was recorded for the same
    /// date and the same daily theorem; otherwise a fresh puzzle begins.
    /// Statistics are always carried over.
    pub fn start(&mut self, today: NaiveDate) -> StartOutcome {
        let max_attempts = self.config.max_attempts;
        self.stats = load_record(&mut self.store, STATS_KEY, GameStats::validate).unwrap_or_default();

        let target = self.catalog.theorem_of_the_day(today).clone();
        let record: Option<SessionRecord> =
            load_record(&mut self.store, SESSION_KEY, |r: &SessionRecord| r.validate(max_attempts));

        let restored = match record {
            Some(record) if is_same_puzzle(&record, &target.id, today) => {
                info!(
                    theorem = %target.id,
                    %today,
                    attempt = record.attempt,
                    status = record.status.as_str(),
                    "restoring saved session"
                );
                self.guesses = record.guesses;
                self.status = record.status;
                self.hint_used = record.hint_used;
                self.revealed_hint = record.revealed_hint;
                self.highlight = None;
                true
            }
            _ => {
                info!(theorem = %target.id, %today, "starting a new daily puzzle");
                self.reset();
                false
            }
        };

        self.target = Some(target);
        self.today = Some(today);
        StartOutcome {
            restored,
            storage_warning: self.persist_or_warn(),
        }
    }

    /// Start over on the daily theorem for `today` once the game is over.
    ///
    /// Statistics are kept. Returns `None` while a game is still running.
    pub fn play_again(&mut self, today: NaiveDate) -> Option<StartOutcome> {
        if !self.status.is_over() {
            return None;
        }
        let target = self.catalog.theorem_of_the_day(today).clone();
        info!(theorem = %target.id, %today, "playing again");
        self.reset();
        self.target = Some(target);
        self.today = Some(today);
        Some(StartOutcome {
            restored: false,
            storage_warning: self.persist_or_warn(),
        })
    }

    /// Submit a guess, timing the duplicate highlight from now
    pub fn submit_guess(&mut self, raw: &str) -> std::result::Result<GuessOutcome, GuessRejection> {
        self.submit_guess_at(raw, Instant::now())
    }

    /// Submit a guess.
    ///
    /// Rejections leave the session untouched, except that a repeated guess
    /// (same normalized text as an earlier one) arms the duplicate highlight
    /// from `now`.
    pub fn submit_guess_at(
        &mut self,
        raw: &str,
        now: Instant,
    ) -> std::result::Result<GuessOutcome, GuessRejection> {
        let max_attempts = self.config.max_attempts;

        if self.status != GameStatus::Playing {
            return Err(GuessRejection::NotPlaying);
        }
        if self.attempts_used() >= max_attempts {
            return Err(GuessRejection::NoAttemptsLeft);
        }
        if raw.trim().is_empty() {
            return Err(GuessRejection::EmptyGuess);
        }

        let normalized = normalize(raw);
        if self.guesses.iter().any(|g| normalize(&g.guess_string) == normalized) {
            debug!(guess = raw, "rejecting repeated guess");
            self.highlight = Some(DuplicateHighlight::new(
                raw,
                now,
                self.config.duplicate_highlight(),
            ));
            return Err(GuessRejection::Duplicate(raw.to_string()));
        }

        let target = self.target.as_ref().ok_or(GuessRejection::NotPlaying)?;
        let feedback = evaluate(raw, target, &self.catalog);
        let won = normalize(&target.name) == normalized;
        let theorem_name = target.name.clone();

        self.guesses.push(feedback);
        let attempt = self.attempts_used();

        let notice = if won {
            self.finish(GameStatus::Won, GameOutcome::Won { attempts: attempt });
            GuessNotice::Correct
        } else if attempt >= max_attempts {
            self.finish(GameStatus::Lost, GameOutcome::Lost);
            GuessNotice::GameOver { theorem_name }
        } else {
            GuessNotice::Incorrect
        };

        Ok(GuessOutcome {
            status: self.status,
            attempt,
            notice,
            storage_warning: self.persist_or_warn(),
        })
    }

    /// Reveal one attribute of the target.
    ///
    /// Only one hint is granted per session and only while playing; other
    /// requests return `None` and change nothing.
    pub fn request_hint(&mut self) -> Option<HintOutcome> {
        if self.hint_used || self.status != GameStatus::Playing {
            return None;
        }
        let target = self.target.as_ref()?;
        let message = pick_hint(target, &self.guesses, &mut self.rng);
        debug!(hint = %message, "hint revealed");

        self.hint_used = true;
        self.revealed_hint = Some(message.clone());
        Some(HintOutcome {
            message,
            storage_warning: self.persist_or_warn(),
        })
    }

    /// Text for sharing the result, available once the game is over
    pub fn share_text(&self, url: &str) -> Option<String> {
        let today = self.today?;
        let max_attempts = self.config.max_attempts;
        let score = match self.status {
            GameStatus::Won => format!("{}/{}", self.attempts_used(), max_attempts),
            GameStatus::Lost => format!("X/{max_attempts}"),
            GameStatus::Loading | GameStatus::Playing => return None,
        };

        let mut text = format!(
            "TheoremGuess {} - {}\n\nCan you guess today's theorem?",
            share_date_label(today),
            score
        );
        if !url.is_empty() {
            text.push(' ');
            text.push_str(url);
        }
        Some(text)
    }

    /// Write stats and the current session to the store
    pub fn persist(&mut self) -> Result<()> {
        let (Some(target), Some(today)) = (self.target.as_ref(), self.today) else {
            return Ok(());
        };
        let record = SessionRecord {
            theorem_id: target.id.clone(),
            date: today,
            guesses: self.guesses.clone(),
            attempt: self.attempts_used(),
            status: self.status,
            hint_used: self.hint_used,
            revealed_hint: self.revealed_hint.clone(),
        };

        let stats = encode(&self.stats)?;
        let session = encode(&record)?;
        self.store.set(STATS_KEY, &stats)?;
        self.store.set(SESSION_KEY, &session)
    }

    fn persist_or_warn(&mut self) -> Option<TheoremGuessError> {
        match self.persist() {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "failed to persist session; keeping in-memory state");
                Some(err)
            }
        }
    }

    fn finish(&mut self, status: GameStatus, outcome: GameOutcome) {
        self.status = status;
        if let Err(err) = self.stats.update_on_game_end(outcome, self.config.max_attempts) {
            warn!(error = %err, "statistics not updated");
        }
        info!(
            status = status.as_str(),
            attempts = self.attempts_used(),
            games_played = self.stats.games_played,
            current_streak = self.stats.current_streak,
            "game finished"
        );
    }

    fn reset(&mut self) {
        self.status = GameStatus::Playing;
        self.guesses.clear();
        self.hint_used = false;
        self.revealed_hint = None;
        self.highlight = None;
    }
}

impl<S, R> GameSession<S, R> {
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Today's theorem, once the session has started
    pub fn target(&self) -> Option<&Theorem> {
        self.target.as_ref()
    }

    pub fn today(&self) -> Option<NaiveDate> {
        self.today
    }

    /// Feedback for every accepted guess, oldest first
    pub fn guesses(&self) -> &[GuessFeedback] {
        &self.guesses
    }

    pub fn attempts_used(&self) -> u32 {
        self.guesses.len() as u32
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts_used())
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn revealed_hint(&self) -> Option<&str> {
        self.revealed_hint.as_deref()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// The repeated guess to highlight, if its highlight is still live at `now`
    pub fn duplicate_highlight(&self, now: Instant) -> Option<&str> {
        self.highlight.as_ref().and_then(|h| h.active(now))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::session::{hint_candidates, MemoryStore, NO_HINT_MESSAGE};
    use rand::rngs::mock::StepRng;
    use std::time::Duration;

    type TestSession<'a> = GameSession<&'a mut MemoryStore, StepRng>;

    /// Day 289 of 2026: Noether's Theorem
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn session_with(store: &mut MemoryStore, config: GameConfig) -> TestSession<'_> {
        GameSession::new(builtin_catalog(), store, StepRng::new(0, 0), config)
    }

    fn started(store: &mut MemoryStore) -> TestSession<'_> {
        let mut session = session_with(store, GameConfig::default());
        session.start(today());
        session
    }

    struct FailingStore;

    impl SessionStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(TheoremGuessError::StorageError("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_loading_rejects_everything() {
        let mut store = MemoryStore::new();
        let mut session = session_with(&mut store, GameConfig::default());

        assert_eq!(session.status(), GameStatus::Loading);
        assert_eq!(session.submit_guess("Noether's Theorem"), Err(GuessRejection::NotPlaying));
        assert!(session.request_hint().is_none());
        assert!(session.share_text("").is_none());
        drop(session);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_fresh_start() {
        let mut store = MemoryStore::new();
        let mut session = session_with(&mut store, GameConfig::default());
        let outcome = session.start(today());

        assert!(!outcome.restored);
        assert!(outcome.storage_warning.is_none());
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.target().unwrap().id, "noether_theorem");
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.remaining_attempts(), 10);
        drop(session);
        assert!(store.entries().contains_key(STATS_KEY));
        assert!(store.entries().contains_key(SESSION_KEY));
    }

    #[test]
    fn test_win_on_first_guess() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);

        let outcome = session.submit_guess("noethers theorem").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.attempt, 1);
        assert_eq!(outcome.notice, GuessNotice::Correct);

        let stats = session.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.wins_at(1), 1);

        assert_eq!(session.submit_guess("Pythagorean Theorem"), Err(GuessRejection::NotPlaying));
        assert!(session.request_hint().is_none());
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn test_win_on_later_attempt() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);

        session.submit_guess("Pythagorean Theorem").unwrap();
        session.submit_guess("Some Unknown Lemma").unwrap();
        let outcome = session.submit_guess("Noether's Theorem").unwrap();

        assert_eq!(outcome.attempt, 3);
        assert_eq!(session.stats().wins_at(3), 1);
        assert_eq!(session.stats().guesses.len(), 1);
    }

    #[test]
    fn test_loss_after_max_attempts() {
        let mut store = MemoryStore::new();
        let config = GameConfig {
            max_attempts: 3,
            ..GameConfig::default()
        };
        let mut session = session_with(&mut store, config);
        session.start(today());

        assert_eq!(session.submit_guess("Pythagorean Theorem").unwrap().notice, GuessNotice::Incorrect);
        session.submit_guess("Four Color Theorem").unwrap();
        let outcome = session.submit_guess("Bayes' Theorem").unwrap();

        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(
            outcome.notice,
            GuessNotice::GameOver {
                theorem_name: "Noether's Theorem".to_string()
            }
        );
        let stats = session.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.current_streak, 0);
        assert!(stats.guesses.is_empty());
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn test_duplicate_guess_not_counted() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        let start = Instant::now();

        session.submit_guess_at("Pythagorean Theorem", start).unwrap();
        assert_eq!(
            session.submit_guess_at("  PYTHAGOREAN theorem! ", start),
            Err(GuessRejection::Duplicate("  PYTHAGOREAN theorem! ".to_string()))
        );
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.guesses().len(), 1);
        assert_eq!(session.duplicate_highlight(start), Some("  PYTHAGOREAN theorem! "));
        assert_eq!(session.duplicate_highlight(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_new_duplicate_rearms_highlight() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        let start = Instant::now();

        session.submit_guess_at("Pythagorean Theorem", start).unwrap();
        session.submit_guess_at("Four Color Theorem", start).unwrap();
        let _ = session.submit_guess_at("Pythagorean Theorem", start);
        let later = start + Duration::from_secs(2);
        let _ = session.submit_guess_at("four color theorem", later);

        assert_eq!(session.duplicate_highlight(start + Duration::from_secs(4)), Some("four color theorem"));
        assert_eq!(session.duplicate_highlight(later + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_empty_guess_rejected() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        assert_eq!(session.submit_guess(""), Err(GuessRejection::EmptyGuess));
        assert_eq!(session.submit_guess("   "), Err(GuessRejection::EmptyGuess));
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn test_unrecognized_guess_consumes_attempt() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        session.submit_guess("Riemann Hypothesis").unwrap();

        let feedback = &session.guesses()[0];
        assert_eq!(feedback.guessed_theorem_name, "Riemann Hypothesis");
        assert!(!feedback.properties_feedback.is_recognized());
        assert_eq!(session.remaining_attempts(), 9);
    }

    #[test]
    fn test_hint_granted_once() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);

        let hint = session.request_hint().unwrap();
        assert_eq!(hint.message, "The Proposed By is Emmy Noether.");
        assert!(session.hint_used());
        assert!(session.request_hint().is_none());
        assert_eq!(session.revealed_hint(), Some("The Proposed By is Emmy Noether."));
    }

    #[test]
    fn test_hint_skips_correct_attributes() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        // Shares the target's region
        session.submit_guess("Pigeonhole Principle").unwrap();

        let candidates = hint_candidates(session.target().unwrap(), session.guesses());
        assert_eq!(candidates.len(), 7);
        assert!(candidates
            .iter()
            .all(|c| c.attribute != crate::catalog::Attribute::GeographicalRegion));

        let hint = session.request_hint().unwrap();
        assert_ne!(hint.message, NO_HINT_MESSAGE);
        assert_eq!(hint.message, "The Proposed By is Emmy Noether.");
    }

    #[test]
    fn test_restore_same_day() {
        let mut store = MemoryStore::new();
        {
            let mut session = started(&mut store);
            session.submit_guess("Pythagorean Theorem").unwrap();
            session.request_hint().unwrap();
        }

        let mut session = session_with(&mut store, GameConfig::default());
        let outcome = session.start(today());
        assert!(outcome.restored);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.guesses()[0].guess_string, "Pythagorean Theorem");
        assert!(session.hint_used());
        assert!(session.revealed_hint().is_some());
        assert!(session.request_hint().is_none());
    }

    #[test]
    fn test_restored_win_does_not_recount() {
        let mut store = MemoryStore::new();
        {
            let mut session = started(&mut store);
            session.submit_guess("Noether's Theorem").unwrap();
        }

        let mut session = started(&mut store);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.submit_guess("Pythagorean Theorem"), Err(GuessRejection::NotPlaying));
    }

    #[test]
    fn test_rollover_next_day_keeps_stats() {
        let mut store = MemoryStore::new();
        {
            let mut session = started(&mut store);
            session.submit_guess("Noether's Theorem").unwrap();
        }

        let tomorrow = today().succ_opt().unwrap();
        let mut session = session_with(&mut store, GameConfig::default());
        let outcome = session.start(tomorrow);

        assert!(!outcome.restored);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.target().unwrap().id, "pythagorean");
        assert_eq!(session.attempts_used(), 0);
        assert!(!session.hint_used());
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.stats().current_streak, 1);
    }

    #[test]
    fn test_rollover_when_theorem_changes() {
        let catalog = builtin_catalog();
        let other = catalog.get("pythagorean").unwrap();
        let record = SessionRecord {
            theorem_id: other.id.clone(),
            date: today(),
            guesses: vec![evaluate("Four Color Theorem", other, &catalog)],
            attempt: 1,
            status: GameStatus::Playing,
            hint_used: false,
            revealed_hint: None,
        };
        let mut store = MemoryStore::with_entries([(SESSION_KEY, encode(&record).unwrap())]);

        let mut session = session_with(&mut store, GameConfig::default());
        assert!(!session.start(today()).restored);
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn test_corrupt_records_fall_back() {
        let mut store = MemoryStore::with_entries([
            (STATS_KEY, "[1, 2, 3]"),
            (SESSION_KEY, r#"{"theoremId": "noether_theorem", "attempt": "three"}"#),
        ]);
        let mut session = session_with(&mut store, GameConfig::default());
        let outcome = session.start(today());

        assert!(!outcome.restored);
        assert_eq!(session.stats(), &GameStats::default());
        assert_eq!(session.status(), GameStatus::Playing);
        drop(session);

        let saved = store.entries().get(SESSION_KEY).unwrap();
        let record: SessionRecord = serde_json::from_str(saved).unwrap();
        assert_eq!(record.theorem_id, "noether_theorem");
    }

    #[test]
    fn test_restored_stats_at_limit_do_not_overflow() {
        let saved = format!(
            r#"{{"gamesPlayed":{},"gamesWon":0,"currentStreak":0,"maxStreak":0,"guesses":{{}}}}"#,
            u32::MAX
        );
        let mut store = MemoryStore::with_entries([(STATS_KEY, saved)]);
        let mut session = started(&mut store);
        assert_eq!(session.stats().games_played, u32::MAX);

        let outcome = session.submit_guess("Noether's Theorem").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(session.stats().games_played, u32::MAX);
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.stats().current_streak, 1);
    }

    #[test]
    fn test_storage_failure_is_not_fatal() {
        let mut session = GameSession::new(
            builtin_catalog(),
            FailingStore,
            StepRng::new(0, 0),
            GameConfig::default(),
        );
        let start = session.start(today());
        assert!(matches!(start.storage_warning, Some(TheoremGuessError::StorageError(_))));

        let outcome = session.submit_guess("Noether's Theorem").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.storage_warning.is_some());
        assert_eq!(session.stats().games_won, 1);
    }

    #[test]
    fn test_share_text() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        assert!(session.share_text("https://example.com").is_none());

        session.submit_guess("Pythagorean Theorem").unwrap();
        session.submit_guess("Noether's Theorem").unwrap();
        assert_eq!(
            session.share_text("https://example.com").unwrap(),
            "TheoremGuess 10/16/2026 - 2/10\n\nCan you guess today's theorem? https://example.com"
        );
    }

    #[test]
    fn test_share_text_after_loss() {
        let mut store = MemoryStore::new();
        let config = GameConfig {
            max_attempts: 1,
            ..GameConfig::default()
        };
        let mut session = session_with(&mut store, config);
        session.start(today());
        session.submit_guess("Pythagorean Theorem").unwrap();
        assert_eq!(
            session.share_text("").unwrap(),
            "TheoremGuess 10/16/2026 - X/1\n\nCan you guess today's theorem?"
        );
    }

    #[test]
    fn test_play_again() {
        let mut store = MemoryStore::new();
        let mut session = started(&mut store);
        assert!(session.play_again(today()).is_none());

        session.request_hint().unwrap();
        session.submit_guess("Noether's Theorem").unwrap();
        let outcome = session.play_again(today()).unwrap();

        assert!(!outcome.restored);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.attempts_used(), 0);
        assert!(!session.hint_used());
        assert_eq!(session.revealed_hint(), None);
        assert_eq!(session.stats().games_played, 1);
    }
}
