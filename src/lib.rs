//! TheoremGuess Core - guess comparison engine and daily session state
//!
//! Players guess a famous theorem; every guess is compared attribute by
//! attribute against the theorem of the day and the feedback drives the
//! next guess. This crate holds the comparison rules, the catalog, and
//! the session reducer with its persistence boundary. Python bindings via
//! PyO3 are available behind the `python` feature.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod normalize;
pub mod session;

#[cfg(feature = "python")]
mod python;

pub use catalog::{builtin_catalog, Attribute, Catalog, EducationLevel, Theorem};
pub use compare::{compare_attribute, compare_year, AttributeState, YearState};
pub use config::{DatePolicy, GameConfig};
pub use error::{GuessRejection, Result, TheoremGuessError};
pub use evaluator::{evaluate, GuessFeedback, TheoremPropertiesFeedback};
pub use normalize::normalize;
pub use session::{GameSession, GameStats, GameStatus, MemoryStore, SessionStore};
