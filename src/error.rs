//! Error types for the TheoremGuess core

use thiserror::Error;

/// Main error type for the TheoremGuess core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoremGuessError {
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate theorem id: {0}")]
    DuplicateTheoremId(String),

    #[error("Theorem not found: {0}")]
    TheoremNotFound(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Guess count {count} outside 1..={max}")]
    InvalidGuessCount { count: u32, max: u32 },

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<serde_json::Error> for TheoremGuessError {
    fn from(err: serde_json::Error) -> Self {
        TheoremGuessError::DeserializationError(err.to_string())
    }
}

/// Why a guess submission was turned away.
///
/// None of these consume an attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    #[error("The game is not in progress")]
    NotPlaying,

    #[error("No attempts left")]
    NoAttemptsLeft,

    #[error("No theorem selected")]
    EmptyGuess,

    #[error("You've already tried \"{0}\".")]
    Duplicate(String),
}

#[cfg(feature = "python")]
mod py {
    use super::{GuessRejection, TheoremGuessError};
    use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
    use pyo3::PyErr;

    impl From<TheoremGuessError> for PyErr {
        fn from(err: TheoremGuessError) -> PyErr {
            match err {
                TheoremGuessError::TheoremNotFound(_) | TheoremGuessError::DuplicateTheoremId(_) => {
                    PyKeyError::new_err(err.to_string())
                }
                TheoremGuessError::StorageError(_) => PyRuntimeError::new_err(err.to_string()),
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    impl From<GuessRejection> for PyErr {
        fn from(err: GuessRejection) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Result type alias for the TheoremGuess core
pub type Result<T> = std::result::Result<T, TheoremGuessError>;
