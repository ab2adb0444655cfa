//! Python bindings
//!
//! The catalog is cached in Rust memory once per process; each
//! `TheoremGame` owns its own session and an in-memory store that the host
//! reads back through `saved_state` and writes wherever it persists data.

use crate::catalog::{builtin_catalog, Catalog, EducationLevel, Theorem};
use crate::config::GameConfig;
use crate::error::TheoremGuessError;
use crate::evaluator::evaluate;
use crate::session::{GameSession, MemoryStore};
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

// ============================================================================
// Cached Catalog
// ============================================================================

/// Global catalog; the built-in one is used until `init_catalog` is called
static CACHED_CATALOG: OnceCell<Arc<RwLock<Arc<Catalog>>>> = OnceCell::new();

fn current_catalog() -> Arc<Catalog> {
    CACHED_CATALOG
        .get()
        .map(|cached| cached.read().clone())
        .unwrap_or_else(builtin_catalog)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Helper to get attribute from either dict or object
fn get_attr<'py>(obj: &Bound<'py, PyAny>, name: &str) -> PyResult<Bound<'py, PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten().filter(|v| !v.is_none())
    } else {
        obj.getattr(name).ok().filter(|v| !v.is_none())
    }
}

fn extract_theorem(obj: &Bound<'_, PyAny>) -> PyResult<Theorem> {
    let mut theorem = Theorem::new(
        get_attr(obj, "id")?.extract::<String>()?,
        get_attr(obj, "name")?.extract::<String>()?,
    );
    theorem.proposed_by = get_attr_opt(obj, "proposed_by").map(|v| v.extract()).transpose()?;
    theorem.proved_by = get_attr_opt(obj, "proved_by").map(|v| v.extract()).transpose()?;
    theorem.year_proposed = get_attr_opt(obj, "year_proposed").map(|v| v.extract()).transpose()?;
    theorem.year_proved = get_attr_opt(obj, "year_proved").map(|v| v.extract()).transpose()?;
    theorem.subfield = get_attr_opt(obj, "subfield").map(|v| v.extract()).transpose()?;
    theorem.geographical_region =
        get_attr_opt(obj, "geographical_region").map(|v| v.extract()).transpose()?;
    theorem.proof_technique = get_attr_opt(obj, "proof_technique").map(|v| v.extract()).transpose()?;

    if let Some(level) = get_attr_opt(obj, "education_level") {
        let level: String = level.extract()?;
        theorem.education_level = Some(level.parse::<EducationLevel>()?);
    }
    Ok(theorem)
}

fn parse_date(date: Option<&str>) -> PyResult<Option<NaiveDate>> {
    date.map(|d| {
        d.parse::<NaiveDate>()
            .map_err(|e| PyValueError::new_err(format!("Invalid date {d:?}: {e}")))
    })
    .transpose()
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| TheoremGuessError::from(e).into())
}

// ============================================================================
// Python Functions
// ============================================================================

/// Replace the process-wide catalog
///
/// # Arguments
/// * `theorems` - List of theorem dicts or objects, or None for the built-in catalog
#[pyfunction]
#[pyo3(signature = (theorems=None))]
fn init_catalog(theorems: Option<&Bound<'_, PyList>>) -> PyResult<usize> {
    let catalog = match theorems {
        Some(list) => {
            let theorems = list
                .iter()
                .map(|item| extract_theorem(&item))
                .collect::<PyResult<Vec<_>>>()?;
            Arc::new(Catalog::new(theorems)?)
        }
        None => builtin_catalog(),
    };
    let count = catalog.len();

    if let Some(existing) = CACHED_CATALOG.get() {
        *existing.write() = catalog;
    } else {
        let _ = CACHED_CATALOG.set(Arc::new(RwLock::new(catalog)));
    }
    Ok(count)
}

/// Check if a custom catalog was installed
#[pyfunction]
fn is_catalog_initialized() -> bool {
    CACHED_CATALOG.get().is_some()
}

/// Names of every theorem, in catalog order
#[pyfunction]
fn theorem_names() -> Vec<String> {
    current_catalog().names().map(str::to_string).collect()
}

/// Compare a guess against a theorem and return the feedback as JSON
///
/// # Raises
/// KeyError if `target_id` is not in the catalog
#[pyfunction]
fn evaluate_guess(guess: &str, target_id: &str) -> PyResult<String> {
    let catalog = current_catalog();
    let target = catalog
        .get(target_id)
        .ok_or_else(|| TheoremGuessError::TheoremNotFound(target_id.to_string()))?;
    to_json(&evaluate(guess, target, &catalog))
}

/// Theorem of the day as JSON; `date` is `YYYY-MM-DD`, default today (local)
#[pyfunction]
#[pyo3(signature = (date=None))]
fn theorem_of_the_day(date: Option<&str>) -> PyResult<String> {
    let date = parse_date(date)?.unwrap_or_else(|| GameConfig::default().date_policy.today());
    to_json(current_catalog().theorem_of_the_day(date))
}

// ============================================================================
// TheoremGame
// ============================================================================

/// A daily puzzle session
#[pyclass(name = "TheoremGame")]
pub struct PyTheoremGame {
    inner: GameSession<MemoryStore, StdRng>,
}

#[pymethods]
impl PyTheoremGame {
    /// # Arguments
    /// * `config_json` - Optional JSON game config
    /// * `saved_state` - Previously saved `{key: json}` entries
    /// * `seed` - Seed for hint selection, random if omitted
    #[new]
    #[pyo3(signature = (config_json=None, saved_state=None, seed=None))]
    fn new(
        config_json: Option<&str>,
        saved_state: Option<&Bound<'_, PyDict>>,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json)?,
            None => GameConfig::default(),
        };

        let mut entries = Vec::new();
        if let Some(saved) = saved_state {
            for (key, value) in saved.iter() {
                entries.push((key.extract::<String>()?, value.extract::<String>()?));
            }
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            inner: GameSession::new(current_catalog(), MemoryStore::with_entries(entries), rng, config),
        })
    }

    /// Resolve the puzzle; returns whether saved progress was restored
    #[pyo3(signature = (date=None))]
    fn start(&mut self, date: Option<&str>) -> PyResult<bool> {
        let outcome = match parse_date(date)? {
            Some(date) => self.inner.start(date),
            None => self.inner.start_today(),
        };
        Ok(outcome.restored)
    }

    /// Submit a guess
    ///
    /// # Returns
    /// Dict with `status`, `attempt`, `notice` and `feedback` (JSON)
    ///
    /// # Raises
    /// ValueError if the guess was rejected
    fn submit_guess(&mut self, py: Python<'_>, guess: &str) -> PyResult<Py<PyAny>> {
        let outcome = self.inner.submit_guess(guess)?;
        let feedback = match self.inner.guesses().last() {
            Some(last) => to_json(last)?,
            None => String::new(),
        };

        let dict = PyDict::new(py);
        dict.set_item("status", outcome.status.as_str())?;
        dict.set_item("attempt", outcome.attempt)?;
        dict.set_item("notice", outcome.notice.to_string())?;
        dict.set_item("feedback", feedback)?;
        Ok(dict.into())
    }

    /// Reveal a hint; None if one was already used or the game is over
    fn request_hint(&mut self) -> Option<String> {
        self.inner.request_hint().map(|hint| hint.message)
    }

    #[pyo3(signature = (date=None))]
    fn play_again(&mut self, date: Option<&str>) -> PyResult<bool> {
        let date = parse_date(date)?.unwrap_or_else(|| self.inner.config().date_policy.today());
        Ok(self.inner.play_again(date).is_some())
    }

    #[pyo3(signature = (url=""))]
    fn share_text(&self, url: &str) -> Option<String> {
        self.inner.share_text(url)
    }

    /// Guess currently highlighted as a repeat, if any
    fn duplicate_highlight(&self) -> Option<String> {
        self.inner
            .duplicate_highlight(std::time::Instant::now())
            .map(str::to_string)
    }

    #[getter]
    fn status(&self) -> &'static str {
        self.inner.status().as_str()
    }

    #[getter]
    fn attempts_used(&self) -> u32 {
        self.inner.attempts_used()
    }

    #[getter]
    fn remaining_attempts(&self) -> u32 {
        self.inner.remaining_attempts()
    }

    #[getter]
    fn hint_used(&self) -> bool {
        self.inner.hint_used()
    }

    #[getter]
    fn revealed_hint(&self) -> Option<String> {
        self.inner.revealed_hint().map(str::to_string)
    }

    #[getter]
    fn win_percentage(&self) -> u32 {
        self.inner.stats().win_percentage()
    }

    fn stats_json(&self) -> PyResult<String> {
        to_json(self.inner.stats())
    }

    fn guesses_json(&self) -> PyResult<String> {
        to_json(&self.inner.guesses())
    }

    /// Entries to hand back as `saved_state` next time
    fn saved_state(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        for (key, value) in self.inner.store().entries() {
            dict.set_item(key, value)?;
        }
        Ok(dict.into())
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn theorem_guess_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(is_catalog_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(theorem_names, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_guess, m)?)?;
    m.add_function(wrap_pyfunction!(theorem_of_the_day, m)?)?;
    m.add_class::<PyTheoremGame>()?;
    Ok(())
}
