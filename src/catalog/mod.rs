//! Theorem catalog: the fixed, ordered list of guessable theorems

mod builtin;
mod theorem;

pub use builtin::*;
pub use theorem::*;

use crate::error::{Result, TheoremGuessError};
use crate::normalize::normalize;
use ahash::{AHashMap, AHashSet};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

/// Ordered theorem catalog with a normalized-name index
#[derive(Debug, Clone)]
pub struct Catalog {
    theorems: Vec<Theorem>,
    /// Normalized name -> position of the first theorem carrying it
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and repeated ids.
    ///
    /// Names that collide after normalization are allowed; lookups resolve
    /// to the earliest entry.
    pub fn new(theorems: Vec<Theorem>) -> Result<Self> {
        if theorems.is_empty() {
            return Err(TheoremGuessError::EmptyCatalog);
        }

        let mut ids = AHashSet::with_capacity(theorems.len());
        for theorem in &theorems {
            if !ids.insert(theorem.id.as_str()) {
                return Err(TheoremGuessError::DuplicateTheoremId(theorem.id.clone()));
            }
        }

        Ok(Self::index(theorems))
    }

    /// Parse a JSON array of theorems
    pub fn from_json(json: &str) -> Result<Self> {
        let theorems: Vec<Theorem> = serde_json::from_str(json)?;
        Self::new(theorems)
    }

    fn index(theorems: Vec<Theorem>) -> Self {
        let mut by_name: AHashMap<String, usize> = AHashMap::with_capacity(theorems.len());
        for (position, theorem) in theorems.iter().enumerate() {
            let key = normalize(&theorem.name);
            if let Some(&first) = by_name.get(&key) {
                warn!(
                    name = %theorem.name,
                    kept = %theorems[first].id,
                    id = %theorem.id,
                    "theorem name collides after normalization; lookups use the earlier entry"
                );
                continue;
            }
            by_name.insert(key, position);
        }
        debug!(count = theorems.len(), "catalog indexed");
        Self { theorems, by_name }
    }

    /// Find the theorem whose normalized name equals the normalized input
    pub fn find_by_name(&self, name: &str) -> Option<&Theorem> {
        self.by_name
            .get(&normalize(name))
            .map(|&position| &self.theorems[position])
    }

    pub fn get(&self, id: &str) -> Option<&Theorem> {
        self.theorems.iter().find(|t| t.id == id)
    }

    pub fn theorems(&self) -> &[Theorem] {
        &self.theorems
    }

    pub fn len(&self) -> usize {
        self.theorems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theorems.is_empty()
    }

    /// Display names in catalog order, for guess pickers
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.theorems.iter().map(|t| t.name.as_str())
    }

    /// The theorem everyone plays on `date`.
    ///
    /// Indexed by the 1-based day of the year modulo the catalog size, so the
    /// pick depends only on the date and the catalog order.
    pub fn theorem_of_the_day(&self, date: NaiveDate) -> &Theorem {
        let index = date.ordinal() as usize % self.theorems.len();
        &self.theorems[index]
    }
}
