//! Built-in theorem list

use super::{Catalog, EducationLevel, Theorem};
use once_cell::sync::Lazy;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::index(builtin_theorems())));

/// Shared handle to the built-in catalog
pub fn builtin_catalog() -> Arc<Catalog> {
    BUILTIN.clone()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    proposed_by: &str,
    proved_by: &str,
    years: (i32, i32),
    subfield: &str,
    education_level: EducationLevel,
    geographical_region: &str,
    proof_technique: &str,
) -> Theorem {
    Theorem {
        id: id.to_string(),
        name: name.to_string(),
        proposed_by: Some(proposed_by.to_string()),
        proved_by: Some(proved_by.to_string()),
        year_proposed: Some(years.0),
        year_proved: Some(years.1),
        subfield: Some(subfield.to_string()),
        education_level: Some(education_level),
        geographical_region: Some(geographical_region.to_string()),
        proof_technique: Some(proof_technique.to_string()),
    }
}

/// The ten theorems shipped with the game, in daily rotation order
pub fn builtin_theorems() -> Vec<Theorem> {
    use EducationLevel::*;

    vec![
        // Dates for Pythagoras are approximate
        entry(
            "pythagorean",
            "Pythagorean Theorem",
            "Pythagoras",
            "Pythagoras",
            (-530, -530),
            "Geometry",
            Elementary,
            "Ancient Greece",
            "Geometric Algebra",
        ),
        entry(
            "fermat_last",
            "Fermat's Last Theorem",
            "Pierre de Fermat",
            "Andrew Wiles",
            (1637, 1994),
            "Number Theory",
            Graduate,
            "France / United Kingdom",
            "Modular Elliptic Curves",
        ),
        entry(
            "goedel_incompleteness_1",
            "Gödel's First Incompleteness Theorem",
            "Kurt Gödel",
            "Kurt Gödel",
            (1931, 1931),
            "Logic",
            Graduate,
            "Austria / United States",
            "Diagonalization",
        ),
        entry(
            "central_limit",
            "Central Limit Theorem",
            "Abraham de Moivre",
            "Pierre-Simon Laplace",
            (1733, 1810),
            "Probability",
            Undergraduate,
            "France / United Kingdom",
            "Characteristic Functions",
        ),
        entry(
            "fundamental_calculus",
            "Fundamental Theorem of Calculus",
            "Isaac Newton / Gottfried Wilhelm Leibniz",
            "Isaac Newton / Gottfried Wilhelm Leibniz",
            (1670, 1670),
            "Analysis",
            Undergraduate,
            "United Kingdom / Germany",
            "Limit Processes",
        ),
        entry(
            "pigeonhole_principle",
            "Pigeonhole Principle",
            "Johann Peter Gustav Lejeune Dirichlet",
            "Johann Peter Gustav Lejeune Dirichlet",
            (1834, 1834),
            "Combinatorics",
            Elementary,
            "Germany",
            "Proof by Contradiction",
        ),
        entry(
            "bayes_theorem",
            "Bayes' Theorem",
            "Thomas Bayes",
            "Pierre-Simon Laplace",
            (1763, 1812),
            "Probability",
            Undergraduate,
            "United Kingdom / France",
            "Conditional Probability",
        ),
        entry(
            "chinese_remainder_theorem",
            "Chinese Remainder Theorem",
            "Sun Tzu",
            "Sun Tzu",
            (300, 300),
            "Number Theory",
            Undergraduate,
            "Ancient China",
            "Constructive Algorithm",
        ),
        entry(
            "four_color_theorem",
            "Four Color Theorem",
            "Francis Guthrie",
            "Kenneth Appel / Wolfgang Haken",
            (1852, 1976),
            "Graph Theory",
            Graduate,
            "United Kingdom / United States",
            "Computer-Assisted Proof",
        ),
        entry(
            "noether_theorem",
            "Noether's Theorem",
            "Emmy Noether",
            "Emmy Noether",
            (1915, 1918),
            "Abstract Algebra / Theoretical Physics",
            Graduate,
            "Germany",
            "Variational Symmetry",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::new(builtin_theorems()).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_builtin_names_unique_after_normalization() {
        let catalog = builtin_catalog();
        for theorem in catalog.theorems() {
            assert_eq!(catalog.find_by_name(&theorem.name).unwrap().id, theorem.id);
        }
    }
}
