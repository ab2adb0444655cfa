//! Guess evaluation: turn a guess into per-attribute feedback

mod feedback;

pub use feedback::*;

use crate::catalog::{Attribute, Catalog, Theorem};
use crate::compare::{compare_attribute, compare_year, AttributeState, YearState};

/// Evaluate `guess` against `target`.
///
/// The guess is resolved against `catalog` by normalized name (first entry
/// wins on collisions). An unknown guess gets `NotApplicable` everywhere but
/// still carries the target's values so they can be revealed later.
pub fn evaluate(guess: &str, target: &Theorem, catalog: &Catalog) -> GuessFeedback {
    let properties_feedback = match catalog.find_by_name(guess) {
        Some(guessed) => compare_theorems(guessed, target),
        None => unrecognized(target),
    };

    GuessFeedback {
        guess_string: guess.to_string(),
        guessed_theorem_name: properties_feedback
            .guessed_theorem_name
            .clone()
            .unwrap_or_else(|| guess.to_string()),
        properties_feedback,
    }
}

/// Compare every attribute of a recognized theorem with the target's
pub fn compare_theorems(guessed: &Theorem, target: &Theorem) -> TheoremPropertiesFeedback {
    let text = |attribute: Attribute| {
        let g = guessed.text(attribute);
        let t = target.text(attribute);
        TextFeedback {
            guessed: g.map(str::to_string),
            correct: t.map(str::to_string),
            state: compare_attribute(g, t, attribute.is_multi_value()),
        }
    };
    let year = |attribute: Attribute| {
        let g = guessed.year(attribute);
        let t = target.year(attribute);
        YearFeedback {
            guessed: g,
            correct: t,
            state: compare_year(g, t),
        }
    };

    TheoremPropertiesFeedback {
        guessed_theorem_name: Some(guessed.name.clone()),
        proposed_by: text(Attribute::ProposedBy),
        proved_by: text(Attribute::ProvedBy),
        year_proposed: year(Attribute::YearProposed),
        year_proved: year(Attribute::YearProved),
        subfield: text(Attribute::Subfield),
        education_level: text(Attribute::EducationLevel),
        geographical_region: text(Attribute::GeographicalRegion),
        proof_technique: text(Attribute::ProofTechnique),
    }
}

fn unrecognized(target: &Theorem) -> TheoremPropertiesFeedback {
    let text = |attribute: Attribute| TextFeedback {
        guessed: None,
        correct: target.text(attribute).map(str::to_string),
        state: AttributeState::NotApplicable,
    };
    let year = |attribute: Attribute| YearFeedback {
        guessed: None,
        correct: target.year(attribute),
        state: YearState::NotApplicable,
    };

    TheoremPropertiesFeedback {
        guessed_theorem_name: None,
        proposed_by: text(Attribute::ProposedBy),
        proved_by: text(Attribute::ProvedBy),
        year_proposed: year(Attribute::YearProposed),
        year_proved: year(Attribute::YearProved),
        subfield: text(Attribute::Subfield),
        education_level: text(Attribute::EducationLevel),
        geographical_region: text(Attribute::GeographicalRegion),
        proof_technique: text(Attribute::ProofTechnique),
    }
}
