//! One-time hint selection

use crate::catalog::{Attribute, Theorem};
use crate::evaluator::{GuessFeedback, TheoremPropertiesFeedback};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shown when every defined attribute is already known
pub const NO_HINT_MESSAGE: &str =
    "No more specific hints available, or all properties already guessed correctly!";

/// A target attribute that may be revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintCandidate {
    pub attribute: Attribute,
    pub value: String,
}

impl HintCandidate {
    /// Player-facing sentence, e.g. "The Subfield is Geometry."
    pub fn message(&self) -> String {
        format!("The {} is {}.", self.attribute.label(), self.value)
    }
}

/// Feedback of the newest guess that matched a catalog theorem
pub fn latest_recognized(guesses: &[GuessFeedback]) -> Option<&TheoremPropertiesFeedback> {
    guesses
        .iter()
        .rev()
        .map(|g| &g.properties_feedback)
        .find(|p| p.is_recognized())
}

/// Attributes of `target` that are defined and not yet guessed correctly.
///
/// Without any recognized guess every defined attribute qualifies.
pub fn hint_candidates(target: &Theorem, guesses: &[GuessFeedback]) -> Vec<HintCandidate> {
    let latest = latest_recognized(guesses);

    Attribute::ALL
        .iter()
        .filter(|&&attribute| latest.map_or(true, |p| !p.is_correct(attribute)))
        .filter_map(|&attribute| {
            target
                .display_value(attribute)
                .map(|value| HintCandidate { attribute, value })
        })
        .collect()
}

/// Pick a hint uniformly at random among the candidates
pub fn pick_hint<R: Rng + ?Sized>(target: &Theorem, guesses: &[GuessFeedback], rng: &mut R) -> String {
    hint_candidates(target, guesses)
        .choose(rng)
        .map(HintCandidate::message)
        .unwrap_or_else(|| NO_HINT_MESSAGE.to_string())
}
