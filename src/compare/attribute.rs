//! Scalar and multi-value text attribute comparison

use crate::normalize::{normalize, normalize_item};
use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Separator between alternatives in a multi-value attribute, e.g.
/// `"Isaac Newton / Gottfried Wilhelm Leibniz"` or `"France, UK"`
static VALUE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/\s*|\s*,\s*").expect("static regex"));

/// Outcome of comparing one text attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeState {
    Correct,
    Incorrect,
    Partial,
    NotApplicable,
}

impl AttributeState {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeState::Correct => "correct",
            AttributeState::Incorrect => "incorrect",
            AttributeState::Partial => "partial",
            AttributeState::NotApplicable => "not_applicable",
        }
    }
}

/// Compare a guessed attribute value with the target's.
///
/// A value missing on either side can't be judged and yields
/// [`AttributeState::NotApplicable`]. With `multi_value` set, values that
/// differ as a whole but share at least one `/`- or `,`-separated item are
/// [`AttributeState::Partial`].
pub fn compare_attribute(
    guessed: Option<&str>,
    target: Option<&str>,
    multi_value: bool,
) -> AttributeState {
    let (guessed, target) = match (guessed, target) {
        (Some(g), Some(t)) => (g.trim(), t.trim()),
        _ => return AttributeState::NotApplicable,
    };

    if normalize(guessed) == normalize(target) {
        return AttributeState::Correct;
    }

    if multi_value && !guessed.is_empty() && !target.is_empty() && items_overlap(guessed, target) {
        return AttributeState::Partial;
    }

    AttributeState::Incorrect
}

/// Split a multi-value attribute into normalized, non-empty items
pub fn split_items(value: &str) -> SmallVec<[String; 4]> {
    VALUE_DELIMITER
        .split(value.trim())
        .map(|item| normalize_item(item.trim()))
        .filter(|item| !item.is_empty())
        .collect()
}

fn items_overlap(guessed: &str, target: &str) -> bool {
    let target_items: AHashSet<String> = split_items(target).into_iter().collect();
    if target_items.is_empty() {
        return false;
    }
    split_items(guessed)
        .iter()
        .any(|item| target_items.contains(item))
}
