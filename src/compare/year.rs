//! Year comparison by century distance

use super::century;
use serde::{Deserialize, Serialize};

/// Where the target year sits relative to the guessed one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearState {
    Correct,
    /// Later, within the same century
    TargetHigher,
    /// Earlier, within the same century
    TargetLower,
    /// Later, in another century or across the BC/AD boundary
    TargetMuchHigher,
    /// Earlier, in another century or across the BC/AD boundary
    TargetMuchLower,
    NotApplicable,
}

impl YearState {
    pub fn as_str(self) -> &'static str {
        match self {
            YearState::Correct => "correct",
            YearState::TargetHigher => "target_higher",
            YearState::TargetLower => "target_lower",
            YearState::TargetMuchHigher => "target_much_higher",
            YearState::TargetMuchLower => "target_much_lower",
            YearState::NotApplicable => "not_applicable",
        }
    }

    /// The state seen from the other side of the comparison
    pub fn reversed(self) -> Self {
        match self {
            YearState::TargetHigher => YearState::TargetLower,
            YearState::TargetLower => YearState::TargetHigher,
            YearState::TargetMuchHigher => YearState::TargetMuchLower,
            YearState::TargetMuchLower => YearState::TargetMuchHigher,
            other => other,
        }
    }
}

/// Compare a guessed year with the target year.
///
/// Crossing the BC/AD boundary always counts as a "much" distance, even
/// between neighbouring centuries.
pub fn compare_year(guessed: Option<i32>, target: Option<i32>) -> YearState {
    let (guessed, target) = match (guessed, target) {
        (Some(g), Some(t)) => (g, t),
        _ => return YearState::NotApplicable,
    };

    if guessed == target {
        return YearState::Correct;
    }

    let later = target > guessed;
    let same_era = (guessed < 0) == (target < 0);

    if same_era && century(guessed) == century(target) {
        if later {
            YearState::TargetHigher
        } else {
            YearState::TargetLower
        }
    } else if later {
        YearState::TargetMuchHigher
    } else {
        YearState::TargetMuchLower
    }
}
