//! Feedback records produced for each guess

use crate::catalog::Attribute;
use crate::compare::{AttributeState, YearState};
use serde::{Deserialize, Serialize};

/// Guessed value, target value and verdict for a text attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guessed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<String>,
    pub state: AttributeState,
}

/// Guessed value, target value and verdict for a year attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct YearFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guessed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<i32>,
    pub state: YearState,
}

/// Per-attribute feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TheoremPropertiesFeedback {
    /// Canonical name of the recognized theorem; unset for unknown guesses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guessed_theorem_name: Option<String>,
    pub proposed_by: TextFeedback,
    pub proved_by: TextFeedback,
    pub year_proposed: YearFeedback,
    pub year_proved: YearFeedback,
    pub subfield: TextFeedback,
    pub education_level: TextFeedback,
    pub geographical_region: TextFeedback,
    pub proof_technique: TextFeedback,
}

impl TheoremPropertiesFeedback {
    /// Whether the guess matched a catalog entry
    pub fn is_recognized(&self) -> bool {
        self.guessed_theorem_name.is_some()
    }

    /// Whether `attribute` was judged correct
    pub fn is_correct(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::YearProposed => self.year_proposed.state == YearState::Correct,
            Attribute::YearProved => self.year_proved.state == YearState::Correct,
            _ => self.text(attribute).is_some_and(|f| f.state == AttributeState::Correct),
        }
    }

    /// Feedback for a text attribute
    pub fn text(&self, attribute: Attribute) -> Option<&TextFeedback> {
        match attribute {
            Attribute::ProposedBy => Some(&self.proposed_by),
            Attribute::ProvedBy => Some(&self.proved_by),
            Attribute::Subfield => Some(&self.subfield),
            Attribute::EducationLevel => Some(&self.education_level),
            Attribute::GeographicalRegion => Some(&self.geographical_region),
            Attribute::ProofTechnique => Some(&self.proof_technique),
            Attribute::YearProposed | Attribute::YearProved => None,
        }
    }

    /// Feedback for a year attribute
    pub fn year(&self, attribute: Attribute) -> Option<&YearFeedback> {
        match attribute {
            Attribute::YearProposed => Some(&self.year_proposed),
            Attribute::YearProved => Some(&self.year_proved),
            _ => None,
        }
    }
}

/// Everything the player learns from one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GuessFeedback {
    /// The guess exactly as submitted
    pub guess_string: String,
    /// Canonical catalog name, or the raw guess when unrecognized
    pub guessed_theorem_name: String,
    pub properties_feedback: TheoremPropertiesFeedback,
}
