//! Theorem catalog entries

use crate::error::TheoremGuessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far into a mathematics education a theorem is usually met
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    Elementary,
    Undergraduate,
    Graduate,
    #[serde(rename = "Modern Research")]
    ModernResearch,
}

impl EducationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::Elementary => "Elementary",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::ModernResearch => "Modern Research",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = TheoremGuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Elementary" => Ok(EducationLevel::Elementary),
            "Undergraduate" => Ok(EducationLevel::Undergraduate),
            "Graduate" => Ok(EducationLevel::Graduate),
            "Modern Research" => Ok(EducationLevel::ModernResearch),
            other => Err(TheoremGuessError::InvalidRecord(format!(
                "unknown education level: {other}"
            ))),
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comparable theorem attribute, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    ProposedBy,
    ProvedBy,
    YearProposed,
    YearProved,
    Subfield,
    EducationLevel,
    GeographicalRegion,
    ProofTechnique,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::ProposedBy,
        Attribute::ProvedBy,
        Attribute::YearProposed,
        Attribute::YearProved,
        Attribute::Subfield,
        Attribute::EducationLevel,
        Attribute::GeographicalRegion,
        Attribute::ProofTechnique,
    ];

    /// Human-readable label shown to players
    pub fn label(self) -> &'static str {
        match self {
            Attribute::ProposedBy => "Proposed By",
            Attribute::ProvedBy => "Proved By",
            Attribute::YearProposed => "Year Proposed",
            Attribute::YearProved => "Year Proved",
            Attribute::Subfield => "Subfield",
            Attribute::EducationLevel => "Education Level",
            Attribute::GeographicalRegion => "Geographical Region",
            Attribute::ProofTechnique => "Proof Technique",
        }
    }

    /// Whether the attribute may list several `/`- or `,`-separated values
    pub fn is_multi_value(self) -> bool {
        matches!(
            self,
            Attribute::ProposedBy | Attribute::ProvedBy | Attribute::GeographicalRegion
        )
    }

    pub fn is_year(self) -> bool {
        matches!(self, Attribute::YearProposed | Attribute::YearProved)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Theorem catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theorem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proved_by: Option<String>,
    /// Negative years are BC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_proposed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_proved: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfield: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographical_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_technique: Option<String>,
}

impl Theorem {
    /// Create a theorem with only identity and name set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            proposed_by: None,
            proved_by: None,
            year_proposed: None,
            year_proved: None,
            subfield: None,
            education_level: None,
            geographical_region: None,
            proof_technique: None,
        }
    }

    /// Text value of a non-year attribute
    pub fn text(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::ProposedBy => self.proposed_by.as_deref(),
            Attribute::ProvedBy => self.proved_by.as_deref(),
            Attribute::Subfield => self.subfield.as_deref(),
            Attribute::EducationLevel => self.education_level.map(EducationLevel::as_str),
            Attribute::GeographicalRegion => self.geographical_region.as_deref(),
            Attribute::ProofTechnique => self.proof_technique.as_deref(),
            Attribute::YearProposed | Attribute::YearProved => None,
        }
    }

    /// Value of a year attribute
    pub fn year(&self, attribute: Attribute) -> Option<i32> {
        match attribute {
            Attribute::YearProposed => self.year_proposed,
            Attribute::YearProved => self.year_proved,
            _ => None,
        }
    }

    /// Display form of any attribute, `None` when the theorem leaves it unset
    /// or blank
    pub fn display_value(&self, attribute: Attribute) -> Option<String> {
        if attribute.is_year() {
            self.year(attribute).map(|y| y.to_string())
        } else {
            self.text(attribute)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }
    }
}
