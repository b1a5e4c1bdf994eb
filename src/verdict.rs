//! Evaluation output: strength categories and the verdict handed to the
//! presentation layer.

use std::fmt;
use std::str::FromStr;

use crate::criteria::{CriteriaResult, Criterion};
use crate::sections::PatternWarning;

/// Ordinal strength category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }

    /// Visual cue a UI may key its rendering on.
    pub const fn color_hint(self) -> &'static str {
        match self {
            Self::Weak => "red",
            Self::Moderate => "orange",
            Self::Strong => "green",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "moderate" => Ok(Self::Moderate),
            "strong" => Ok(Self::Strong),
            _ => Err(format!("Invalid strength: {s}. Use: weak, moderate, strong")),
        }
    }
}

/// Result of a single password evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    /// Number of satisfied criteria
    pub score: u8,
    pub strength: Strength,
    pub criteria: CriteriaResult,
    /// Unmet criteria, canonical order
    pub missing: Vec<Criterion>,
    /// One hint per entry of `missing`, same order
    pub feedback: Vec<String>,
    /// Advisory pattern findings; they do not affect `score`
    pub warnings: Vec<PatternWarning>,
}

impl Verdict {
    pub fn is_strong(&self) -> bool {
        self.strength == Strength::Strong
    }

    /// Machine names of the unmet criteria.
    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(|c| c.name()).collect()
    }
}
