//! Composition criteria and the flag set recording which of them hold.

use std::fmt;
use std::str::FromStr;

use crate::policy::Policy;

/// Number of criteria a password is scored against.
pub const CRITERIA_COUNT: u8 = 5;

/// A single composition rule.
///
/// Variants are declared in canonical order; feedback lists follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Criterion {
    /// At least `Policy::min_length` characters
    MinLength,
    /// At least one of `A`-`Z`
    Uppercase,
    /// At least one of `a`-`z`
    Lowercase,
    /// At least one of `0`-`9`
    Digit,
    /// At least one character from `Policy::special_chars`
    SpecialCharacter,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; CRITERIA_COUNT as usize] = [
        Criterion::MinLength,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::SpecialCharacter,
    ];

    /// Stable machine-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinLength => "length",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Digit => "digit",
            Self::SpecialCharacter => "special-character",
        }
    }

    /// User-facing hint telling how to satisfy this criterion.
    pub fn hint(self, policy: &Policy) -> String {
        match self {
            Self::MinLength => format!("Use at least {} characters.", policy.min_length()),
            Self::Uppercase => "Add an uppercase letter.".to_string(),
            Self::Lowercase => "Add a lowercase letter.".to_string(),
            Self::Digit => "Add a digit.".to_string(),
            Self::SpecialCharacter => {
                let sample: String = policy.special_chars().chars().take(4).collect();
                format!("Add a special character (e.g. {sample}).")
            }
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Criterion::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| {
                format!("Invalid criterion: {s}. Use: length, uppercase, lowercase, digit, special-character")
            })
    }
}

/// Which criteria a password satisfied. All five are always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CriteriaResult {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special_character: bool,
}

impl CriteriaResult {
    /// Records the outcome of one criterion.
    pub fn record(&mut self, criterion: Criterion, met: bool) {
        match criterion {
            Criterion::MinLength => self.min_length = met,
            Criterion::Uppercase => self.uppercase = met,
            Criterion::Lowercase => self.lowercase = met,
            Criterion::Digit => self.digit = met,
            Criterion::SpecialCharacter => self.special_character = met,
        }
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::MinLength => self.min_length,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Digit => self.digit,
            Criterion::SpecialCharacter => self.special_character,
        }
    }

    /// Count of satisfied criteria, in `0..=CRITERIA_COUNT`.
    pub fn score(&self) -> u8 {
        Criterion::ALL.iter().filter(|&&c| self.is_met(c)).count() as u8
    }

    /// Unmet criteria in canonical order.
    pub fn unmet(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|&c| !self.is_met(c))
            .collect()
    }
}
