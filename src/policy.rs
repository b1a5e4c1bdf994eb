//! Policy configuration
//!
//! Holds the tunable constants the classifier works with: minimum length,
//! special-character set and the score thresholds for each strength category.

use std::borrow::Cow;
use thiserror::Error;

use crate::criteria::CRITERIA_COUNT;
use crate::verdict::Strength;

/// Minimum number of characters for the length criterion.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Characters counting towards the special-character criterion.
///
/// Underscore and whitespace are not part of the set.
pub const DEFAULT_SPECIAL_CHARS: &str = r#"!@#$%^&*()-+=[]{}|\:;"'<>,.?/~`"#;

/// Lowest score classified as `Moderate`.
pub const DEFAULT_MODERATE_AT: u8 = 3;

/// Lowest score classified as `Strong`.
pub const DEFAULT_STRONG_AT: u8 = 5;

const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
const ENV_SPECIAL_CHARS: &str = "PWD_SPECIAL_CHARS";
const ENV_MODERATE_AT: &str = "PWD_MODERATE_AT";
const ENV_STRONG_AT: &str = "PWD_STRONG_AT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Minimum length must be at least 1, got {0}")]
    InvalidMinLength(usize),
    #[error("Special character set is empty")]
    EmptySpecialChars,
    #[error("Special character set contains alphanumeric character '{0}'")]
    AlphanumericSpecialChar(char),
    #[error("Invalid thresholds: need 1 <= moderate ({moderate_at}) < strong ({strong_at}) <= 5")]
    InvalidThresholds { moderate_at: u8, strong_at: u8 },
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
}

/// Classification policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    min_length: usize,
    special_chars: Cow<'static, str>,
    moderate_at: u8,
    strong_at: u8,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_chars: Cow::Borrowed(DEFAULT_SPECIAL_CHARS),
            moderate_at: DEFAULT_MODERATE_AT,
            strong_at: DEFAULT_STRONG_AT,
        }
    }
}

impl Policy {
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn special_chars(&self) -> &str {
        &self.special_chars
    }

    pub fn moderate_at(&self) -> u8 {
        self.moderate_at
    }

    pub fn strong_at(&self) -> u8 {
        self.strong_at
    }

    /// Replaces the minimum length.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidMinLength` for 0.
    pub fn with_min_length(mut self, min_length: usize) -> Result<Self, PolicyError> {
        self.min_length = min_length;
        self.validated()
    }

    /// Replaces the special-character set.
    ///
    /// # Errors
    ///
    /// Returns error if the set is empty or contains an ASCII letter or digit.
    pub fn with_special_chars(
        mut self,
        special_chars: impl Into<Cow<'static, str>>,
    ) -> Result<Self, PolicyError> {
        self.special_chars = special_chars.into();
        self.validated()
    }

    /// Replaces the lowest `Moderate` and `Strong` scores.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidThresholds` unless
    /// `1 <= moderate_at < strong_at <= 5`.
    pub fn with_thresholds(mut self, moderate_at: u8, strong_at: u8) -> Result<Self, PolicyError> {
        self.moderate_at = moderate_at;
        self.strong_at = strong_at;
        self.validated()
    }

    /// Returns `true` if `c` belongs to the special-character set.
    pub fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(c)
    }

    /// Maps a score to its strength category.
    ///
    /// Boundaries are inclusive at the lower end of each category, so every
    /// score falls in exactly one of them.
    pub fn classify(&self, score: u8) -> Strength {
        if score >= self.strong_at {
            Strength::Strong
        } else if score >= self.moderate_at {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    // Every constructor funnels through here, so a `Policy` value is always valid.
    fn validated(self) -> Result<Self, PolicyError> {
        if self.min_length == 0 {
            return Err(PolicyError::InvalidMinLength(self.min_length));
        }
        if self.special_chars.is_empty() {
            return Err(PolicyError::EmptySpecialChars);
        }
        if let Some(c) = self.special_chars.chars().find(|c| c.is_ascii_alphanumeric()) {
            return Err(PolicyError::AlphanumericSpecialChar(c));
        }
        if self.moderate_at == 0
            || self.moderate_at >= self.strong_at
            || self.strong_at > CRITERIA_COUNT
        {
            return Err(PolicyError::InvalidThresholds {
                moderate_at: self.moderate_at,
                strong_at: self.strong_at,
            });
        }
        Ok(self)
    }

    /// Builds a policy from environment variables, falling back to defaults.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`: minimum length (default: 8)
    /// - `PWD_SPECIAL_CHARS`: special-character set
    /// - `PWD_MODERATE_AT`: lowest `Moderate` score (default: 3)
    /// - `PWD_STRONG_AT`: lowest `Strong` score (default: 5)
    ///
    /// # Errors
    ///
    /// Returns error if a variable cannot be parsed or the resulting policy
    /// does not validate.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Policy::default();

        if let Some(min_length) = parse_env::<usize>(ENV_MIN_LENGTH)? {
            policy.min_length = min_length;
        }
        if let Ok(special_chars) = std::env::var(ENV_SPECIAL_CHARS) {
            policy.special_chars = Cow::Owned(special_chars);
        }
        if let Some(moderate_at) = parse_env::<u8>(ENV_MODERATE_AT)? {
            policy.moderate_at = moderate_at;
        }
        if let Some(strong_at) = parse_env::<u8>(ENV_STRONG_AT)? {
            policy.strong_at = strong_at;
        }

        let policy = policy.validated().inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy from environment rejected: {}", _e);
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            min_length = policy.min_length,
            moderate_at = policy.moderate_at,
            strong_at = policy.strong_at,
            "Policy loaded from environment"
        );

        Ok(policy)
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, PolicyError> {
    match std::env::var(key) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>();
            match parsed {
                Ok(parsed) => Ok(Some(parsed)),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Invalid value for {}: {:?}", key, value);
                    Err(PolicyError::InvalidEnvValue { key, value })
                }
            }
        }
        Err(_) => Ok(None),
    }
}
