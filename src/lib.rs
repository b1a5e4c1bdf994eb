//! Password strength classification library
//!
//! Scores a password against five composition criteria (length, uppercase,
//! lowercase, digit, special character) and classifies the score as
//! `Weak`, `Moderate` or `Strong`, with hints for every unmet criterion.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced async evaluation adapter
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Implements `Serialize` for verdicts
//! - `cli`: Builds the `pwd-verdict` command-line adapter
//!
//! # Environment Variables
//!
//! Read by [`Policy::from_env`]:
//!
//! - `PWD_MIN_LENGTH`: minimum password length (default: 8)
//! - `PWD_SPECIAL_CHARS`: characters counting as special
//! - `PWD_MODERATE_AT` / `PWD_STRONG_AT`: score thresholds (default: 3 / 5)
//!
//! # Example
//!
//! ```rust
//! use pwd_verdict::{evaluate, Strength};
//!
//! let verdict = evaluate("Deepika123");
//!
//! assert_eq!(verdict.score, 4);
//! assert_eq!(verdict.strength, Strength::Moderate);
//! assert_eq!(verdict.missing_names(), vec!["special-character"]);
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod policy;
mod sections;
mod verdict;

#[cfg(feature = "cli")]
pub mod cli;

// Public API
pub use criteria::{CriteriaResult, Criterion, CRITERIA_COUNT};
pub use evaluator::{
    evaluate, evaluate_bytes, evaluate_optional, evaluate_password_strength,
    evaluate_with_policy, InputError,
};
pub use policy::{
    Policy, PolicyError, DEFAULT_MIN_LENGTH, DEFAULT_MODERATE_AT, DEFAULT_SPECIAL_CHARS,
    DEFAULT_STRONG_AT,
};
pub use sections::PatternWarning;
pub use verdict::{Strength, Verdict};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
