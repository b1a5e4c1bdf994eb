//! Length section - checks password minimum length.

use super::SectionResult;
use crate::criteria::Criterion;
use crate::policy::Policy;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &str, policy: &Policy) -> SectionResult {
    let met = password.chars().count() >= policy.min_length();
    vec![(Criterion::MinLength, met)]
}
