//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::CriteriaResult;
use crate::policy::Policy;
use crate::sections::{
    character_variety_section, length_section, pattern_analysis_section, SectionResult,
};
use crate::verdict::Verdict;

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Password input is not valid text: {0}")]
    InvalidInputType(#[from] std::str::Utf8Error),
}

/// Evaluates a password against the default policy.
pub fn evaluate(password: &str) -> Verdict {
    evaluate_with_policy(password, &Policy::default())
}

/// Evaluates a password against `policy`.
///
/// Total over all strings: the empty string satisfies no criterion and is
/// classified like any other input.
pub fn evaluate_with_policy(password: &str, policy: &Policy) -> Verdict {
    // Orchestrator: every section runs, none short-circuits
    let sections: [fn(&str, &Policy) -> SectionResult; 2] =
        [length_section, character_variety_section];

    let mut criteria = CriteriaResult::default();
    for section_fn in sections {
        for (criterion, met) in section_fn(password, policy) {
            criteria.record(criterion, met);
        }
    }

    let score = criteria.score();
    let strength = policy.classify(score);
    let missing = criteria.unmet();
    let feedback = missing.iter().map(|c| c.hint(policy)).collect();
    let warnings = pattern_analysis_section(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, %strength, missing = missing.len(), "password evaluated");

    Verdict {
        score,
        strength,
        criteria,
        missing,
        feedback,
        warnings,
    }
}

/// Evaluates a secret password; the secret is exposed only for this call.
pub fn evaluate_password_strength(password: &SecretString, policy: &Policy) -> Verdict {
    evaluate_with_policy(password.expose_secret(), policy)
}

/// Evaluates input that may be absent. Missing input counts as the empty password.
pub fn evaluate_optional(password: Option<&SecretString>, policy: &Policy) -> Verdict {
    match password {
        Some(password) => evaluate_password_strength(password, policy),
        None => evaluate_with_policy("", policy),
    }
}

/// Evaluates raw input bytes.
///
/// # Errors
///
/// Returns `InputError::InvalidInputType` if the bytes are not UTF-8 text.
pub fn evaluate_bytes(password: &[u8], policy: &Policy) -> Result<Verdict, InputError> {
    let password = std::str::from_utf8(password)?;
    Ok(evaluate_with_policy(password, policy))
}

/// Debounced async evaluation that sends the verdict via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` was cancelled meanwhile (a newer
/// keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    policy: &Policy,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before it started");
        return;
    }

    let verdict = evaluate_password_strength(password, policy);

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criterion;
    use crate::policy::PolicyError;
    use crate::sections::PatternWarning;
    use crate::verdict::Strength;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let verdict = evaluate("");
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.strength, Strength::Weak);
        assert_eq!(verdict.missing, Criterion::ALL.to_vec());
        assert_eq!(verdict.feedback.len(), 5);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn test_evaluate_short_lowercase_digits() {
        let verdict = evaluate("abc123");
        assert_eq!(verdict.score, 2);
        assert_eq!(verdict.strength, Strength::Weak);
        assert_eq!(
            verdict.missing_names(),
            vec!["length", "uppercase", "special-character"]
        );
        assert_eq!(
            verdict.feedback,
            vec![
                "Use at least 8 characters.".to_string(),
                "Add an uppercase letter.".to_string(),
                "Add a special character (e.g. !@#$).".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let verdict = evaluate("Deepika123");
        assert_eq!(verdict.score, 4);
        assert_eq!(verdict.strength, Strength::Moderate);
        assert_eq!(verdict.missing, vec![Criterion::SpecialCharacter]);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let verdict = evaluate("Deepika@2827!");
        assert_eq!(verdict.score, 5);
        assert_eq!(verdict.strength, Strength::Strong);
        assert!(verdict.is_strong());
        assert!(verdict.missing.is_empty());
        assert!(verdict.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_underscores_only_length() {
        let verdict = evaluate("________");
        assert_eq!(verdict.score, 1);
        assert_eq!(verdict.strength, Strength::Weak);
        assert!(verdict.criteria.min_length);
        assert_eq!(verdict.warnings, vec![PatternWarning::RepeatedCharacters]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for pwd in ["", "abc123", "Deepika123", "Deepika@2827!", "________"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_strength_determined_by_score() {
        let policy = Policy::default();
        let samples = [
            "", "a", "aB", "aB1", "aB1!", "aB1!xxxx", "12345678", "ABCDEFGH!", "____",
            "Deepika123", "Deepika@2827!", "ééééééééé", "🙂🙂🙂🙂🙂🙂🙂🙂",
        ];
        for pwd in samples {
            let verdict = evaluate_with_policy(pwd, &policy);
            assert!(verdict.score <= 5);
            assert_eq!(verdict.strength, policy.classify(verdict.score), "{pwd}");
            assert_eq!(verdict.score as usize + verdict.missing.len(), 5);
        }
    }

    #[test]
    fn test_satisfying_new_criterion_never_lowers_score() {
        let bases = ["", "abc", "ABC", "1234", "!!", "abcdefgh", "Deepika123"];
        let additions = ['a', 'Z', '7', '@', '_', ' '];
        for base in bases {
            let before = evaluate(base).score;
            for c in additions {
                let after = evaluate(&format!("{base}{c}")).score;
                assert!(after >= before, "{base:?} + {c:?}: {after} < {before}");
            }
        }
    }

    #[test]
    fn test_evaluate_with_custom_policy() {
        let policy = Policy::default()
            .with_min_length(12)
            .and_then(|p| p.with_special_chars("_"))
            .unwrap();
        let verdict = evaluate_with_policy("snake_Case1", &policy);
        assert_eq!(verdict.missing, vec![Criterion::MinLength]);
        assert_eq!(verdict.strength, Strength::Moderate);
        assert_eq!(verdict.feedback, vec!["Use at least 12 characters.".to_string()]);
    }

    #[test]
    fn test_empty_password_scores_zero_under_every_constructible_policy() {
        assert_eq!(
            Policy::default().with_min_length(0),
            Err(PolicyError::InvalidMinLength(0))
        );
        assert_eq!(
            Policy::default().with_special_chars("a"),
            Err(PolicyError::AlphanumericSpecialChar('a'))
        );

        let policies = [
            Policy::default(),
            Policy::default().with_min_length(1).unwrap(),
            Policy::default().with_special_chars(" _").unwrap(),
            Policy::default().with_thresholds(1, 2).unwrap(),
        ];
        for policy in &policies {
            let verdict = evaluate_with_policy("", policy);
            assert_eq!(verdict.score, 0, "{policy:?}");
            assert_eq!(verdict.strength, Strength::Weak, "{policy:?}");
        }
    }

    #[test]
    fn test_evaluate_password_strength_secret() {
        let verdict = evaluate_password_strength(&secret("Deepika@2827!"), &Policy::default());
        assert_eq!(verdict, evaluate("Deepika@2827!"));
    }

    #[test]
    fn test_evaluate_optional_missing_is_empty() {
        let policy = Policy::default();
        assert_eq!(evaluate_optional(None, &policy), evaluate(""));
        assert_eq!(
            evaluate_optional(Some(&secret("Deepika123")), &policy),
            evaluate("Deepika123")
        );
    }

    #[test]
    fn test_evaluate_bytes_valid_text() {
        let verdict = evaluate_bytes(b"Deepika123", &Policy::default()).unwrap();
        assert_eq!(verdict.strength, Strength::Moderate);
    }

    #[test]
    fn test_evaluate_bytes_invalid_text() {
        let result = evaluate_bytes(&[0x66, 0x6f, 0xff, 0xfe], &Policy::default());
        assert!(matches!(result, Err(InputError::InvalidInputType(_))));
    }
}
