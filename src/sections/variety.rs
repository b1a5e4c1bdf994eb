//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use super::SectionResult;
use crate::criteria::Criterion;
use crate::policy::Policy;

/// Checks which character classes the password contains.
///
/// Letter and digit classes are ASCII only; the special class is whatever the
/// policy's set contains.
pub fn character_variety_section(password: &str, policy: &Policy) -> SectionResult {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| policy.is_special(c));

    vec![
        (Criterion::Uppercase, has_upper),
        (Criterion::Lowercase, has_lower),
        (Criterion::Digit, has_digit),
        (Criterion::SpecialCharacter, has_special),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(password: &str) -> Vec<Criterion> {
        character_variety_section(password, &Policy::default())
            .into_iter()
            .filter(|(_, met)| !met)
            .map(|(c, _)| c)
            .collect()
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        assert_eq!(missing("lowercase123!"), vec![Criterion::Uppercase]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        assert_eq!(missing("UPPERCASE123!"), vec![Criterion::Lowercase]);
    }

    #[test]
    fn test_variety_section_missing_digits() {
        assert_eq!(missing("NoNumbers!"), vec![Criterion::Digit]);
    }

    #[test]
    fn test_variety_section_missing_special() {
        assert_eq!(missing("NoSpecial123"), vec![Criterion::SpecialCharacter]);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert!(missing("HasAll123!@#").is_empty());
    }

    #[test]
    fn test_variety_section_underscore_is_not_special() {
        assert_eq!(
            missing("________"),
            vec![
                Criterion::Uppercase,
                Criterion::Lowercase,
                Criterion::Digit,
                Criterion::SpecialCharacter
            ]
        );
    }

    #[test]
    fn test_variety_section_non_ascii_letters_do_not_count() {
        let result = missing("ÄÖÜäöü");
        assert!(result.contains(&Criterion::Uppercase));
        assert!(result.contains(&Criterion::Lowercase));
    }

    #[test]
    fn test_variety_section_custom_special_set() {
        let policy = Policy::default().with_special_chars("_").unwrap();
        let result = character_variety_section("snake_case", &policy);
        assert!(result.contains(&(Criterion::SpecialCharacter, true)));
    }
}
