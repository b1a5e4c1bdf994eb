//! Password evaluation sections
//!
//! Each section checks one family of rules over the password.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::{pattern_analysis_section, PatternWarning};
pub use variety::character_variety_section;

/// Result type for criteria sections: every criterion the section checked,
/// paired with whether the password met it.
pub type SectionResult = Vec<(crate::criteria::Criterion, bool)>;
