//! Pattern analysis section - detects repetitive and sequential patterns.
//!
//! Findings are advisory: they are reported alongside the verdict but never
//! change the score.

use std::fmt;

const SEQUENCE_WINDOW: usize = 3;
const REPEAT_RUN: usize = 3;

const ALPHABETS: [&str; 4] = [
    "abcdefghijklmnopqrstuvwxyz",
    "zyxwvutsrqponmlkjihgfedcba",
    "0123456789",
    "9876543210",
];

const KEYBOARD_ROWS: [&str; 6] = [
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "poiuytrewq",
    "lkjhgfdsa",
    "mnbvcxz",
];

/// Advisory finding about a weak pattern in the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PatternWarning {
    /// Same character three or more times in a row (`aaa`)
    RepeatedCharacters,
    /// A two- or three-character group repeated back to back (`abab`, `xk9xk9`)
    RepeatedSequence,
    /// Three or more consecutive letters or digits, ascending or descending (`abc`, `321`)
    SequentialCharacters,
    /// Three or more adjacent keys of a QWERTY letter row (`qwe`, `lkj`)
    KeyboardSequence,
}

impl PatternWarning {
    pub const fn message(self) -> &'static str {
        match self {
            Self::RepeatedCharacters => "Avoid repeated characters like aaa.",
            Self::RepeatedSequence => "Avoid repeated patterns like abab or abcabc.",
            Self::SequentialCharacters => "Avoid sequences like abc or 123.",
            Self::KeyboardSequence => "Avoid keyboard runs like qwe or asd.",
        }
    }
}

impl fmt::Display for PatternWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Analyzes password for repetitive, sequential and keyboard-row patterns.
///
/// Each kind of warning is reported at most once.
pub fn pattern_analysis_section(password: &str) -> Vec<PatternWarning> {
    let chars: Vec<char> = password.chars().collect();
    let mut warnings = Vec::new();
    if chars.len() < REPEAT_RUN {
        return warnings;
    }

    if has_repeated_run(&chars) {
        warnings.push(PatternWarning::RepeatedCharacters);
    }
    if has_repeated_group(&chars) {
        warnings.push(PatternWarning::RepeatedSequence);
    }
    if has_run_within(&chars, &ALPHABETS) {
        warnings.push(PatternWarning::SequentialCharacters);
    }
    if has_run_within(&chars, &KEYBOARD_ROWS) {
        warnings.push(PatternWarning::KeyboardSequence);
    }

    warnings
}

fn has_repeated_run(chars: &[char]) -> bool {
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= REPEAT_RUN {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

// Groups of a single repeated character are left to `has_repeated_run`.
fn has_repeated_group(chars: &[char]) -> bool {
    (2..=3).any(|n| {
        chars.windows(2 * n).any(|w| {
            let (head, tail) = w.split_at(n);
            head == tail && head.iter().any(|&c| c != head[0])
        })
    })
}

fn has_run_within(chars: &[char], sequences: &[&str]) -> bool {
    chars.windows(SEQUENCE_WINDOW).any(|window| {
        let run: String = window.iter().map(|c| c.to_ascii_lowercase()).collect();
        sequences.iter().any(|seq| seq.contains(run.as_str()))
    })
}
