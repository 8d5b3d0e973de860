//! Password strength evaluator - pass/fail verdict and numeric score.
//!
//! The verdict and the score come from separate rule sets. A password can
//! be labeled weak and still score high, and both values are logged
//! independently.

use std::fmt;

use serde::Serialize;

use crate::charset::CharsetProfile;
use crate::sections::{
    blacklist_section, character_variety_section, has_repeated_runs, has_sequence, has_year_like,
    length_section, pattern_analysis_section, role_section, SectionResult, MIN_LENGTH,
};
use crate::violation::Violation;

pub const MAX_SCORE: u8 = 100;

const LONG_PASSWORD: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    Strong,
    Weak,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Strong => f.write_str("Strong"),
            StrengthLabel::Weak => f.write_str("Weak"),
        }
    }
}

/// Outcome of the pass/fail rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthVerdict {
    /// Failed rules, in evaluation order.
    pub violations: Vec<Violation>,
}

impl StrengthVerdict {
    pub fn label(&self) -> StrengthLabel {
        if self.violations.is_empty() {
            StrengthLabel::Strong
        } else {
            StrengthLabel::Weak
        }
    }

    pub fn is_strong(&self) -> bool {
        self.label() == StrengthLabel::Strong
    }

    /// Display strings for each violation.
    pub fn reasons(&self) -> Vec<&'static str> {
        self.violations.iter().map(Violation::message).collect()
    }
}

/// Evaluates the pass/fail rules against `password`.
///
/// Order: length, character classes, whitespace, patterns, blacklist, then
/// role leakage. An empty `role_context` skips the role check.
pub fn check_strength(password: &str, role_context: &str) -> StrengthVerdict {
    let sections: [(&str, fn(&str) -> SectionResult); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
        ("blacklist", blacklist_section),
    ];

    let mut violations = Vec::new();
    for (_section_name, section_fn) in sections {
        let found = section_fn(password);
        #[cfg(feature = "tracing")]
        {
            if !found.is_empty() {
                tracing::trace!("section {} reported {:?}", _section_name, found);
            }
        }
        violations.extend(found);
    }
    violations.extend(role_section(password, role_context));

    let verdict = StrengthVerdict { violations };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "strength verdict: {} ({} reasons)",
        verdict.label(),
        verdict.violations.len()
    );

    verdict
}

/// Numeric strength in `0..=100`.
///
/// Length bonus: +20 at 8 chars, +10 more at 12. Classes: +15 each for
/// upper, lower, digit and +25 for a symbol. Penalties: -15 sequence,
/// -10 repeated run, -5 year, -15 blacklist hit.
pub fn password_score(password: &str) -> u8 {
    let profile = CharsetProfile::of(password);
    let len = password.chars().count();
    let mut score: i32 = 0;

    if len >= MIN_LENGTH {
        score += 20;
    }
    if len >= LONG_PASSWORD {
        score += 10;
    }
    if profile.has_upper {
        score += 15;
    }
    if profile.has_lower {
        score += 15;
    }
    if profile.has_digit {
        score += 15;
    }
    if profile.has_symbol {
        score += 25;
    }

    if has_sequence(password) {
        score -= 15;
    }
    if has_repeated_runs(password) {
        score -= 10;
    }
    if has_year_like(password) {
        score -= 5;
    }
    if crate::blacklist::contains_common_word(password) {
        score -= 15;
    }

    score.clamp(0, MAX_SCORE as i32) as u8
}
