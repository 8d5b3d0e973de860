//! Length section - checks password minimum length.

use super::SectionResult;
use crate::violation::Violation;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_LENGTH {
        return vec![Violation::TooShort];
    }
    Vec::new()
}
