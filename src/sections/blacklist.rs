//! Blacklist section - checks if password contains a common password.

use super::SectionResult;
use crate::blacklist::contains_common_word;
use crate::violation::Violation;

pub fn blacklist_section(password: &str) -> SectionResult {
    if contains_common_word(password) {
        return vec![Violation::CommonWord];
    }
    Vec::new()
}
