//! Character variety section - checks for uppercase, lowercase, numbers,
//! special chars, and rejects whitespace.

use super::SectionResult;
use crate::charset::CharsetProfile;
use crate::violation::Violation;

/// Checks if the password contains every required character class and no
/// whitespace.
pub fn character_variety_section(password: &str) -> SectionResult {
    let profile = CharsetProfile::of(password);

    [
        (!profile.has_upper, Violation::MissingUppercase),
        (!profile.has_lower, Violation::MissingLowercase),
        (!profile.has_digit, Violation::MissingDigit),
        (!profile.has_symbol, Violation::MissingSymbol),
        (profile.has_space, Violation::ContainsWhitespace),
    ]
    .into_iter()
    .filter_map(|(failed, violation)| failed.then_some(violation))
    .collect()
}
