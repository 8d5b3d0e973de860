//! Composition checker - which character classes a password uses.

use unicode_categories::UnicodeCategories;

/// ASCII punctuation accepted as "special characters".
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>?/|\\`~";

/// Character classes observed in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsetProfile {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub has_space: bool,
}

impl CharsetProfile {
    /// Builds the profile for `password`. Total over any input; the empty
    /// string yields an all-false profile.
    pub fn of(password: &str) -> Self {
        let mut profile = Self::default();
        for c in password.chars() {
            profile.has_upper |= c.is_uppercase();
            profile.has_lower |= c.is_lowercase();
            profile.has_digit |= is_decimal_digit(c);
            profile.has_symbol |= is_symbol(c);
            profile.has_space |= c.is_whitespace();
        }
        profile
    }
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Unicode decimal digit (category Nd), in any script.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.is_number_decimal_digit()
}

/// Value of a decimal digit in any script, `None` for anything else.
///
/// Nd digits come in contiguous runs of ten starting at zero, so the value
/// is the distance back to the start of the run, modulo 10.
pub fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    Some(offset % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_empty_password() {
        assert_eq!(CharsetProfile::of(""), CharsetProfile::default());
    }

    #[test]
    fn test_profile_all_classes() {
        let profile = CharsetProfile::of("Ab1! ");
        assert!(profile.has_upper);
        assert!(profile.has_lower);
        assert!(profile.has_digit);
        assert!(profile.has_symbol);
        assert!(profile.has_space);
    }

    #[test]
    fn test_profile_unicode_letters() {
        let profile = CharsetProfile::of("Éé");
        assert!(profile.has_upper);
        assert!(profile.has_lower);
        assert!(!profile.has_digit);
        assert!(!profile.has_symbol);
    }

    #[test]
    fn test_profile_number_forms_are_not_digits() {
        for pwd in ["½", "Ⅻ", "௰", "Abcdefg½!"] {
            assert!(!CharsetProfile::of(pwd).has_digit, "{pwd}");
        }
    }

    #[test]
    fn test_profile_non_ascii_decimal_digits() {
        assert!(CharsetProfile::of("١").has_digit);
        assert!(CharsetProfile::of("७").has_digit);
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(decimal_value('7'), Some(7));
        assert_eq!(decimal_value('٠'), Some(0));
        assert_eq!(decimal_value('١'), Some(1));
        assert_eq!(decimal_value('٩'), Some(9));
        // fullwidth digits
        assert_eq!(decimal_value('５'), Some(5));
        // mathematical bold nine, inside back-to-back digit runs
        assert_eq!(decimal_value('\u{1D7D7}'), Some(9));
        assert_eq!(decimal_value('\u{1D7D8}'), Some(0));
        assert_eq!(decimal_value('½'), None);
        assert_eq!(decimal_value('a'), None);
    }

    #[test]
    fn test_symbol_set_excludes_non_ascii_punctuation() {
        assert!(is_symbol('\\'));
        assert!(is_symbol('"'));
        assert!(!is_symbol('§'));
        assert!(!is_symbol(' '));
        assert!(!is_symbol('a'));
    }
}
