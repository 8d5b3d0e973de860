//! Pattern analysis section - detects sequences, repeated runs and
//! year-like substrings.

use super::SectionResult;
use crate::charset::decimal_value;
use crate::violation::Violation;

const SEQUENCE_WINDOW: usize = 3;
const RUN_LENGTH: usize = 3;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const KEYBOARD_ROWS: [&str; 4] = ["1234567890", "qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Returns `true` if the case-folded password contains any 3-character
/// window of the alphabet, the digits or a keyboard row, forward or
/// reversed.
pub fn has_sequence(password: &str) -> bool {
    let folded = password.to_lowercase();
    [ALPHABET, DIGITS]
        .into_iter()
        .chain(KEYBOARD_ROWS)
        .any(|base| {
            (0..=base.len() - SEQUENCE_WINDOW).any(|i| {
                let seq = &base[i..i + SEQUENCE_WINDOW];
                let rev: String = seq.chars().rev().collect();
                folded.contains(seq) || folded.contains(&rev)
            })
        })
}

/// Returns `true` if any character repeats at least three times in a row.
/// Case-sensitive.
pub fn has_repeated_runs(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(RUN_LENGTH)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// Returns `true` if any run of four decimal digits, in any script, reads
/// as a year in 1900..=2099.
pub fn has_year_like(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(4).any(|w| {
        let year = w
            .iter()
            .try_fold(0u32, |acc, &c| decimal_value(c).map(|d| acc * 10 + d));
        matches!(year, Some(1900..=2099))
    })
}

/// Analyzes password for sequences, repeated runs and years.
pub fn pattern_analysis_section(password: &str) -> SectionResult {
    [
        (has_sequence(password), Violation::EasySequence),
        (has_repeated_runs(password), Violation::RepeatedCharacters),
        (has_year_like(password), Violation::YearLike),
    ]
    .into_iter()
    .filter_map(|(found, violation)| found.then_some(violation))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_letters_and_digits() {
        assert!(has_sequence("abc123"));
        assert!(has_sequence("xxABCxx"));
        assert!(!has_sequence("xzqv"));
    }

    #[test]
    fn test_sequence_reversed() {
        assert!(has_sequence("321"));
        assert!(has_sequence("zyx"));
    }

    #[test]
    fn test_sequence_keyboard_rows() {
        assert!(has_sequence("Qwe!"));
        assert!(has_sequence("lkj"));
        assert!(has_sequence("mnb"));
        assert!(has_sequence("890"));
    }

    #[test]
    fn test_sequence_short_input() {
        assert!(!has_sequence(""));
        assert!(!has_sequence("ab"));
    }

    #[test]
    fn test_repeated_runs() {
        assert!(has_repeated_runs("aaab"));
        assert!(has_repeated_runs("x111"));
        assert!(!has_repeated_runs("aabb"));
        assert!(!has_repeated_runs("aAa"));
        assert!(!has_repeated_runs(""));
    }

    #[test]
    fn test_year_like() {
        assert!(has_year_like("my1999pw"));
        assert!(has_year_like("2099"));
        assert!(has_year_like("x1900"));
        assert!(!has_year_like("my2150pw"));
        assert!(!has_year_like("1899"));
        assert!(!has_year_like("19a9"));
        assert!(!has_year_like("199"));
    }

    #[test]
    fn test_year_like_non_ascii_digits() {
        assert!(has_year_like("x١٩٩٩x"));
        assert!(has_year_like("pw२०२४"));
        assert!(!has_year_like("x١٨٩٩x"));
        assert!(!has_year_like("19½9"));
    }

    #[test]
    fn test_pattern_section_order() {
        assert_eq!(
            pattern_analysis_section("abc1111999"),
            vec![
                Violation::EasySequence,
                Violation::RepeatedCharacters,
                Violation::YearLike,
            ]
        );
    }

    #[test]
    fn test_pattern_section_clean_password() {
        assert!(pattern_analysis_section("Rnd!Pq7#Wz").is_empty());
    }
}
