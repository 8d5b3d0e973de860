//! Rule violations and their display messages.

use std::fmt;

/// A failed strength rule. Declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
    ContainsWhitespace,
    EasySequence,
    RepeatedCharacters,
    YearLike,
    CommonWord,
    ContainsRole,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Violation::TooShort => "Password must be at least 8 characters long.",
            Violation::MissingUppercase => "Password must contain at least one uppercase letter.",
            Violation::MissingLowercase => "Password must contain at least one lowercase letter.",
            Violation::MissingDigit => "Password must contain at least one number.",
            Violation::MissingSymbol => "Password must contain at least one special character.",
            Violation::ContainsWhitespace => "Password should not contain spaces.",
            Violation::EasySequence => "Contains easy sequences (e.g., '123', 'abcd', 'qwe').",
            Violation::RepeatedCharacters => "Contains repeated characters (e.g., 'aaa', '111').",
            Violation::YearLike => "Contains a year-like pattern (e.g., 1999, 2024).",
            Violation::CommonWord => "Contains common/blacklisted words.",
            Violation::ContainsRole => "Password contains the node role/username. Avoid that.",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_message() {
        assert_eq!(Violation::YearLike.to_string(), Violation::YearLike.message());
    }
}
