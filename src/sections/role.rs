//! Role section - rejects passwords that embed the node role/username.

use crate::violation::Violation;

/// Case-insensitive containment of `role` in `password`.
///
/// Returns `None` for an empty role: the check is skipped, not failed.
pub fn role_section(password: &str, role: &str) -> Option<Violation> {
    if role.is_empty() {
        return None;
    }
    password
        .to_lowercase()
        .contains(&role.to_lowercase())
        .then_some(Violation::ContainsRole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_section_case_insensitive() {
        assert_eq!(role_section("xxADMINxx", "Admin"), Some(Violation::ContainsRole));
    }

    #[test]
    fn test_role_section_absent() {
        assert_eq!(role_section("Tr0ub4dor&3", "guest"), None);
    }

    #[test]
    fn test_role_section_empty_role_skipped() {
        assert_eq!(role_section("anything", ""), None);
        assert_eq!(role_section("", ""), None);
    }
}
