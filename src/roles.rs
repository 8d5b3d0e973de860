//! Access levels and the role descriptors they map to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const MIN_ACCESS_LEVEL: i64 = 1;
pub const MAX_ACCESS_LEVEL: i64 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessLevelError {
    #[error("Please enter a number between 1 and 5.")]
    NotANumber(String),
    #[error("Invalid access level {0}. Try again.")]
    OutOfRange(i64),
}

/// A validated privilege tier in `1..=5`. Lower is more privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccessLevel(u8);

impl AccessLevel {
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn role(self) -> &'static RoleDescriptor {
        role_access(self.0 as i64)
    }
}

impl TryFrom<i64> for AccessLevel {
    type Error = AccessLevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_ACCESS_LEVEL..=MAX_ACCESS_LEVEL).contains(&value) {
            Ok(AccessLevel(value as u8))
        } else {
            Err(AccessLevelError::OutOfRange(value))
        }
    }
}

impl FromStr for AccessLevel {
    type Err = AccessLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| AccessLevelError::NotANumber(trimmed.to_string()))?;
        AccessLevel::try_from(value)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static description of what an access level grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDescriptor {
    pub name: &'static str,
    pub permissions: &'static str,
    pub inherently_vulnerable: bool,
    pub rationale: &'static str,
}

static ROLES: [RoleDescriptor; 5] = [
    RoleDescriptor {
        name: "Super Admin",
        permissions: "Full system access",
        inherently_vulnerable: true,
        rationale: "Super Admin has unrestricted control; may cause security risk if misused.",
    },
    RoleDescriptor {
        name: "Administrator",
        permissions: "Manage users, settings, and data",
        inherently_vulnerable: false,
        rationale: "Admin has controlled access; safe if proper password and policies exist.",
    },
    RoleDescriptor {
        name: "Power User",
        permissions: "Configure and modify some system settings",
        inherently_vulnerable: false,
        rationale: "Power users have limited admin privileges; low risk.",
    },
    RoleDescriptor {
        name: "Standard User",
        permissions: "Access and modify own data only",
        inherently_vulnerable: false,
        rationale: "Standard users have minimal access; generally safe.",
    },
    RoleDescriptor {
        name: "Guest",
        permissions: "Read-only limited access",
        inherently_vulnerable: true,
        rationale: "Guest accounts can be risky if not monitored; potential entry point.",
    },
];

pub static UNKNOWN_ROLE: RoleDescriptor = RoleDescriptor {
    name: "Unknown",
    permissions: "None",
    inherently_vulnerable: true,
    rationale: "Invalid access level entered.",
};

/// Looks up the role for any integer level; out-of-range values get
/// [`UNKNOWN_ROLE`].
pub fn role_access(access_level: i64) -> &'static RoleDescriptor {
    if (MIN_ACCESS_LEVEL..=MAX_ACCESS_LEVEL).contains(&access_level) {
        &ROLES[(access_level - MIN_ACCESS_LEVEL) as usize]
    } else {
        &UNKNOWN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_access_table() {
        assert_eq!(role_access(1).name, "Super Admin");
        assert!(role_access(1).inherently_vulnerable);
        assert_eq!(role_access(2).name, "Administrator");
        assert!(!role_access(3).inherently_vulnerable);
        assert_eq!(role_access(4).permissions, "Access and modify own data only");
        assert_eq!(role_access(5).name, "Guest");
        assert!(role_access(5).inherently_vulnerable);
    }

    #[test]
    fn test_role_access_unknown() {
        for level in [0, 6, -1, i64::MAX, i64::MIN] {
            let role = role_access(level);
            assert_eq!(role, &UNKNOWN_ROLE);
            assert!(role.inherently_vulnerable);
        }
    }

    #[test]
    fn test_access_level_parse() {
        assert_eq!(" 3 ".parse::<AccessLevel>().unwrap().get(), 3);
        assert_eq!("5".parse::<AccessLevel>().unwrap().role().name, "Guest");
    }

    #[test]
    fn test_access_level_rejects_invalid() {
        assert_eq!("0".parse::<AccessLevel>(), Err(AccessLevelError::OutOfRange(0)));
        assert_eq!("6".parse::<AccessLevel>(), Err(AccessLevelError::OutOfRange(6)));
        assert!(matches!(
            "two".parse::<AccessLevel>(),
            Err(AccessLevelError::NotANumber(_))
        ));
        assert!(matches!("".parse::<AccessLevel>(), Err(AccessLevelError::NotANumber(_))));
    }
}
