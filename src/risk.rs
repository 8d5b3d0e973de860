//! Risk classification from privilege level and score.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::High => f.write_str("HIGH"),
            RiskTier::Medium => f.write_str("MEDIUM"),
            RiskTier::Low => f.write_str("LOW"),
        }
    }
}

/// Maps `(access_level, score)` to a tier.
///
/// | level      | tiers                                 |
/// |------------|---------------------------------------|
/// | 1, 2       | <70 HIGH, <85 MEDIUM, else LOW        |
/// | 3          | <60 MEDIUM, else LOW                  |
/// | any other  | <40 MEDIUM, else LOW                  |
///
/// These boundaries must not move: historical logs depend on them.
pub fn classify_risk(access_level: i64, score: u8) -> RiskTier {
    match access_level {
        1 | 2 => match score {
            0..70 => RiskTier::High,
            70..85 => RiskTier::Medium,
            _ => RiskTier::Low,
        },
        3 if score < 60 => RiskTier::Medium,
        3 => RiskTier::Low,
        _ if score < 40 => RiskTier::Medium,
        _ => RiskTier::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privileged_thresholds() {
        for level in [1, 2] {
            assert_eq!(classify_risk(level, 0), RiskTier::High);
            assert_eq!(classify_risk(level, 69), RiskTier::High);
            assert_eq!(classify_risk(level, 70), RiskTier::Medium);
            assert_eq!(classify_risk(level, 84), RiskTier::Medium);
            assert_eq!(classify_risk(level, 85), RiskTier::Low);
            assert_eq!(classify_risk(level, 100), RiskTier::Low);
        }
    }

    #[test]
    fn test_power_user_thresholds() {
        assert_eq!(classify_risk(3, 59), RiskTier::Medium);
        assert_eq!(classify_risk(3, 60), RiskTier::Low);
    }

    #[test]
    fn test_other_levels_thresholds() {
        for level in [4, 5, 0, 99, -7] {
            assert_eq!(classify_risk(level, 39), RiskTier::Medium);
            assert_eq!(classify_risk(level, 40), RiskTier::Low);
        }
    }

    #[test]
    fn test_high_only_reachable_for_privileged() {
        for level in [3, 4, 5, 6, 0] {
            assert!((0..=100).all(|s| classify_risk(level, s) != RiskTier::High));
        }
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(RiskTier::Medium.to_string(), "MEDIUM");
    }
}
