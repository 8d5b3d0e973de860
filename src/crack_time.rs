//! Brute-force crack time estimates.
//!
//! The keyspace is `charset_size ^ length`. Everything is computed in
//! log10 space so long passwords never overflow; anything past 10^300
//! seconds is reported as [`CrackTime::Infinite`].

use serde::Serialize;

use crate::charset::{is_symbol, SYMBOLS};

/// log10 of the largest duration still reported as a number.
const MAX_LOG10_SECONDS: f64 = 300.0;

const NON_ASCII_POOL: usize = 100;

pub const BEYOND_CENTURIES: &str = "beyond centuries";

/// An attacker speed assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub label: &'static str,
    pub guesses_per_second: f64,
}

pub const ONLINE_THROTTLED: Scenario = Scenario {
    label: "Online attack (throttled, 100/s)",
    guesses_per_second: 1e2,
};
pub const ONLINE_FAST: Scenario = Scenario {
    label: "Online attack (unthrottled, 10k/s)",
    guesses_per_second: 1e4,
};
pub const OFFLINE_GPU: Scenario = Scenario {
    label: "Offline attack (GPU, 1e9/s)",
    guesses_per_second: 1e9,
};
pub const OFFLINE_RIG: Scenario = Scenario {
    label: "Offline attack (cracking rig, 1e12/s)",
    guesses_per_second: 1e12,
};

pub const SCENARIOS: [Scenario; 4] = [ONLINE_THROTTLED, ONLINE_FAST, OFFLINE_GPU, OFFLINE_RIG];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrackTime {
    Seconds(f64),
    /// Too large to represent meaningfully.
    Infinite,
}

impl CrackTime {
    pub fn as_seconds(&self) -> Option<f64> {
        match self {
            CrackTime::Seconds(s) => Some(*s),
            CrackTime::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, CrackTime::Infinite)
    }

    pub fn humanize(&self) -> String {
        match self {
            CrackTime::Infinite => BEYOND_CENTURIES.to_string(),
            CrackTime::Seconds(s) => humanize_seconds(*s),
        }
    }
}

/// One row of a [`CrackTimeEstimate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackTimeEntry {
    pub label: &'static str,
    pub guesses_per_second: f64,
    /// `None` when the estimate is beyond any practical range.
    pub seconds: Option<f64>,
    pub readable: String,
}

/// Estimates for every scenario in [`SCENARIOS`], in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackTimeEstimate {
    pub entries: Vec<CrackTimeEntry>,
}

impl CrackTimeEstimate {
    pub fn get(&self, scenario: &Scenario) -> Option<&CrackTimeEntry> {
        self.entries.iter().find(|e| e.label == scenario.label)
    }
}

/// Size of the guessing alphabet implied by the classes in `password`.
/// Never below 1.
pub fn estimate_charset_size(password: &str) -> usize {
    let has = |pred: fn(&char) -> bool| password.chars().any(|c| pred(&c));

    let mut size = 0;
    if has(char::is_ascii_lowercase) {
        size += 26;
    }
    if has(char::is_ascii_uppercase) {
        size += 26;
    }
    if has(char::is_ascii_digit) {
        size += 10;
    }
    if has(|c| is_symbol(*c)) {
        size += SYMBOLS.chars().count();
    }
    if has(|c| (*c as u32) > 127) {
        size += NON_ASCII_POOL;
    }
    size.max(1)
}

/// Expected time to exhaust the keyspace at `guesses_per_second`.
pub fn estimate_seconds(password: &str, guesses_per_second: f64) -> CrackTime {
    let length = password.chars().count() as f64;
    let charset = estimate_charset_size(password) as f64;
    let log10_seconds = length * charset.log10() - guesses_per_second.log10();

    if log10_seconds > MAX_LOG10_SECONDS {
        return CrackTime::Infinite;
    }
    CrackTime::Seconds(10f64.powf(log10_seconds))
}

/// Estimates at each of the four standard attacker speeds.
pub fn summary(password: &str) -> CrackTimeEstimate {
    let entries = SCENARIOS
        .iter()
        .map(|scenario| {
            let time = estimate_seconds(password, scenario.guesses_per_second);
            CrackTimeEntry {
                label: scenario.label,
                guesses_per_second: scenario.guesses_per_second,
                seconds: time.as_seconds(),
                readable: time.humanize(),
            }
        })
        .collect();
    CrackTimeEstimate { entries }
}

const YEAR: u64 = 365 * 86_400;
const SMALL_UNITS: [(&str, u64); 4] = [("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)];

fn unit(count: impl std::fmt::Display, name: &str, singular: bool) -> String {
    if singular {
        format!("{count} {name}")
    } else {
        format!("{count} {name}s")
    }
}

/// Greedy years/days/hours/minutes/seconds breakdown, zero units omitted.
pub fn humanize_seconds(seconds: f64) -> String {
    if seconds == 0.0 {
        return "0 seconds".to_string();
    }
    if seconds < 1.0 {
        return format!("{seconds:.3} seconds");
    }

    let years = (seconds / YEAR as f64).floor();
    // remainder is below one year, so it fits in u64
    let mut rest = ((seconds - years * YEAR as f64).max(0.0) as u64).min(YEAR - 1);

    let mut parts = Vec::new();
    if years > 0.0 {
        parts.push(unit(format!("{years:.0}"), "year", years == 1.0));
    }
    for (name, size) in SMALL_UNITS {
        let count = rest / size;
        rest %= size;
        if count > 0 {
            parts.push(unit(count, name, count == 1));
        }
    }

    if parts.is_empty() {
        return "0 seconds".to_string();
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_size_classes() {
        assert_eq!(estimate_charset_size(""), 1);
        assert_eq!(estimate_charset_size("   "), 1);
        assert_eq!(estimate_charset_size("aaaaaaaa"), 26);
        assert_eq!(estimate_charset_size("aA"), 52);
        assert_eq!(estimate_charset_size("aA1"), 62);
        assert_eq!(estimate_charset_size("aA1!"), 94);
        assert_eq!(estimate_charset_size("é"), 100);
    }

    #[test]
    fn test_estimate_seconds_lowercase_eight() {
        let time = estimate_seconds("aaaaaaaa", 1e9);
        let seconds = time.as_seconds().expect("finite");
        assert!((seconds - 208.827064576).abs() < 1e-6);
        assert_eq!(time.humanize(), "3 minutes, 28 seconds");
    }

    #[test]
    fn test_estimate_seconds_empty_password() {
        let seconds = estimate_seconds("", 100.0).as_seconds().unwrap();
        assert!((seconds - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_seconds_overflow_is_infinite() {
        let long = "Aa1!".repeat(100);
        assert_eq!(estimate_seconds(&long, 1e12), CrackTime::Infinite);
        assert_eq!(estimate_seconds(&long, 1e12).humanize(), BEYOND_CENTURIES);
    }

    #[test]
    fn test_humanize_seconds() {
        assert_eq!(humanize_seconds(0.0), "0 seconds");
        assert_eq!(humanize_seconds(0.0004), "0.000 seconds");
        assert_eq!(humanize_seconds(0.25), "0.250 seconds");
        assert_eq!(humanize_seconds(1.0), "1 second");
        assert_eq!(humanize_seconds(61.0), "1 minute, 1 second");
        assert_eq!(humanize_seconds(3_600.0), "1 hour");
        assert_eq!(humanize_seconds(90_061.0), "1 day, 1 hour, 1 minute, 1 second");
        assert_eq!(humanize_seconds(2.0 * YEAR as f64 + 120.0), "2 years, 2 minutes");
    }

    #[test]
    fn test_summary_scenarios_in_order() {
        let estimate = summary("aaaaaaaa");
        let labels: Vec<_> = estimate.entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, SCENARIOS.iter().map(|s| s.label).collect::<Vec<_>>());

        let gpu = estimate.get(&OFFLINE_GPU).expect("gpu entry");
        assert_eq!(gpu.readable, "3 minutes, 28 seconds");

        // slower attackers always take longer
        let secs: Vec<f64> = estimate.entries.iter().filter_map(|e| e.seconds).collect();
        assert!(secs.windows(2).all(|w| w[0] > w[1]));
    }
}
