//! Append-only CSV log of analyses.
//!
//! One row per analysis. The plaintext password never reaches this module;
//! rows carry its SHA-256 instead.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::risk::RiskTier;

/// Column names, kept identical to existing log files.
pub const LOG_HEADER: [&str; 9] = [
    "timestamp",
    "node_role",
    "role",
    "access_level",
    "score",
    "risk",
    "breach_flag",
    "sha256",
    "crack_time_seconds",
];

pub const DEFAULT_LOG_PATH: &str = "security_analysis.csv";

// Held across the header check and the row append.
static LOG_LOCK: Mutex<()> = Mutex::new(());

#[derive(Error, Debug)]
pub enum LogStoreError {
    #[error("Log store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Log store CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub node_role: String,
    pub role: String,
    pub access_level: u8,
    pub score: u8,
    pub risk: RiskTier,
    #[serde(with = "yes_no")]
    pub breach_flag: bool,
    pub sha256: String,
    /// Offline GPU estimate; empty in the file when beyond range.
    #[serde(serialize_with = "serialize_seconds")]
    pub crack_time_seconds: Option<f64>,
}

/// Tier totals over the whole log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    fn add(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::High => self.high += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::Low => self.low += 1,
        }
    }
}

/// Returns the log file path.
///
/// Priority:
/// 1. Environment variable `PWD_RISK_LOG_PATH`
/// 2. Default path `security_analysis.csv`
pub fn get_log_path() -> PathBuf {
    std::env::var("PWD_RISK_LOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH))
}

#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`get_log_path`].
    pub fn from_env() -> Self {
        Self::new(get_log_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row, writing the header first if the file is new or empty.
    ///
    /// Header and row go out in a single write while the store lock is held.
    pub fn append(&self, record: &LogRecord) -> Result<(), LogStoreError> {
        let _guard = LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if needs_header {
            writer.write_record(LOG_HEADER)?;
        }
        writer.serialize(record)?;
        let buf = writer
            .into_inner()
            .map_err(|e| LogStoreError::Io(e.into_error()))?;

        file.write_all(&buf)?;
        file.flush()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Logged analysis to {:?} (risk {})", self.path, record.risk);

        Ok(())
    }

    /// Reads every row. A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<LogRecord>, LogStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<LogRecord>, csv::Error>>()?;
        Ok(records)
    }

    pub fn risk_counts(&self) -> Result<RiskCounts, LogStoreError> {
        let mut counts = RiskCounts::default();
        for record in self.read_all()? {
            counts.add(record.risk);
        }
        Ok(counts)
    }
}

mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *flag { "YES" } else { "NO" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.eq_ignore_ascii_case("yes"))
    }
}

fn serialize_seconds<S: serde::Serializer>(
    seconds: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match seconds {
        Some(s) => serializer.serialize_str(&format_significant(*s)),
        None => serializer.serialize_none(),
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Six significant digits, fixed or exponent notation depending on
/// magnitude, trailing zeros dropped (`208.827`, `1.23457e+15`).
pub fn format_significant(value: f64) -> String {
    const DIGITS: i32 = 6;

    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let sci = format!("{:.*e}", (DIGITS - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (DIGITS - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}
