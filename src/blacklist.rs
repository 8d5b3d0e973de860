//! Blacklist management module
//!
//! Holds the built-in list of known weak passwords and an optional set of
//! extra entries loaded once from a file at startup.

use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// Known weak passwords, always active.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "123456789", "12345",
    "111111", "abc123", "football", "monkey", "letmein", "shadow",
    "master", "666666", "iloveyou", "welcome", "dragon", "123123",
];

static EXTRA_PASSWORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the extra blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_RISK_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_RISK_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

/// Loads extra blacklist entries from the configured file.
///
/// The built-in [`COMMON_PASSWORDS`] stay active whether or not this is
/// called. Returns the number of extra entries.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Loads extra blacklist entries from a specific file path.
///
/// Idempotent: once entries are loaded, later calls return the existing
/// count without touching the filesystem.
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = EXTRA_PASSWORDS.read().unwrap_or_else(|e| e.into_inner());
        if let Some(entries) = guard.as_ref() {
            return Ok(entries.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let mut entries: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    entries.sort();
    entries.dedup();

    let count = entries.len();
    *EXTRA_PASSWORDS.write().unwrap_or_else(|e| e.into_inner()) = Some(entries);

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} extra entries from {:?}", count, path);

    Ok(count)
}

/// Startup loader: `explicit` wins, otherwise [`init_blacklist`] resolves
/// the env/default path.
///
/// A missing file is not fatal; the built-in list still applies and
/// `Ok(0)` is returned. Read errors and empty files are reported.
pub fn load_blacklist(explicit: Option<&Path>) -> Result<usize, BlacklistError> {
    let result = match explicit {
        Some(path) => init_blacklist_from_path(path),
        None => init_blacklist(),
    };
    match result {
        Err(BlacklistError::FileNotFound(_path)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("No extra blacklist at {:?}; using built-in entries only", _path);
            Ok(0)
        }
        other => other,
    }
}

/// Returns `true` if the case-folded password contains any blacklisted
/// entry as a substring.
///
/// Deliberately loose: "mypassword1" matches because it contains "password".
pub fn contains_common_word(password: &str) -> bool {
    let folded = password.to_lowercase();
    if COMMON_PASSWORDS.iter().any(|w| folded.contains(w)) {
        return true;
    }
    let guard = EXTRA_PASSWORDS.read().unwrap_or_else(|e| e.into_inner());
    guard
        .as_ref()
        .map(|extra| extra.iter().any(|w| folded.contains(w.as_str())))
        .unwrap_or(false)
}

/// Resets the extra entries for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    *EXTRA_PASSWORDS.write().unwrap() = None;
}
