//! Password strength and access risk analysis library
//!
//! Scores a password, explains why it is weak, estimates brute-force crack
//! times and classifies the risk of using it on an account with a given
//! privilege level.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery of analysis results
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-risk` console binary
//!
//! # Environment Variables
//!
//! - `PWD_RISK_LOG_PATH`: Analysis log file
//!   (default: `security_analysis.csv`)
//! - `PWD_RISK_BLACKLIST_PATH`: Extra blacklist entries, one per line
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_risk::{analyze, AccessLevel, AnalysisRequest, LogStore};
//! use secrecy::SecretString;
//!
//! let request = AnalysisRequest {
//!     node_role: "admin".to_string(),
//!     access_level: "2".parse::<AccessLevel>().expect("valid level"),
//!     password: SecretString::new("Password123!".to_string().into()),
//! };
//!
//! let analysis = analyze(&request);
//! println!("Score: {}/100", analysis.score);
//! println!("Risk: {}", analysis.risk);
//! for reason in analysis.verdict.reasons() {
//!     println!(" - {}", reason);
//! }
//!
//! LogStore::from_env().append(&analysis.to_log_record()).expect("log write");
//! ```

mod analysis;
mod blacklist;
mod charset;
mod crack_time;
mod evaluator;
mod generator;
mod hash;
mod log_store;
mod report;
mod risk;
mod roles;
mod sections;
mod violation;

// Public API
pub use analysis::{analyze, Analysis, AnalysisRequest};
pub use blacklist::{
    contains_common_word, get_blacklist_path, init_blacklist, init_blacklist_from_path,
    load_blacklist, BlacklistError, COMMON_PASSWORDS,
};
pub use charset::{CharsetProfile, SYMBOLS};
pub use crack_time::{
    estimate_charset_size, estimate_seconds, humanize_seconds, summary, CrackTime,
    CrackTimeEntry, CrackTimeEstimate, Scenario, BEYOND_CENTURIES, OFFLINE_GPU, OFFLINE_RIG,
    ONLINE_FAST, ONLINE_THROTTLED, SCENARIOS,
};
pub use evaluator::{check_strength, password_score, StrengthLabel, StrengthVerdict, MAX_SCORE};
pub use generator::{suggest_password, DEFAULT_SUGGESTED_LENGTH, MAX_SUGGESTED_LENGTH};
pub use hash::password_hash;
pub use log_store::{
    format_significant, get_log_path, LogRecord, LogStore, LogStoreError, RiskCounts, LOG_HEADER,
};
pub use report::{ReportError, ReportRecord, ReportRenderer, TextRenderer};
pub use risk::{classify_risk, RiskTier};
pub use roles::{role_access, AccessLevel, AccessLevelError, RoleDescriptor, UNKNOWN_ROLE};
pub use sections::{has_repeated_runs, has_sequence, has_year_like};
pub use violation::Violation;

#[cfg(feature = "async")]
pub use analysis::analyze_tx;
