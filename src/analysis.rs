//! Full analysis of one password for one role.

use chrono::Local;
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::blacklist::contains_common_word;
use crate::crack_time::{summary, CrackTimeEstimate, OFFLINE_GPU};
use crate::evaluator::{check_strength, password_score, StrengthVerdict};
use crate::hash::password_hash;
use crate::log_store::LogRecord;
use crate::report::ReportRecord;
use crate::risk::{classify_risk, RiskTier};
use crate::roles::{AccessLevel, RoleDescriptor};

/// Input to [`analyze`].
#[derive(Debug)]
pub struct AnalysisRequest {
    /// Free-text role or username of the node; also checked for leakage.
    pub node_role: String,
    pub access_level: AccessLevel,
    pub password: SecretString,
}

/// Result of [`analyze`]. Holds no plaintext password.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub node_role: String,
    pub access_level: AccessLevel,
    pub role: &'static RoleDescriptor,
    pub verdict: StrengthVerdict,
    pub score: u8,
    pub risk: RiskTier,
    /// Password contains a known commonly-breached password.
    pub breach_flag: bool,
    pub password_hash: String,
    pub crack: CrackTimeEstimate,
}

impl Analysis {
    /// Row for the log store, stamped with the current local time.
    pub fn to_log_record(&self) -> LogRecord {
        LogRecord {
            timestamp: Local::now().naive_local(),
            node_role: self.node_role.clone(),
            role: self.role.name.to_string(),
            access_level: self.access_level.get(),
            score: self.score,
            risk: self.risk,
            breach_flag: self.breach_flag,
            sha256: self.password_hash.clone(),
            crack_time_seconds: self.crack.get(&OFFLINE_GPU).and_then(|e| e.seconds),
        }
    }

    pub fn to_report_record(&self) -> ReportRecord {
        ReportRecord {
            node_role: self.node_role.clone(),
            role: self.role.name.to_string(),
            access_level: self.access_level.get(),
            score: self.score,
            risk: self.risk,
            reasons: self.verdict.reasons().into_iter().map(String::from).collect(),
            sha256: self.password_hash.clone(),
            crack_summary: self.crack.clone(),
            risk_totals: None,
        }
    }
}

/// Runs every analyzer stage on the request.
pub fn analyze(request: &AnalysisRequest) -> Analysis {
    let pwd = request.password.expose_secret();

    let verdict = check_strength(pwd, &request.node_role);
    let score = password_score(pwd);
    let risk = classify_risk(request.access_level.get() as i64, score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "analysis: level={} score={} risk={} length={}",
        request.access_level,
        score,
        risk,
        pwd.chars().count()
    );

    Analysis {
        node_role: request.node_role.clone(),
        access_level: request.access_level,
        role: request.access_level.role(),
        verdict,
        score,
        risk,
        breach_flag: contains_common_word(pwd),
        password_hash: password_hash(&request.password),
        crack: summary(pwd),
    }
}

/// Async version that sends the analysis via channel.
#[cfg(feature = "async")]
pub async fn analyze_tx(request: &AnalysisRequest, tx: mpsc::Sender<Analysis>) {
    let analysis = analyze(request);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}
