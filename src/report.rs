//! Report records and renderers.
//!
//! Layout belongs to the renderer; the analyzer only hands over a flat
//! [`ReportRecord`] and, optionally, chart image bytes.

use std::fmt::Write as _;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::crack_time::CrackTimeEstimate;
use crate::log_store::RiskCounts;
use crate::risk::RiskTier;

const HASH_PREVIEW: usize = 32;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report rendering failed: {0}")]
    Render(String),
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a renderer may show about one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub node_role: String,
    pub role: String,
    pub access_level: u8,
    pub score: u8,
    pub risk: RiskTier,
    pub reasons: Vec<String>,
    pub sha256: String,
    pub crack_summary: CrackTimeEstimate,
    /// Tier totals read back from the log, when the caller has them.
    pub risk_totals: Option<RiskCounts>,
}

impl ReportRecord {
    pub fn with_risk_totals(mut self, totals: RiskCounts) -> Self {
        self.risk_totals = Some(totals);
        self
    }
}

pub trait ReportRenderer {
    type Output;

    fn render(
        &self,
        record: &ReportRecord,
        chart_png: Option<&[u8]>,
    ) -> Result<Self::Output, ReportError>;
}

/// Plain-text report, used by the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    type Output = String;

    fn render(
        &self,
        record: &ReportRecord,
        chart_png: Option<&[u8]>,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        write_report(&mut out, record, chart_png)
            .map_err(|e| ReportError::Render(e.to_string()))?;
        Ok(out)
    }
}

fn write_report(
    out: &mut String,
    record: &ReportRecord,
    chart_png: Option<&[u8]>,
) -> std::fmt::Result {
    writeln!(out, "Password Analysis Report")?;
    writeln!(out, "Generated: {}", Local::now().naive_local())?;
    writeln!(out)?;

    let hash_preview = if record.sha256.len() > HASH_PREVIEW {
        format!("{}...", &record.sha256[..HASH_PREVIEW])
    } else {
        record.sha256.clone()
    };
    let fields = [
        ("Node role", record.node_role.clone()),
        ("Role", record.role.clone()),
        ("Access level", record.access_level.to_string()),
        ("Score", format!("{}/100", record.score)),
        ("Risk", record.risk.to_string()),
        ("SHA-256", hash_preview),
    ];
    for (key, value) in fields {
        writeln!(out, "{:<14}{}", format!("{key}:"), value)?;
    }

    writeln!(out)?;
    writeln!(out, "Weaknesses / Suggestions:")?;
    if record.reasons.is_empty() {
        writeln!(out, "  None - password looks strong.")?;
    } else {
        for reason in &record.reasons {
            writeln!(out, "  - {reason}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Crack-time estimates:")?;
    for entry in &record.crack_summary.entries {
        writeln!(out, "  {}: {}", entry.label, entry.readable)?;
    }

    if let Some(totals) = &record.risk_totals {
        writeln!(out)?;
        writeln!(out, "Logged risk totals ({} analyses):", totals.total())?;
        writeln!(out, "  HIGH: {}", totals.high)?;
        writeln!(out, "  MEDIUM: {}", totals.medium)?;
        writeln!(out, "  LOW: {}", totals.low)?;
    }

    if let Some(png) = chart_png {
        writeln!(out)?;
        writeln!(out, "[chart: {} bytes not shown in text output]", png.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crack_time::summary;

    fn sample(reasons: Vec<String>) -> ReportRecord {
        ReportRecord {
            node_role: "admin".to_string(),
            role: "Administrator".to_string(),
            access_level: 2,
            score: 70,
            risk: RiskTier::Medium,
            reasons,
            sha256: "0123456789abcdef".repeat(4),
            crack_summary: summary("aaaaaaaa"),
            risk_totals: None,
        }
    }

    #[test]
    fn test_text_report_fields() {
        let text = TextRenderer
            .render(&sample(vec!["Contains common/blacklisted words.".into()]), None)
            .unwrap();
        assert!(text.contains("Score:        70/100"));
        assert!(text.contains("Risk:         MEDIUM"));
        assert!(text.contains("SHA-256:      0123456789abcdef0123456789abcdef...\n"));
        assert!(text.contains("  - Contains common/blacklisted words."));
        assert!(text.contains("Offline attack (GPU, 1e9/s): 3 minutes, 28 seconds"));
        assert!(!text.contains("[chart"));
        assert!(!text.contains("Logged risk totals"));
    }

    #[test]
    fn test_text_report_risk_totals() {
        let record = sample(Vec::new()).with_risk_totals(RiskCounts { high: 2, medium: 1, low: 4 });
        let text = TextRenderer.render(&record, None).unwrap();
        assert!(text.contains("Logged risk totals (7 analyses):"));
        assert!(text.contains("  HIGH: 2\n  MEDIUM: 1\n  LOW: 4\n"));
    }

    #[test]
    fn test_text_report_no_reasons_and_chart() {
        let text = TextRenderer.render(&sample(Vec::new()), Some(&[1, 2, 3])).unwrap();
        assert!(text.contains("None - password looks strong."));
        assert!(text.contains("[chart: 3 bytes"));
    }
}
