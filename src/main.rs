//! Console front end: prompts for a role, access level and password, prints
//! the analysis and appends it to the log.

use std::path::PathBuf;

use clap::Parser;
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::EnvFilter;

use pwd_risk::{
    analyze, load_blacklist, suggest_password, AccessLevel, AnalysisRequest, LogStore,
    ReportRenderer, TextRenderer, DEFAULT_SUGGESTED_LENGTH,
};

#[derive(Parser, Debug)]
#[command(name = "pwd-risk", version, about = "Password strength and access risk analyzer")]
struct Cli {
    /// CSV file receiving one row per analysis
    #[arg(long, env = "PWD_RISK_LOG_PATH", default_value = "security_analysis.csv")]
    log_file: PathBuf,

    /// Extra blacklist file, one password per line
    /// [default: $PWD_RISK_BLACKLIST_PATH or ./assets/blacklist.txt]
    #[arg(long)]
    blacklist: Option<PathBuf>,

    /// Print a generated password (optionally of this length) and exit
    #[arg(long, num_args = 0..=1)]
    suggest: Option<Option<usize>>,

    /// Print the full text report after each analysis
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(length) = cli.suggest {
        let length = length.unwrap_or(DEFAULT_SUGGESTED_LENGTH);
        println!("Suggested password: {}", suggest_password(length).expose_secret());
        return Ok(());
    }

    match load_blacklist(cli.blacklist.as_deref()) {
        Ok(count) => tracing::info!("Loaded {} extra blacklist entries", count),
        Err(e) => tracing::warn!("Continuing with built-in blacklist only: {}", e),
    }

    let store = LogStore::new(cli.log_file.clone());
    println!("=== System Security Risk Analyzer (Console) ===");

    loop {
        match run_once(&store, cli.report) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Exiting... Results saved in {:?}", store.path());
    Ok(())
}

/// One prompt round. `Ok(false)` means the user asked to exit.
fn run_once(store: &LogStore, show_report: bool) -> Result<bool, InquireError> {
    let cmd = Text::new("Press Enter to continue or type 'exit' to quit:").prompt()?;
    if cmd.trim().eq_ignore_ascii_case("exit") {
        return Ok(false);
    }

    let node_role = Text::new("Enter node's role (root/admin/developer/user/guest):").prompt()?;

    let access_level = loop {
        let input = Text::new("Enter access level (1-5):").prompt()?;
        match input.parse::<AccessLevel>() {
            Ok(level) => break level,
            Err(e) => println!("{e}"),
        }
    };

    let password = Password::new("Enter password:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let request = AnalysisRequest {
        node_role: node_role.trim().to_string(),
        access_level,
        password: SecretString::new(password.into()),
    };
    let analysis = analyze(&request);

    println!();
    println!("Role: {}", analysis.role.name);
    println!("Permissions: {}", analysis.role.permissions);
    println!(
        "Vulnerable: {}",
        if analysis.role.inherently_vulnerable { "Yes" } else { "No" }
    );
    println!("Reason: {}", analysis.role.rationale);
    println!();
    println!("Password Strength: {}", analysis.verdict.label());
    println!("Password Score: {}/100", analysis.score);
    println!("Overall Risk Level: {}", analysis.risk);

    let reasons = analysis.verdict.reasons();
    if reasons.is_empty() {
        println!("\nPassword looks strong. Consider enabling MFA for privileged accounts.");
    } else {
        println!("\nWeaknesses / Suggestions:");
        for reason in reasons {
            println!(" - {reason}");
        }
    }

    println!("\nCrack-time estimates:");
    for entry in &analysis.crack.entries {
        println!(" - {}: {}", entry.label, entry.readable);
    }

    match store.append(&analysis.to_log_record()) {
        Ok(()) => println!("\n--- Entry saved to {:?} ---", store.path()),
        Err(e) => {
            tracing::error!("Failed to write log entry: {}", e);
            println!("\n--- Entry NOT saved: {e} ---");
        }
    }

    if show_report {
        let mut record = analysis.to_report_record();
        match store.risk_counts() {
            Ok(totals) => record = record.with_risk_totals(totals),
            Err(e) => tracing::warn!("Risk totals unavailable: {}", e),
        }
        match TextRenderer.render(&record, None) {
            Ok(text) => println!("\n{text}"),
            Err(e) => tracing::error!("Report rendering failed: {}", e),
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_flag_without_value_uses_generator_default() {
        let cli = Cli::try_parse_from(["pwd-risk", "--suggest"]).unwrap();
        assert_eq!(cli.suggest, Some(None));
        assert_eq!(
            cli.suggest.flatten().unwrap_or(DEFAULT_SUGGESTED_LENGTH),
            DEFAULT_SUGGESTED_LENGTH
        );
    }

    #[test]
    fn test_suggest_flag_with_length() {
        let cli = Cli::try_parse_from(["pwd-risk", "--suggest", "20"]).unwrap();
        assert_eq!(cli.suggest, Some(Some(20)));
    }

    #[test]
    fn test_no_suggest_and_no_blacklist_flag() {
        let cli = Cli::try_parse_from(["pwd-risk"]).unwrap();
        assert_eq!(cli.suggest, None);
        assert_eq!(cli.blacklist, None);
    }
}
