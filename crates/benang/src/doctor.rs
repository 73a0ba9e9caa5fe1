// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `benang doctor` command implementation.
//!
//! Reports whether the assistant will run against the hosted model or in
//! simulated mode, and why. The API key itself is never printed.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use benang_config::model::BenangConfig;
use benang_core::{BenangError, CredentialState, GenerationRequest, ModelTransport};
use benang_gemini::GeminiTransport;
use benang_gemini::client::GeminiClient;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>, started: Instant) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            duration: started.elapsed(),
        }
    }
}

/// Run the `benang doctor` command.
///
/// With `deep`, also sends one small request to the hosted model.
pub async fn run_doctor(config: &BenangConfig, deep: bool, plain: bool) -> Result<(), BenangError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let mut results = vec![
        check_config(config),
        check_credential(&config.gemini.credential_state()),
        check_endpoint(config),
    ];
    if deep {
        results.push(check_connectivity(config).await);
    }

    println!();
    println!("  benang doctor");
    println!("  {}", "-".repeat(50));

    let mut issues = 0;
    for result in &results {
        if result.status != CheckStatus::Pass {
            issues += 1;
        }
        println!("{}", render_line(result, use_color));
    }

    println!();
    if issues > 0 {
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
        if !deep {
            println!("  Run with --deep to test the hosted model.");
        }
    } else {
        println!("  All checks passed.");
    }
    println!();

    Ok(())
}

fn render_line(result: &CheckResult, use_color: bool) -> String {
    let duration_ms = result.duration.as_millis();
    if use_color {
        use colored::Colorize;
        let (symbol, message) = match result.status {
            CheckStatus::Pass => ("✓".green(), result.message.normal()),
            CheckStatus::Warn => ("!".yellow(), result.message.yellow()),
            CheckStatus::Fail => ("✗".red(), result.message.red()),
        };
        format!("    {symbol} {:<20} {message} ({duration_ms}ms)", result.name)
    } else {
        let tag = match result.status {
            CheckStatus::Pass => "[OK]  ",
            CheckStatus::Warn => "[WARN]",
            CheckStatus::Fail => "[FAIL]",
        };
        format!("    {tag} {:<20} {} ({duration_ms}ms)", result.name, result.message)
    }
}

/// Configuration was already loaded and validated by the time doctor runs.
fn check_config(config: &BenangConfig) -> CheckResult {
    let started = Instant::now();
    CheckResult::new(
        "Config",
        CheckStatus::Pass,
        format!("valid (agent.name={})", config.agent.name),
        started,
    )
}

fn check_credential(state: &CredentialState) -> CheckResult {
    let started = Instant::now();
    let (status, message) = match state {
        CredentialState::Present(_) => (CheckStatus::Pass, "present".to_string()),
        CredentialState::Absent => (
            CheckStatus::Warn,
            "absent, running in simulated mode (set GEMINI_API_KEY)".to_string(),
        ),
        CredentialState::Placeholder => (
            CheckStatus::Warn,
            "placeholder value, running in simulated mode".to_string(),
        ),
        CredentialState::Malformed => (
            CheckStatus::Fail,
            "malformed key, running in simulated mode".to_string(),
        ),
    };
    CheckResult::new("Gemini API key", status, message, started)
}

fn check_endpoint(config: &BenangConfig) -> CheckResult {
    let started = Instant::now();
    match GeminiClient::new(&config.gemini) {
        Ok(client) => CheckResult::new(
            "Gemini endpoint",
            CheckStatus::Pass,
            format!(
                "{} (timeout {}s)",
                client.endpoint(&config.gemini.model),
                config.gemini.timeout_secs
            ),
            started,
        ),
        Err(e) => CheckResult::new("Gemini endpoint", CheckStatus::Fail, e.to_string(), started),
    }
}

async fn check_connectivity(config: &BenangConfig) -> CheckResult {
    let started = Instant::now();
    let state = config.gemini.credential_state();
    let Some(credential) = state.usable() else {
        return CheckResult::new(
            "Gemini request",
            CheckStatus::Warn,
            "skipped, no usable API key",
            started,
        );
    };

    let transport = match GeminiTransport::new(&config.gemini) {
        Ok(t) => t,
        Err(e) => return CheckResult::new("Gemini request", CheckStatus::Fail, e.to_string(), started),
    };

    let request = GenerationRequest::text("Jawab dengan satu kata.", "ping");
    match transport
        .generate(credential, &config.gemini.model, request)
        .await
    {
        Ok(resp) if resp.text.is_some() => CheckResult::new(
            "Gemini request",
            CheckStatus::Pass,
            format!("answered by {}", resp.model),
            started,
        ),
        Ok(_) => CheckResult::new(
            "Gemini request",
            CheckStatus::Warn,
            "reply contained no text",
            started,
        ),
        Err(e) => CheckResult::new("Gemini request", CheckStatus::Fail, e.to_string(), started),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_states_map_to_statuses() {
        assert_eq!(check_credential(&CredentialState::Absent).status, CheckStatus::Warn);
        assert_eq!(
            check_credential(&CredentialState::Placeholder).status,
            CheckStatus::Warn
        );
        assert_eq!(
            check_credential(&CredentialState::Malformed).status,
            CheckStatus::Fail
        );
        let present = CredentialState::from_raw(Some("AIzaSyD-3xAmPlEkEy0123456789abcdefGHIJ"));
        let result = check_credential(&present);
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(!result.message.contains("AIza"));
    }

    #[test]
    fn endpoint_check_reports_model_url() {
        let result = check_endpoint(&BenangConfig::default());
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(
            result
                .message
                .contains("/v1beta/models/gemini-2.5-flash:generateContent"),
            "{}",
            result.message
        );
    }

    #[tokio::test]
    async fn connectivity_is_skipped_without_key() {
        let result = check_connectivity(&BenangConfig::default()).await;
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("skipped"));
    }

    #[test]
    fn plain_rendering_uses_tags() {
        let result = CheckResult {
            name: "Config".into(),
            status: CheckStatus::Fail,
            message: "broken".into(),
            duration: Duration::from_millis(3),
        };
        let line = render_line(&result, false);
        assert!(line.contains("[FAIL]"));
        assert!(line.contains("broken (3ms)"));
    }
}
