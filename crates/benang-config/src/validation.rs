// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks run after deserialization.

use crate::diagnostic::ConfigError;
use crate::model::BenangConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const MAX_TIMEOUT_SECS: u64 = 600;

const MAX_RETRIES: u32 = 5;

/// Validate a deserialized configuration.
///
/// Collects every violation instead of stopping at the first one. The API key
/// is not checked here; unusable keys resolve to a non-present
/// [`CredentialState`](benang_core::CredentialState) and run in simulated mode.
pub fn validate_config(config: &BenangConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if config.agent.name.trim().is_empty() {
        fail("agent.name must not be empty".to_string());
    }

    let level = config.agent.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "agent.log_level `{}` is not one of {}",
            config.agent.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    if config.gemini.model.trim().is_empty() {
        fail("gemini.model must not be empty".to_string());
    }

    let base_url = config.gemini.base_url.trim();
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        fail(format!(
            "gemini.base_url `{base_url}` must start with http:// or https://"
        ));
    }

    if config.gemini.timeout_secs == 0 || config.gemini.timeout_secs > MAX_TIMEOUT_SECS {
        fail(format!(
            "gemini.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
            config.gemini.timeout_secs
        ));
    }

    if config.gemini.max_retries > MAX_RETRIES {
        fail(format!(
            "gemini.max_retries must be at most {MAX_RETRIES}, got {}",
            config.gemini.max_retries
        ));
    }

    if config.shell.history_limit == 0 {
        fail("shell.history_limit must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
