// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! Every section rejects unknown keys so typos surface at startup instead of
//! silently falling back to defaults.

use std::time::Duration;

use benang_core::CredentialState;
use serde::{Deserialize, Serialize};

/// Top-level benang configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BenangConfig {
    /// Assistant identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Hosted Gemini model settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Interactive shell settings.
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Assistant identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in the shell banner and logs.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "benang".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. `None` keeps both classifier and responder in simulated mode.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for both routing and answering.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without the `/v1beta` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries on transient HTTP statuses (429, 500, 503).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl GeminiConfig {
    /// Classify the configured key.
    pub fn credential_state(&self) -> CredentialState {
        CredentialState::from_raw(self.api_key.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

/// Interactive shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Maximum transcript entries kept in memory.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Print the routing notice before each answer.
    #[serde(default = "default_show_reasoning")]
    pub show_reasoning: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            show_reasoning: default_show_reasoning(),
        }
    }
}

fn default_history_limit() -> usize {
    200
}

fn default_show_reasoning() -> bool {
    true
}
