// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosted-model credential and its recognized configuration states.
//!
//! The credential is resolved once from configuration at startup and handed
//! to the classifier and responder explicitly. Only [`CredentialState::Present`]
//! allows remote calls; every other state forces the local fallbacks.

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

/// Values that ship in sample configs and env templates.
const PLACEHOLDER_VALUES: &[&str] = &[
    "api_key",
    "gemini_api_key",
    "your_api_key",
    "your-api-key",
    "undefined",
    "null",
    "none",
    "changeme",
    "todo",
];

/// Substrings that mark a value as a template rather than a real key.
const PLACEHOLDER_FRAGMENTS: &[&str] = &["placeholder", "changeme", "replace_me", "replace-me"];

/// Shortest value accepted as a real key. Gemini keys are 39 characters.
const MIN_KEY_LEN: usize = 16;

/// An API key for the hosted model. Never printed by `Debug`.
#[derive(Clone)]
pub struct Credential(Arc<SecretString>);

impl Credential {
    fn new(raw: &str) -> Self {
        Self(Arc::new(SecretString::from(raw.to_string())))
    }

    /// The raw key, for building request headers only.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// How the configured credential was classified.
#[derive(Debug, Clone)]
pub enum CredentialState {
    /// No value configured.
    Absent,
    /// A template value such as `YOUR_API_KEY`; treated as absent.
    Placeholder,
    /// A value that cannot be a key (too short, whitespace, control characters).
    Malformed,
    /// A usable key.
    Present(Credential),
}

impl CredentialState {
    /// Classify a raw configuration value.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim) else {
            return CredentialState::Absent;
        };
        if value.is_empty() {
            return CredentialState::Absent;
        }
        if looks_like_placeholder(value) {
            return CredentialState::Placeholder;
        }
        if value.len() < MIN_KEY_LEN || !value.chars().all(|c| c.is_ascii_graphic()) {
            return CredentialState::Malformed;
        }
        CredentialState::Present(Credential::new(value))
    }

    /// The credential, if remote calls are allowed.
    pub fn usable(&self) -> Option<&Credential> {
        match self {
            CredentialState::Present(credential) => Some(credential),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.usable().is_some()
    }

    /// Short lowercase name for logs and `doctor` output.
    pub fn describe(&self) -> &'static str {
        match self {
            CredentialState::Absent => "absent",
            CredentialState::Placeholder => "placeholder",
            CredentialState::Malformed => "malformed",
            CredentialState::Present(_) => "present",
        }
    }
}

fn looks_like_placeholder(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    if PLACEHOLDER_VALUES.contains(&lower.as_str()) {
        return true;
    }
    if PLACEHOLDER_FRAGMENTS.iter().any(|f| lower.contains(f)) {
        return true;
    }
    if lower.starts_with("your") || (lower.starts_with('<') && lower.ends_with('>')) {
        return true;
    }
    // "xxxxxxxx", "********"
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => lower.len() > 1 && chars.all(|c| c == first),
        None => false,
    }
}
