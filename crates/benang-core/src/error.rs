// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by the benang crates.

use thiserror::Error;

/// The error type returned by transports, config helpers and internal routing steps.
///
/// Public routing operations never surface this type; it is absorbed at the
/// classifier/responder boundary and turned into a degraded result.
#[derive(Debug, Error)]
pub enum BenangError {
    /// Hosted model errors (HTTP failure, API error body, unreadable response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The transport gave up waiting for the hosted model.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// A structured response did not match the expected schema.
    #[error("schema violation: {0}")]
    Schema(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BenangError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        BenangError::Provider {
            message: message.into(),
            source: None,
        }
    }
}
