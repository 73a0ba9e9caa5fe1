// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nominal/degraded result of a classify or respond call.
//!
//! Callers of [`Classifier::classify`](crate::Classifier::classify) and
//! [`Responder::respond`](crate::Responder::respond) only see the plain value.
//! The `*_outcome` variants expose this wrapper so tests and diagnostics can
//! see why a fallback was used.

use std::fmt;

use tracing::{debug, warn};

/// Why the local fallback replaced the hosted model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// No usable credential is configured; no request was sent.
    NoCredential,
    /// The transport returned an error (network, HTTP status, timeout).
    Remote(String),
    /// The model replied, but the reply did not match the expected shape.
    InvalidResponse(String),
    /// The model replied with no text.
    EmptyResponse,
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradeReason::NoCredential => write!(f, "no usable credential"),
            DegradeReason::Remote(e) => write!(f, "remote call failed: {e}"),
            DegradeReason::InvalidResponse(e) => write!(f, "invalid model response: {e}"),
            DegradeReason::EmptyResponse => write!(f, "model returned no text"),
        }
    }
}

/// A value produced by the hosted model, or by a fallback in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Nominal(T),
    Degraded { value: T, reason: DegradeReason },
}

impl<T> Outcome<T> {
    pub fn degraded(value: T, reason: DegradeReason) -> Self {
        Outcome::Degraded { value, reason }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            Outcome::Nominal(_) => None,
            Outcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Nominal(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    /// Unwraps the value, logging the degrade reason for `operation`.
    ///
    /// A missing credential is the expected offline configuration and logs
    /// at debug; every other reason logs at warn.
    pub fn into_value(self, operation: &'static str) -> T {
        match self {
            Outcome::Nominal(value) => value,
            Outcome::Degraded { value, reason } => {
                match reason {
                    DegradeReason::NoCredential => {
                        debug!(operation, "hosted model skipped, using local fallback");
                    }
                    ref other => {
                        warn!(operation, reason = %other, "hosted model failed, using local fallback");
                    }
                }
                value
            }
        }
    }
}
