// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing and answering for the benang accounting assistant.
//!
//! This crate provides:
//! - [`Classifier`]: hosted structured-output classification with a keyword fallback
//! - [`Responder`]: domain persona answers with fixed fallback texts
//! - [`AccountingAssistant`]: the classify-then-respond pipeline
//!
//! Neither component returns an error. Failures are absorbed and replaced by
//! a fallback value that is visibly marked as simulated.

pub mod assistant;
pub mod classifier;
pub mod markers;
pub mod outcome;
pub mod prompts;
pub mod responder;

pub use assistant::{AccountingAssistant, AssistantReply};
pub use classifier::{Classifier, parse_routing_reply};
pub use markers::{HEURISTIC_RULES, classify_heuristic};
pub use outcome::{DegradeReason, Outcome};
pub use responder::{NO_RESPONSE_TEXT, REMOTE_FAILURE_TEXT, Responder, simulated_answer};

const PREVIEW_CHARS: usize = 80;

/// Query text shortened for log lines.
pub(crate) fn preview(query: &str) -> String {
    if query.chars().count() <= PREVIEW_CHARS {
        query.to_string()
    } else {
        let head: String = query.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}
