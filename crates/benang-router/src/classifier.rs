// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification into accounting domains.
//!
//! The hosted model is asked for a structured `{domain, reasoning}` reply.
//! Any failure on that path, including a missing credential, falls back to
//! [`classify_heuristic`]. Classification never returns an error.

use std::str::FromStr;
use std::sync::Arc;

use benang_core::{
    BenangError, ClassificationResult, CredentialState, Domain, GenerationRequest, ModelTransport,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::markers::classify_heuristic;
use crate::outcome::{DegradeReason, Outcome};
use crate::{preview, prompts};

/// Structured reply expected from the routing call.
#[derive(Debug, Deserialize)]
struct RoutingReply {
    domain: String,
    reasoning: String,
}

/// Routes queries to one of the specialist domains.
pub struct Classifier {
    transport: Arc<dyn ModelTransport>,
    credential: CredentialState,
    model: String,
}

impl Classifier {
    pub fn new(
        transport: Arc<dyn ModelTransport>,
        credential: CredentialState,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            credential,
            model: model.into(),
        }
    }

    /// Classify `query`, falling back to the keyword heuristic on any failure.
    pub async fn classify(&self, query: &str) -> ClassificationResult {
        self.classify_outcome(query).await.into_value("classify")
    }

    /// Like [`classify`](Self::classify), but reports whether the fallback was used.
    pub async fn classify_outcome(&self, query: &str) -> Outcome<ClassificationResult> {
        let Some(credential) = self.credential.usable() else {
            debug!(
                credential = self.credential.describe(),
                strategy = "heuristic",
                query = %preview(query),
                "classifying without hosted model"
            );
            return Outcome::degraded(classify_heuristic(query), DegradeReason::NoCredential);
        };

        let request = GenerationRequest::structured(
            prompts::routing_instruction(),
            query,
            prompts::routing_schema(),
        );

        let reply = match self.transport.generate(credential, &self.model, request).await {
            Ok(response) => response.text,
            Err(e) => {
                return Outcome::degraded(
                    classify_heuristic(query),
                    DegradeReason::Remote(e.to_string()),
                );
            }
        };

        let Some(text) = reply else {
            return Outcome::degraded(classify_heuristic(query), DegradeReason::EmptyResponse);
        };

        match parse_routing_reply(&text) {
            Ok(result) => {
                info!(
                    domain = %result.domain,
                    strategy = "remote",
                    transport = self.transport.name(),
                    "query classified"
                );
                Outcome::Nominal(result)
            }
            Err(e) => Outcome::degraded(
                classify_heuristic(query),
                DegradeReason::InvalidResponse(e.to_string()),
            ),
        }
    }
}

/// Parse the model's routing JSON.
///
/// Accepts a reply wrapped in a Markdown code fence. Rejects missing fields,
/// blank reasoning, unknown domains and `GENERAL`.
pub fn parse_routing_reply(text: &str) -> Result<ClassificationResult, BenangError> {
    let body = strip_code_fence(text);
    let reply: RoutingReply = serde_json::from_str(body)
        .map_err(|e| BenangError::Schema(format!("routing reply is not valid JSON: {e}")))?;

    let domain = Domain::from_str(reply.domain.trim())
        .map_err(|_| BenangError::Schema(format!("unknown domain '{}'", reply.domain)))?;
    if !domain.is_specialist() {
        return Err(BenangError::Schema(format!(
            "domain '{domain}' is not a specialist"
        )));
    }

    let reasoning = reply.reasoning.trim();
    if reasoning.is_empty() {
        return Err(BenangError::Schema("reasoning is empty".into()));
    }

    Ok(ClassificationResult::new(domain, reasoning))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubReply, StubTransport, credential};

    fn classifier(stub: &Arc<StubTransport>, state: CredentialState) -> Classifier {
        Classifier::new(stub.clone(), state, "gemini-2.5-flash")
    }

    #[test]
    fn parses_plain_json() {
        let result = parse_routing_reply(
            r#"{"domain": "PURCHASING_AND_INVENTORY", "reasoning": "Pertanyaan tentang stok."}"#,
        )
        .unwrap();
        assert_eq!(result.domain, Domain::PurchasingAndInventory);
        assert_eq!(result.reasoning, "Pertanyaan tentang stok.");
        assert!(!result.is_simulated());
    }

    #[test]
    fn parses_fenced_json() {
        let text = "```json\n{\"domain\":\"FINANCIAL_REPORTING\",\"reasoning\":\"neraca\"}\n```";
        assert_eq!(
            parse_routing_reply(text).unwrap().domain,
            Domain::FinancialReporting
        );
    }

    #[test]
    fn rejects_general_unknown_and_missing_fields() {
        for text in [
            r#"{"domain":"GENERAL","reasoning":"x"}"#,
            r#"{"domain":"HR","reasoning":"x"}"#,
            r#"{"targetAgent":"SALES_AND_REVENUE","reasoning":"x"}"#,
            r#"{"domain":"SALES_AND_REVENUE"}"#,
            r#"{"domain":"SALES_AND_REVENUE","reasoning":"  "}"#,
            "{}",
            "not json",
        ] {
            assert!(
                matches!(parse_routing_reply(text), Err(BenangError::Schema(_))),
                "{text} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn no_credential_never_calls_transport() {
        let stub = StubTransport::new(StubReply::Text("{}".into()));
        for state in [
            CredentialState::Absent,
            CredentialState::Placeholder,
            CredentialState::Malformed,
        ] {
            let outcome = classifier(&stub, state)
                .classify_outcome("berapa stok kain katun?")
                .await;
            assert_eq!(outcome.reason(), Some(&DegradeReason::NoCredential));
            assert_eq!(outcome.value().domain, Domain::PurchasingAndInventory);
            assert!(outcome.value().is_simulated());
        }
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn remote_reply_is_used_when_valid() {
        let stub = StubTransport::new(StubReply::Text(
            r#"{"domain":"MANUFACTURING_COST_ACCOUNTING","reasoning":"Perhitungan HPP."}"#.into(),
        ));
        let outcome = classifier(&stub, credential())
            .classify_outcome("berapa biaya batch ini?")
            .await;
        assert_eq!(
            outcome,
            Outcome::Nominal(ClassificationResult::new(
                Domain::ManufacturingCostAccounting,
                "Perhitungan HPP."
            ))
        );

        let request = stub.last_request().unwrap();
        assert!(request.is_structured());
        assert_eq!(request.contents, "berapa biaya batch ini?");
        assert_eq!(stub.last_model().as_deref(), Some("gemini-2.5-flash"));
    }

    #[tokio::test]
    async fn transport_error_falls_back_to_heuristic() {
        let stub = StubTransport::new(StubReply::Fail);
        let outcome = classifier(&stub, credential())
            .classify_outcome("hitung HPP batch 1024")
            .await;
        assert!(matches!(outcome.reason(), Some(DegradeReason::Remote(_))));
        assert_eq!(outcome.value().domain, Domain::ManufacturingCostAccounting);
        assert!(outcome.value().is_simulated());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn invalid_or_empty_reply_falls_back_to_heuristic() {
        let stub = StubTransport::new(StubReply::Text(r#"{"domain":"GENERAL","reasoning":"?"}"#.into()));
        let outcome = classifier(&stub, credential())
            .classify_outcome("laporan laba rugi bulan ini")
            .await;
        assert!(matches!(outcome.reason(), Some(DegradeReason::InvalidResponse(_))));
        assert_eq!(outcome.value().domain, Domain::FinancialReporting);

        let stub = StubTransport::new(StubReply::Empty);
        let outcome = classifier(&stub, credential()).classify_outcome("halo").await;
        assert_eq!(outcome.reason(), Some(&DegradeReason::EmptyResponse));
        assert_eq!(outcome.value().domain, Domain::General);
    }

    #[tokio::test]
    async fn heuristic_classification_is_idempotent() {
        let stub = StubTransport::new(StubReply::Fail);
        let c = classifier(&stub, CredentialState::Absent);
        let first = c.classify("buat faktur baru").await;
        let second = c.classify("buat faktur baru").await;
        assert_eq!(first, second);
        assert_eq!(first.domain, Domain::SalesAndRevenue);
    }
}
