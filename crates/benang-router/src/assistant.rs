// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classify-then-respond pipeline.

use std::sync::Arc;

use benang_core::{ClassificationResult, CredentialState, DEMO_TAG, ModelTransport};
use serde::Serialize;
use tracing::info;

use crate::classifier::Classifier;
use crate::preview;
use crate::responder::Responder;

/// Routing decision plus the answer for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub classification: ClassificationResult,
    pub answer: String,
}

impl AssistantReply {
    /// The line shown before the answer, e.g.
    /// `Mengarahkan ke **Pembelian & Inventaris**: ...`.
    pub fn routing_notice(&self) -> String {
        format!(
            "Mengarahkan ke **{}**: {}",
            self.classification.domain.label(),
            self.classification.reasoning
        )
    }

    /// True when either step ran without the hosted model.
    pub fn is_simulated(&self) -> bool {
        self.classification.is_simulated() || self.answer.starts_with(DEMO_TAG)
    }
}

/// Accounting assistant: a [`Classifier`] and a [`Responder`] sharing one transport.
pub struct AccountingAssistant {
    classifier: Classifier,
    responder: Responder,
}

impl AccountingAssistant {
    pub fn new(
        transport: Arc<dyn ModelTransport>,
        credential: CredentialState,
        model: impl Into<String>,
    ) -> Self {
        let model = model.into();
        Self {
            classifier: Classifier::new(transport.clone(), credential.clone(), model.clone()),
            responder: Responder::new(transport, credential, model),
        }
    }

    pub fn from_parts(classifier: Classifier, responder: Responder) -> Self {
        Self {
            classifier,
            responder,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Classify `query`, then answer it in the chosen domain.
    pub async fn ask(&self, query: &str) -> AssistantReply {
        let classification = self.classifier.classify(query).await;
        let answer = self.responder.respond(classification.domain, query).await;
        info!(
            domain = %classification.domain,
            simulated = classification.is_simulated(),
            query = %preview(query),
            "query answered"
        );
        AssistantReply {
            classification,
            answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{REMOTE_FAILURE_TEXT, simulated_answer};
    use crate::test_support::{StubReply, StubTransport, credential};
    use benang_core::Domain;

    #[tokio::test]
    async fn offline_ask_is_fully_simulated() {
        let stub = StubTransport::new(StubReply::Fail);
        let assistant = AccountingAssistant::new(stub.clone(), CredentialState::Absent, "m");
        let reply = assistant.ask("berapa stok kain katun?").await;

        assert_eq!(reply.classification.domain, Domain::PurchasingAndInventory);
        assert_eq!(
            reply.answer,
            simulated_answer(Domain::PurchasingAndInventory, "berapa stok kain katun?")
        );
        assert!(reply.is_simulated());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn failing_transport_degrades_both_steps_independently() {
        let stub = StubTransport::new(StubReply::Fail);
        let assistant = AccountingAssistant::new(stub.clone(), credential(), "m");
        let reply = assistant.ask("laporan laba rugi bulan ini").await;

        assert_eq!(reply.classification.domain, Domain::FinancialReporting);
        assert_eq!(reply.answer, REMOTE_FAILURE_TEXT);
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn from_parts_keeps_independent_steps() {
        let stub = StubTransport::new(StubReply::Text("Neraca per 31 Desember.".into()));
        let assistant = AccountingAssistant::from_parts(
            Classifier::new(stub.clone(), CredentialState::Absent, "m"),
            Responder::new(stub.clone(), credential(), "m"),
        );
        let reply = assistant.ask("laporan laba rugi bulan ini").await;

        assert_eq!(reply.classification.domain, Domain::FinancialReporting);
        assert!(reply.classification.is_simulated());
        assert_eq!(reply.answer, "Neraca per 31 Desember.");
        assert_eq!(stub.call_count(), 1);
    }

    #[test]
    fn routing_notice_uses_label() {
        let reply = AssistantReply {
            classification: ClassificationResult::new(Domain::SalesAndRevenue, "Faktur baru."),
            answer: "ok".into(),
        };
        assert_eq!(
            reply.routing_notice(),
            "Mengarahkan ke **Penjualan & Pendapatan**: Faktur baru."
        );
        assert!(!reply.is_simulated());
    }
}
