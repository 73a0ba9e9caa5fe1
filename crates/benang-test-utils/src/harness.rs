// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` wires an [`AccountingAssistant`] to a [`MockTransport`]
//! using a real [`BenangConfig`], so tests drive the same pipeline the binary
//! uses without touching the network.

use std::sync::Arc;

use benang_config::BenangConfig;
use benang_core::CredentialState;
use benang_router::{AccountingAssistant, AssistantReply};

use crate::mock_transport::{MockReply, MockTransport};

/// A key that passes credential classification.
pub const TEST_API_KEY: &str = "AIzaSyD-7e5tK3y0123456789abcdefGHIJKL";

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    replies: Vec<MockReply>,
    api_key: Option<String>,
    config: BenangConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            replies: Vec::new(),
            api_key: None,
            config: BenangConfig::default(),
        }
    }

    /// Configure a usable credential.
    pub fn online(self) -> Self {
        self.with_api_key(TEST_API_KEY)
    }

    /// Configure a raw API key value; it is classified like a configured key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set scripted transport replies.
    pub fn with_replies(mut self, replies: Vec<MockReply>) -> Self {
        self.replies = replies;
        self
    }

    /// Start from a specific configuration.
    pub fn with_config(mut self, config: BenangConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestHarness {
        let mut config = self.config;
        if self.api_key.is_some() {
            config.gemini.api_key = self.api_key;
        }

        let transport = Arc::new(MockTransport::with_replies(self.replies));
        let credential = config.gemini.credential_state();
        let assistant = AccountingAssistant::new(
            transport.clone(),
            credential.clone(),
            config.gemini.model.clone(),
        );

        TestHarness {
            transport,
            assistant,
            credential,
            config,
        }
    }
}

/// A complete test environment around a mock transport.
pub struct TestHarness {
    /// The scripted transport shared by classifier and responder.
    pub transport: Arc<MockTransport>,
    /// The assistant under test.
    pub assistant: AccountingAssistant,
    /// Credential state derived from `config`.
    pub credential: CredentialState,
    /// Effective configuration.
    pub config: BenangConfig,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Run one query through classify-then-respond.
    pub async fn ask(&self, query: &str) -> AssistantReply {
        self.assistant.ask(query).await
    }

    /// Add a reply to the transport queue.
    pub async fn push_reply(&self, reply: MockReply) {
        self.transport.push_reply(reply).await;
    }

    pub async fn transport_calls(&self) -> usize {
        self.transport.call_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benang_core::Domain;

    #[tokio::test]
    async fn default_harness_is_offline() {
        let harness = TestHarness::builder().build();
        assert_eq!(harness.credential.describe(), "absent");

        let reply = harness.ask("laporan laba rugi bulan ini").await;
        assert_eq!(reply.classification.domain, Domain::FinancialReporting);
        assert!(reply.is_simulated());
        assert_eq!(harness.transport_calls().await, 0);
    }

    #[tokio::test]
    async fn online_harness_uses_scripted_replies() {
        let harness = TestHarness::builder()
            .online()
            .with_replies(vec![
                MockReply::text(r#"{"domain":"SALES_AND_REVENUE","reasoning":"Faktur."}"#),
                MockReply::text("Faktur INV-001 dibuat."),
            ])
            .build();

        let reply = harness.ask("buat faktur baru").await;
        assert_eq!(reply.classification.domain, Domain::SalesAndRevenue);
        assert_eq!(reply.answer, "Faktur INV-001 dibuat.");
        assert!(!reply.is_simulated());
        assert_eq!(harness.transport_calls().await, 2);
    }

    #[tokio::test]
    async fn custom_config_model_reaches_transport() {
        let mut config = BenangConfig::default();
        config.gemini.model = "gemini-2.0-flash-lite".into();
        let harness = TestHarness::builder()
            .with_config(config)
            .online()
            .with_replies(vec![MockReply::fail("HTTP 503"), MockReply::text("ok")])
            .build();

        harness.ask("hitung HPP batch 1024").await;
        let calls = harness.transport.calls().await;
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.model == "gemini-2.0-flash-lite"));
    }

    #[test]
    fn placeholder_key_stays_offline() {
        let harness = TestHarness::builder().with_api_key("YOUR_API_KEY").build();
        assert_eq!(harness.credential.describe(), "placeholder");
    }
}
