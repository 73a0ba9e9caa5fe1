// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted model transport for deterministic testing.
//!
//! `MockTransport` implements `ModelTransport` without any network access and
//! records every request it receives, so tests can assert how many calls a
//! code path made and what it sent.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use benang_core::{BenangError, Credential, GenerationRequest, GenerationResponse, ModelTransport};

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Reply with this text.
    Text(String),
    /// Reply successfully but with no candidate text.
    Empty,
    /// Fail with a provider error carrying this message.
    Fail(String),
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        MockReply::Text(text.into())
    }

    pub fn fail(message: impl Into<String>) -> Self {
        MockReply::Fail(message.into())
    }
}

/// A request seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub model: String,
    pub request: GenerationRequest,
}

/// A transport that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty the text
/// "mock response" is returned.
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_replies(Vec::new())
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a reply to the queue.
    pub async fn push_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Every call received so far, oldest first.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockReply::text("mock response"))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelTransport for MockTransport {
    fn name(&self) -> &str {
        "mock-transport"
    }

    async fn generate(
        &self,
        _credential: &Credential,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, BenangError> {
        self.calls.lock().await.push(RecordedCall {
            model: model.to_string(),
            request,
        });

        match self.next_reply().await {
            MockReply::Text(text) => Ok(GenerationResponse {
                text: Some(text),
                model: model.to_string(),
            }),
            MockReply::Empty => Ok(GenerationResponse {
                text: None,
                model: model.to_string(),
            }),
            MockReply::Fail(message) => Err(BenangError::provider(message)),
        }
    }
}
