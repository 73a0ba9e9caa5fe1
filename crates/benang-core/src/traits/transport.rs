// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport trait for hosted language-model integrations.

use async_trait::async_trait;

use crate::credential::Credential;
use crate::error::BenangError;
use crate::types::{GenerationRequest, GenerationResponse};

/// Outbound adapter to a hosted language model.
///
/// The credential travels with each call instead of living inside the
/// adapter, so callers decide per call whether the remote path is allowed.
/// Implementations own their timeout budget; `generate` must resolve or fail
/// within it.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Human-readable adapter name for logs.
    fn name(&self) -> &str;

    /// Sends one single-turn request and returns the model's reply.
    async fn generate(
        &self,
        credential: &Credential,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, BenangError>;
}
