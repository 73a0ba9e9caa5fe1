// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini transport for benang.
//!
//! Implements [`ModelTransport`] over the Gemini `generateContent` REST API,
//! covering both free-form text generation and structured JSON output.

pub mod client;
pub mod types;

use async_trait::async_trait;
use benang_config::model::GeminiConfig;
use benang_core::{BenangError, Credential, GenerationRequest, GenerationResponse, ModelTransport};
use tracing::debug;

use crate::client::GeminiClient;
use crate::types::{Content, GenerateContentRequest, GenerationConfig};

/// Gemini transport implementing [`ModelTransport`].
#[derive(Debug, Clone)]
pub struct GeminiTransport {
    client: GeminiClient,
}

impl GeminiTransport {
    pub fn new(config: &GeminiConfig) -> Result<Self, BenangError> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    /// Converts the provider-neutral request into the Gemini wire body.
    fn to_api_request(request: GenerationRequest) -> GenerateContentRequest {
        let system_instruction = if request.system_instruction.trim().is_empty() {
            None
        } else {
            Some(Content::system(request.system_instruction))
        };
        GenerateContentRequest {
            system_instruction,
            contents: vec![Content::user(request.contents)],
            generation_config: request.response_schema.map(GenerationConfig::json),
        }
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        credential: &Credential,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, BenangError> {
        let structured = request.is_structured();
        let body = Self::to_api_request(request);
        let response = self
            .client
            .generate_content(credential.expose(), model, &body)
            .await?;

        let text = response.first_text();
        debug!(
            model,
            structured,
            candidates = response.candidates.len(),
            has_text = text.is_some(),
            "gemini generation finished"
        );

        Ok(GenerationResponse {
            text,
            model: response.model_version.unwrap_or_else(|| model.to_string()),
        })
    }
}
