// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain-specific answer generation.

use std::sync::Arc;

use benang_core::{CredentialState, DEMO_TAG, Domain, GenerationRequest, ModelTransport};
use tracing::{debug, info};

use crate::outcome::{DegradeReason, Outcome};
use crate::{preview, prompts};

/// Returned when the model replies without any text.
pub const NO_RESPONSE_TEXT: &str = "Maaf, saya tidak dapat menghasilkan respon saat ini.";

/// Returned when the remote call fails.
pub const REMOTE_FAILURE_TEXT: &str = "Terjadi kesalahan saat memproses permintaan Anda.";

/// Answer given when no credential is configured.
///
/// Names the resolved domain and echoes the query verbatim.
pub fn simulated_answer(domain: Domain, query: &str) -> String {
    format!(
        "{DEMO_TAG} Agen {domain} ({}) menerima pertanyaan: \"{query}\". \
Atur GEMINI_API_KEY untuk mendapatkan analisis dari model.",
        domain.label()
    )
}

/// Produces the answer for a query once its domain is known.
pub struct Responder {
    transport: Arc<dyn ModelTransport>,
    credential: CredentialState,
    model: String,
}

impl Responder {
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

    /// Answer `query` in the voice of `domain`. Never fails.
    pub async fn respond(&self, domain: Domain, query: &str) -> String {
        self.respond_outcome(domain, query).await.into_value("respond")
    }

    /// Like [`respond`](Self::respond), but reports whether a fallback text was used.
    pub async fn respond_outcome(&self, domain: Domain, query: &str) -> Outcome<String> {
        let Some(credential) = self.credential.usable() else {
            debug!(
                domain = %domain,
                credential = self.credential.describe(),
                query = %preview(query),
                "answering in simulated mode"
            );
            return Outcome::degraded(simulated_answer(domain, query), DegradeReason::NoCredential);
        };

        let request = GenerationRequest::text(prompts::instruction(domain), query);
        match self.transport.generate(credential, &self.model, request).await {
            Ok(response) => match response.text.filter(|t| !t.trim().is_empty()) {
                Some(text) => {
                    info!(
                        domain = %domain,
                        model = response.model.as_str(),
                        chars = text.chars().count(),
                        "answer generated"
                    );
                    Outcome::Nominal(text)
                }
                None => Outcome::degraded(NO_RESPONSE_TEXT.to_string(), DegradeReason::EmptyResponse),
            },
            Err(e) => Outcome::degraded(
                REMOTE_FAILURE_TEXT.to_string(),
                DegradeReason::Remote(e.to_string()),
            ),
        }
    }
}
