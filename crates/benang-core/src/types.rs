// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used by the classifier, responder and transports.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Prefix carried by every reasoning string or answer produced without the hosted model.
pub const DEMO_TAG: &str = "[Mode Simulasi]";

/// The routing domain (agent) that handles a query.
///
/// The set is closed. `General` is the router/default slot and is never a
/// valid answer from the remote classifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    General,
    SalesAndRevenue,
    PurchasingAndInventory,
    FinancialReporting,
    ManufacturingCostAccounting,
}

impl Domain {
    /// Every domain, default first.
    pub const ALL: [Domain; 5] = [
        Domain::General,
        Domain::SalesAndRevenue,
        Domain::PurchasingAndInventory,
        Domain::FinancialReporting,
        Domain::ManufacturingCostAccounting,
    ];

    /// The four specialist domains, in the order they are offered to the remote classifier.
    pub const SPECIALISTS: [Domain; 4] = [
        Domain::SalesAndRevenue,
        Domain::PurchasingAndInventory,
        Domain::FinancialReporting,
        Domain::ManufacturingCostAccounting,
    ];

    /// Wire identifier, e.g. `SALES_AND_REVENUE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::General => "GENERAL",
            Domain::SalesAndRevenue => "SALES_AND_REVENUE",
            Domain::PurchasingAndInventory => "PURCHASING_AND_INVENTORY",
            Domain::FinancialReporting => "FINANCIAL_REPORTING",
            Domain::ManufacturingCostAccounting => "MANUFACTURING_COST_ACCOUNTING",
        }
    }

    /// Whether this is one of the four specialist domains.
    pub fn is_specialist(&self) -> bool {
        !matches!(self, Domain::General)
    }

    /// Display name shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::General => "Manajer Operasional",
            Domain::SalesAndRevenue => "Penjualan & Pendapatan",
            Domain::PurchasingAndInventory => "Pembelian & Inventaris",
            Domain::FinancialReporting => "Pelaporan Keuangan",
            Domain::ManufacturingCostAccounting => "Akuntansi Biaya Manufaktur",
        }
    }
}

/// The classifier's decision for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Domain that should answer the query.
    pub domain: Domain,
    /// Short explanation of the decision.
    pub reasoning: String,
}

impl ClassificationResult {
    pub fn new(domain: Domain, reasoning: impl Into<String>) -> Self {
        Self {
            domain,
            reasoning: reasoning.into(),
        }
    }

    /// True when the decision came from the local heuristic rather than the hosted model.
    pub fn is_simulated(&self) -> bool {
        self.reasoning.starts_with(DEMO_TAG)
    }
}

/// A single-turn request to a hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System instruction sent alongside the user content.
    pub system_instruction: String,
    /// The user's query text.
    pub contents: String,
    /// When set, the model must answer with JSON matching this schema.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationRequest {
    /// Free-form text generation request.
    pub fn text(system_instruction: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            contents: contents.into(),
            response_schema: None,
        }
    }

    /// Structured-output request constrained to `schema`.
    pub fn structured(
        system_instruction: impl Into<String>,
        contents: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            contents: contents.into(),
            response_schema: Some(schema),
        }
    }

    pub fn is_structured(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// A hosted model's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Generated text; `None` when the model returned no usable candidate.
    pub text: Option<String>,
    /// Model that produced the reply.
    pub model: String,
}
