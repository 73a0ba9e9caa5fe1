// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword heuristic used when the hosted classifier is unavailable.
//!
//! The query is lowercased and scanned for domain markers. Matching is plain
//! substring containment, so `"penjualan"` also matches `"jual"` and
//! `"inventory"` matches inside `"inventorylist"`. Rules are checked in table
//! order and the first hit wins:
//!
//! 1. sales → `SALES_AND_REVENUE`
//! 2. purchasing → `PURCHASING_AND_INVENTORY`
//! 3. cost → `MANUFACTURING_COST_ACCOUNTING`
//! 4. financial → `FINANCIAL_REPORTING`
//!
//! A query with no marker routes to `GENERAL`. The order is part of the
//! public behavior: "purchase order" contains both a purchasing and a sales
//! marker and therefore routes to sales.

use benang_core::{ClassificationResult, DEMO_TAG, Domain};

const SALES_MARKERS: &[&str] = &[
    "faktur",
    "invoice",
    "penjualan",
    "jual",
    "sell",
    "sales",
    "revenue",
    "pendapatan",
    "pesanan",
    "order",
];

const PURCHASING_MARKERS: &[&str] = &[
    "pembelian",
    "beli",
    "buy",
    "purchase",
    "stok",
    "stock",
    "inventaris",
    "inventory",
    "persediaan",
    "pemasok",
    "supplier",
    "gudang",
];

const COST_MARKERS: &[&str] = &[
    "hpp",
    "cogs",
    "harga pokok",
    "biaya",
    "cost",
    "wip",
    "overhead",
    "produksi",
    "production",
    "tenaga kerja",
];

const FINANCIAL_MARKERS: &[&str] = &[
    "laba",
    "rugi",
    "profit",
    "loss",
    "neraca",
    "balance sheet",
    "arus kas",
    "cash flow",
    "laporan",
    "report",
];

/// Marker tables in precedence order.
pub const HEURISTIC_RULES: &[(Domain, &[&str])] = &[
    (Domain::SalesAndRevenue, SALES_MARKERS),
    (Domain::PurchasingAndInventory, PURCHASING_MARKERS),
    (Domain::ManufacturingCostAccounting, COST_MARKERS),
    (Domain::FinancialReporting, FINANCIAL_MARKERS),
];

/// First rule hit for `query`: the domain and the marker that matched.
pub fn match_marker(query: &str) -> Option<(Domain, &'static str)> {
    let lower = query.to_lowercase();
    HEURISTIC_RULES.iter().find_map(|(domain, markers)| {
        markers
            .iter()
            .find(|marker| lower.contains(*marker))
            .map(|marker| (*domain, *marker))
    })
}

/// Classify `query` with the keyword heuristic.
///
/// Total over all input, including the empty string. The reasoning always
/// starts with [`DEMO_TAG`] and depends only on the query.
pub fn classify_heuristic(query: &str) -> ClassificationResult {
    match match_marker(query) {
        Some((domain, marker)) => ClassificationResult::new(
            domain,
            format!(
                "{DEMO_TAG} Kata kunci \"{marker}\" cocok dengan agen {}.",
                domain.label()
            ),
        ),
        None => ClassificationResult::new(
            Domain::General,
            format!(
                "{DEMO_TAG} Tidak ada kata kunci spesialis yang cocok, ditangani oleh {}.",
                Domain::General.label()
            ),
        ),
    }
}
