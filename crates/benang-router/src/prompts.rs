// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System instructions and the routing response schema.
//!
//! Everything here is derived from [`Domain::SPECIALISTS`] and exhaustive
//! matches over [`Domain`], so adding a domain fails to compile until it has
//! a definition, a routing rule and a persona.

use benang_core::Domain;
use serde_json::{Value, json};

/// Appended to every persona.
pub const FORMAT_DIRECTIVE: &str = " SAJIKAN DATA (seperti daftar barang, rincian biaya, atau jurnal) \
DALAM BENTUK TABEL MARKDOWN AGAR MUDAH DIBACA.";

const ROUTER_PREAMBLE: &str = "Sebagai Agen Utama dalam Sistem Informasi Akuntansi (SIA) \
Manufaktur Garmen, peran Anda adalah menjadi router cerdas (Manage Accounting Operations). \
Anda harus secara konsisten dan akurat mengarahkan permintaan pengguna ke salah satu dari \
empat Sub-Agen spesialis di bawah.";

const ROUTER_TIEBREAK: &str =
    "* Jika tidak jelas, gunakan penilaian terbaik Anda berdasarkan konteks manufaktur garmen.";

fn definition(domain: Domain) -> &'static str {
    match domain {
        Domain::SalesAndRevenue => {
            "Memproses pesanan penjualan, menghasilkan faktur, dan melacak pendapatan real-time."
        }
        Domain::PurchasingAndInventory => {
            "Mengelola pengadaan bahan baku, memantau tingkat persediaan, dan menyediakan informasi pemasok."
        }
        Domain::FinancialReporting => {
            "Menghasilkan laporan keuangan formal (Laba Rugi, Neraca, Arus Kas) dan laporan analitis."
        }
        Domain::ManufacturingCostAccounting => {
            "Menghitung HPP (Harga Pokok Produksi), melacak biaya (bahan baku, tenaga kerja, overhead), \
dan menilai persediaan WIP/Barang Jadi."
        }
        Domain::General => "Menangani pertanyaan umum di luar empat spesialis.",
    }
}

fn routing_rule(domain: Domain) -> &'static str {
    match domain {
        Domain::SalesAndRevenue => "FAKTUR, PESANAN PENJUALAN, atau PELACAKAN PENDAPATAN",
        Domain::PurchasingAndInventory => {
            "PEMBELIAN BAHAN BAKU, TINGKAT STOK/INVENTARIS, atau INFORMASI PEMASOK"
        }
        Domain::FinancialReporting => {
            "LAPORAN LABA RUGI, NERACA, ARUS KAS, atau KEPATUHAN AKUNTANSI"
        }
        Domain::ManufacturingCostAccounting => {
            "PERHITUNGAN HPP, BIAYA PRODUKSI, PENGGUNAAN BAHAN BAKU, atau PENILAIAN WIP"
        }
        Domain::General => "hal di luar cakupan spesialis",
    }
}

/// System instruction for the structured routing call.
pub fn routing_instruction() -> String {
    let mut out = String::from(ROUTER_PREAMBLE);

    out.push_str("\n\nDEFINISI SUB-AGEN SPESIALIS:\n");
    for (i, domain) in Domain::SPECIALISTS.iter().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", i + 1, domain, definition(*domain)));
    }

    out.push_str("\nLOGIKA PERUTEAN:\n");
    for domain in Domain::SPECIALISTS {
        out.push_str(&format!(
            "* Jika permintaan terkait {} -> {}.\n",
            routing_rule(domain),
            domain
        ));
    }
    out.push_str(ROUTER_TIEBREAK);
    out
}

/// Response schema for the routing call.
///
/// `domain` is restricted to the four specialists; both fields are required.
pub fn routing_schema() -> Value {
    let allowed: Vec<&str> = Domain::SPECIALISTS.iter().map(Domain::as_str).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "domain": {
                "type": "STRING",
                "enum": allowed,
            },
            "reasoning": {
                "type": "STRING",
                "description": "Penjelasan singkat mengapa agen ini dipilih.",
            },
        },
        "required": ["domain", "reasoning"],
    })
}

/// Persona for the agent answering in `domain`.
pub fn persona(domain: Domain) -> &'static str {
    match domain {
        Domain::SalesAndRevenue => {
            "Anda adalah Agen Penjualan & Pendapatan. Tugas Anda: Mengelola faktur, pesanan \
penjualan, dan pelacakan pendapatan. Berikan jawaban profesional terkait transaksi penjualan garmen."
        }
        Domain::PurchasingAndInventory => {
            "Anda adalah Agen Pembelian & Inventaris. Tugas Anda: Mengelola stok bahan baku (kain, \
benang, kancing), purchase order, dan pemasok. Berikan data estimasi stok jika diminta."
        }
        Domain::FinancialReporting => {
            "Anda adalah Agen Pelaporan Keuangan. Tugas Anda: Menyajikan Laporan Laba Rugi, Neraca, \
dan Arus Kas. Gunakan bahasa akuntansi formal dan standar."
        }
        Domain::ManufacturingCostAccounting => {
            "Anda adalah Agen Akuntansi Biaya Manufaktur. Tugas Anda: Menghitung HPP (Harga Pokok \
Produksi), melacak biaya Job Order, biaya bahan baku, tenaga kerja langsung, dan overhead pabrik. \
Jelaskan perhitungan biaya secara rinci."
        }
        Domain::General => "Anda adalah asisten akuntansi umum.",
    }
}

/// Full system instruction for answering in `domain`.
pub fn instruction(domain: Domain) -> String {
    format!("{}{FORMAT_DIRECTIVE}", persona(domain))
}
