// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the routing core and its outbound adapters.

pub mod transport;

pub use transport::ModelTransport;
