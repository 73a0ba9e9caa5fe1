// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for benang, the garment-accounting query router.
//!
//! Holds the closed [`Domain`] set, the classification result, the hosted
//! model request/response shapes, the [`CredentialState`] resolved from
//! configuration and the [`ModelTransport`] trait every outbound adapter
//! implements.

pub mod credential;
pub mod error;
pub mod traits;
pub mod types;

pub use credential::{Credential, CredentialState};
pub use error::BenangError;
pub use traits::ModelTransport;
pub use types::{ClassificationResult, DEMO_TAG, Domain, GenerationRequest, GenerationResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_set_is_closed_at_five() {
        assert_eq!(Domain::ALL.len(), 5);
        assert_eq!(Domain::SPECIALISTS.len(), 4);
    }

    #[test]
    fn transport_trait_is_object_safe() {
        fn _assert_dyn(_: &dyn ModelTransport) {}
    }
}
