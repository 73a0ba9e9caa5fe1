// SPDX-FileCopyrightText: 2026 Benang Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for benang integration tests.
//!
//! # Components
//!
//! - [`MockTransport`] - scripted model transport that records its calls
//! - [`TestHarness`] - assistant wired to a mock transport and a real config

pub mod harness;
pub mod mock_transport;

pub use harness::{TEST_API_KEY, TestHarness, TestHarnessBuilder};
pub use mock_transport::{MockReply, MockTransport, RecordedCall};
