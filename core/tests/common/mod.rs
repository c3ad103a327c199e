// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Mock event service helpers

mod server;

#[allow(unused_imports)]
pub use fixtures::{day, hackathon_draft, sample_events, test_config, test_event};
#[allow(unused_imports)]
pub use server::{mount_events, mount_role_change};
