// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the Circular event service: listing and creating events,
//! and granting or revoking admin rights.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::single_match_else, clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::ApiClient;
pub use crate::config::{ApiConfig, DEFAULT_BASE_URL};
pub use crate::error::ApiError;
pub use crate::types::{
    CreatedEvent, DraftError, ErrorBody, Event, EventDraft, EventId, RoleChange, RoleChangeResponse,
};
