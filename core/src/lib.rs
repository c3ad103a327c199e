// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Session-authenticated access to the Circular event service, and the
//! filtering used to present its listings.

mod circular;
mod config;
mod credential;
mod error;
mod filter;
mod repository;
mod role;
mod session;

pub use crate::circular::Circular;
pub use crate::config::{APP_NAME, Config};
pub use crate::credential::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY,
};
pub use crate::error::Error;
pub use crate::filter::{
    EventConditions, EventFilter, TemporalState, classify, filter_events, is_ongoing, is_past,
    is_upcoming, matches_search, parse_event_date,
};
pub use crate::repository::EventRepository;
pub use crate::role::AdminRoleManager;
pub use crate::session::Session;

pub use circular_api::{
    ApiClient, ApiConfig, ApiError, CreatedEvent, DraftError, Event, EventDraft, EventId, RoleChange,
    RoleChangeResponse,
};
