// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use circular_api::{ApiClient, CreatedEvent, Event, EventDraft};

use crate::Error;
use crate::session::Session;

/// Lists and creates events on the service.
#[derive(Debug, Clone)]
pub struct EventRepository {
    client: ApiClient,
    session: Session,
}

impl EventRepository {
    /// Creates a repository using `session` for credentials.
    pub fn new(client: ApiClient, session: Session) -> Self {
        Self { client, session }
    }

    /// All events, or an empty list if they could not be fetched.
    pub async fn list(&self) -> Vec<Event> {
        self.client.list_events().await
    }

    /// Creates an event with the current session's token.
    ///
    /// Without a token the request is still sent, with an empty
    /// `Authorization` header, and the server's rejection is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn create(&self, draft: &EventDraft) -> Result<CreatedEvent, Error> {
        let token = self.session.token().await;
        if token.is_none() {
            tracing::debug!("creating event without a session token");
        }

        Ok(self.client.create_event(draft, token.as_deref()).await?)
    }

    /// Openable URL of the event's attachment, if it has one.
    pub fn attachment_url(&self, event: &Event) -> Option<String> {
        event
            .file_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| self.client.attachment_url(url))
    }
}
