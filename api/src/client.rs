// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the event service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{
    CreatedEvent, ErrorBody, Event, EventDraft, RoleChange, RoleChangeResponse,
};

/// Client for listing and creating events and managing admin roles.
///
/// # Example
///
/// ```ignore
/// use circular_api::{ApiClient, ApiConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ApiConfig::new("https://events.example.com"))?;
/// let events = client.list_events().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Lists all events. No credentials are sent.
    ///
    /// Never fails: transport errors, non-success statuses and undecodable
    /// bodies are logged and yield an empty list.
    pub async fn list_events(&self) -> Vec<Event> {
        let url = self.config.events_url();
        tracing::debug!(%url, "listing events");

        match self.try_list_events(&url).await {
            Ok(events) => {
                tracing::debug!(count = events.len(), "events listed");
                events
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to list events, falling back to empty");
                Vec::new()
            }
        }
    }

    async fn try_list_events(&self, url: &str) -> Result<Vec<Event>, ApiError> {
        let resp = self
            .http
            .send(self.http.build_request(Method::GET, url))
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: "Network response was not ok".to_string(),
            });
        }

        let items = resp
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to decode events: {e}")))?;

        let events = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Event>(item) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed event");
                    None
                }
            })
            .collect();
        Ok(events)
    }

    /// Creates an event.
    ///
    /// The `Authorization` header carries `Bearer <token>` when a token is
    /// given, and is sent empty otherwise; the server decides whether that is
    /// acceptable.
    ///
    /// Any success reply counts as created; see [`CreatedEvent`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is not JSON, or the
    /// server rejects the event. A rejection carries the server's `message`,
    /// else its serialized `errors`, else a generic message.
    pub async fn create_event(
        &self,
        draft: &EventDraft,
        token: Option<&str>,
    ) -> Result<CreatedEvent, ApiError> {
        let url = self.config.events_url();
        tracing::debug!(%url, name = %draft.name, "creating event");

        self.try_create_event(&url, draft, token)
            .await
            .inspect_err(|e| tracing::error!(%url, error = %e, "failed to create event"))
    }

    async fn try_create_event(
        &self,
        url: &str,
        draft: &EventDraft,
        token: Option<&str>,
    ) -> Result<CreatedEvent, ApiError> {
        let req = HttpClient::bearer(self.http.build_request(Method::POST, url), token).json(draft);
        let resp = self.http.send(req).await?;
        let (status, data) = HttpClient::read_json::<Value>(resp).await?;

        if !status.is_success() {
            let message = ErrorBody::from_value(&data)
                .reason()
                .unwrap_or_else(|| "Failed to create event".to_string());
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created = CreatedEvent::from_body(data);
        if created.event.is_none() {
            tracing::warn!(%status, "event created, but the reply does not describe it");
        }
        Ok(created)
    }

    /// Grants or revokes admin rights on another account.
    ///
    /// The token is supplied by the caller and not looked up here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is not JSON (the raw
    /// body is embedded in the message), or the server rejects the change.
    pub async fn manage_admin(
        &self,
        change: &RoleChange,
        token: &str,
    ) -> Result<RoleChangeResponse, ApiError> {
        let url = format!("{}/role", self.config.admin_url());
        tracing::debug!(%url, email = %change.email, action = %change.action, "changing role");

        self.try_manage_admin(&url, change, token)
            .await
            .inspect_err(|e| tracing::error!(%url, error = %e, "failed to change role"))
    }

    async fn try_manage_admin(
        &self,
        url: &str,
        change: &RoleChange,
        token: &str,
    ) -> Result<RoleChangeResponse, ApiError> {
        let req =
            HttpClient::bearer(self.http.build_request(Method::POST, url), Some(token)).json(change);
        let resp = self.http.send(req).await?;
        let (status, data) = HttpClient::read_json::<Value>(resp).await?;

        if !status.is_success() {
            let message = ErrorBody::from_value(&data)
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_value(data).unwrap_or_default())
    }

    /// Resolves an event attachment link to an openable URL.
    ///
    /// Links starting with `http` are returned unchanged; anything else is
    /// taken as a path on the service origin.
    #[must_use]
    pub fn attachment_url(&self, file_url: &str) -> String {
        resolve_attachment(self.config.origin(), file_url)
    }
}

fn resolve_attachment(origin: &str, file_url: &str) -> String {
    if file_url.starts_with("http") {
        file_url.to_string()
    } else {
        format!("{origin}/{}", file_url.strip_prefix('/').unwrap_or(file_url))
    }
}
