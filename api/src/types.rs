// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an event, assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new `EventId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EventId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An event as listed by the server.
///
/// Text fields that the server omits or sends as `null` decode as empty or
/// `None`. Fields this client does not know about are kept in [`Event::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier within a listing.
    #[serde(rename = "_id", alias = "id")]
    pub id: EventId,
    /// Display title.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    /// First day of the event, as an ISO 8601 date or date-time string.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub start_date: String,
    /// Last day of the event, as an ISO 8601 date or date-time string.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub end_date: String,
    /// Free-text time of day, not parsed.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub time: String,
    /// Where the event takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Attachment link, absolute or relative to the service origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Any other fields returned by the server.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reply to a successful event creation.
///
/// The server has stored the event whatever the reply looks like, so an
/// unrecognized body is kept as is rather than reported as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEvent {
    /// The stored event, when the reply is an event or wraps one under `event`.
    pub event: Option<Event>,
    /// The reply body as received.
    pub body: Value,
}

impl CreatedEvent {
    /// Interprets a success body, never failing.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        let event = Event::deserialize(&body).ok().or_else(|| {
            body.get("event")
                .and_then(|inner| Event::deserialize(inner).ok())
        });
        Self { event, body }
    }
}

/// Draft for an event, sent when creating a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Display title.
    pub name: String,
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: String,
    /// Free-text time of day.
    pub time: String,
    /// Where the event takes place.
    pub venue: String,
    /// Longer description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Attachment link.
    pub file_url: String,
}

impl EventDraft {
    /// Checks the fields the admin form requires before submitting.
    ///
    /// The client never calls this itself; requests are sent as given.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("name", &self.name),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
            ("time", &self.time),
            ("venue", &self.venue),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.is_empty()) {
            return Err(DraftError::MissingField(*field));
        }

        if !self.file_url.is_empty() && !is_http_url(&self.file_url) {
            return Err(DraftError::InvalidUrl(self.file_url.clone()));
        }

        Ok(())
    }
}

/// Problems found by [`EventDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// A required field is empty.
    #[error("Please fill all required fields: {0} is missing")]
    MissingField(&'static str),

    /// The attachment link is not an http(s) URL.
    #[error("Enter a valid http(s) URL: {0}")]
    InvalidUrl(String),
}

fn is_http_url(s: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| s.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

/// A request to change the role of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleChange {
    /// Email of the account.
    pub email: String,
    /// Action for the server, usually `grant` or `revoke`. Passed through as is.
    pub action: String,
}

impl RoleChange {
    /// Creates a role change with an arbitrary action.
    #[must_use]
    pub fn new(email: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            action: action.into(),
        }
    }

    /// Grants admin rights to the account.
    #[must_use]
    pub fn grant(email: impl Into<String>) -> Self {
        Self::new(email, "grant")
    }

    /// Revokes admin rights from the account.
    #[must_use]
    pub fn revoke(email: impl Into<String>) -> Self {
        Self::new(email, "revoke")
    }
}

/// Reply to a successful role change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoleChangeResponse {
    /// Human-readable confirmation.
    #[serde(default)]
    pub message: Option<String>,
    /// Any other fields returned by the server.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of an error reply. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// Message describing the failure.
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
    /// Structured validation errors, in any shape.
    #[serde(default)]
    pub errors: Option<Value>,
}

impl ErrorBody {
    /// Decodes an error body from any JSON value, never failing.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// The relayed message: `message`, else the serialized `errors`.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        if let Some(message) = self.message.as_ref().filter(|m| !m.is_empty()) {
            return Some(message.clone());
        }

        self.errors
            .as_ref()
            .filter(|e| !e.is_null())
            .map(Value::to_string)
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
