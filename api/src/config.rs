// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::ApiError;

/// Origin of the hosted event service.
pub const DEFAULT_BASE_URL: &str = "https://circularappfinal.onrender.com";

const EVENTS_PATH: &str = "/api/events";
const ADMIN_PATH: &str = "/api/admin";

/// Event service configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base origin of the event service, e.g. `https://events.example.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Creates a configuration for the given origin with default timeout and user agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// The base origin with any trailing slash removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// URL of the events resource.
    #[must_use]
    pub fn events_url(&self) -> String {
        format!("{}{EVENTS_PATH}", self.origin())
    }

    /// URL of the admin resource.
    #[must_use]
    pub fn admin_url(&self) -> String {
        format!("{}{ADMIN_PATH}", self.origin())
    }

    /// Checks that the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or not an http(s) origin.
    pub fn validate(&self) -> Result<(), ApiError> {
        let origin = self.origin();
        if origin.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base_url must start with http:// or https://, got: {origin}"
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("circular-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
