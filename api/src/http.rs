// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with bearer authentication and body decoding.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for event service operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a request without credentials.
    pub fn build_request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Adds the `Authorization` header.
    ///
    /// A missing or empty token still sends the header, with an empty value.
    /// So does a token that cannot be a header value.
    pub fn bearer(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        let value = match token.filter(|t| !t.is_empty()) {
            Some(token) => HeaderValue::from_str(&format!("Bearer {token}")).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "token is not a valid header value, sending it empty");
                HeaderValue::from_static("")
            }),
            None => HeaderValue::from_static(""),
        };
        req.header(AUTHORIZATION, value)
    }

    /// Sends a request. Only transport failures are errors; any status is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent.
    pub async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        Ok(req.send().await?)
    }

    /// Reads the body as text, then decodes it as JSON.
    ///
    /// An empty body decodes as `{}`; anything else that is not JSON, blank
    /// text included, yields an error embedding the raw text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or decoded.
    pub async fn read_json<T: DeserializeOwned>(
        resp: Response,
    ) -> Result<(StatusCode, T), ApiError> {
        let status = resp.status();
        let text = resp.text().await?;
        let text = if text.is_empty() { "{}" } else { text.as_str() };
        let data = serde_json::from_str(text).map_err(|e| {
            tracing::debug!(%status, error = %e, "response body is not valid JSON");
            ApiError::InvalidResponse(format!("Invalid JSON response from server: {text}"))
        })?;
        Ok((status, data))
    }
}
