// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Mock event service helpers built on wiremock.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves `events` from `GET /api/events`.
pub async fn mount_events(server: &MockServer, events: Value) {
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events))
        .mount(server)
        .await;
}

/// Answers `POST /api/admin/role` with `status` and a JSON `body`.
pub async fn mount_role_change(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/admin/role"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
