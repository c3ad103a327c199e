// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Admin role changes through the role manager.

use circular_core::{ApiError, Circular, Error, MemoryCredentialStore, Session};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{mount_role_change, test_config};

fn circular(server: &MockServer, session: Session) -> Circular {
    Circular::with_session(test_config(&server.uri(), None), session)
        .expect("Failed to create circular")
}

fn signed_in(server: &MockServer) -> Circular {
    circular(server, Session::new(MemoryCredentialStore::with_token("admin-token")))
}

#[tokio::test]
async fn workflow_role_change_without_token_never_reaches_server() {
    let server = MockServer::start().await;
    mount_role_change(&server, 200, json!({ "message": "ok" })).await;

    let app = circular(&server, Session::in_memory());
    let err = app.roles().grant("a@b.com").await.unwrap_err();

    assert!(matches!(err, Error::Unauthorized));
    assert_eq!(err.to_string(), "Unauthorized: please log in again");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn workflow_role_change_after_logout_is_refused() {
    let server = MockServer::start().await;
    let app = signed_in(&server);
    app.session().logout().await;

    let err = app.roles().revoke("a@b.com").await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn workflow_grant_sends_token_and_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/role"))
        .and(header("authorization", "Bearer admin-token"))
        .and(body_json(json!({ "email": "a@b.com", "action": "grant" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Admin granted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = signed_in(&server).roles().grant("a@b.com").await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("Admin granted"));
}

#[tokio::test]
async fn workflow_revoke_sends_revoke_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/role"))
        .and(body_json(json!({ "email": "a@b.com", "action": "revoke" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Admin revoked" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = signed_in(&server).roles().revoke("a@b.com").await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("Admin revoked"));
}

#[tokio::test]
async fn workflow_unknown_action_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/role"))
        .and(body_json(json!({ "email": "a@b.com", "action": "promote" })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Unknown action" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = signed_in(&server)
        .roles()
        .set_role("a@b.com", "promote")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Api(ApiError::Rejected { status: 400, .. })
    ));
    assert_eq!(err.to_string(), "Unknown action");
}

#[tokio::test]
async fn workflow_non_json_failure_surfaces_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/role"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = signed_in(&server).roles().grant("a@b.com").await.unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    assert!(err.to_string().contains("<html>Bad Gateway</html>"));
}

#[tokio::test]
async fn workflow_failure_without_message_reports_status() {
    let server = MockServer::start().await;
    mount_role_change(&server, 403, json!({})).await;

    let err = signed_in(&server).roles().grant("a@b.com").await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed (403)");
}
