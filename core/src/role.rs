// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use circular_api::{ApiClient, RoleChange, RoleChangeResponse};

use crate::Error;
use crate::session::Session;

/// Grants and revokes admin rights on other accounts.
#[derive(Debug, Clone)]
pub struct AdminRoleManager {
    client: ApiClient,
    session: Session,
}

impl AdminRoleManager {
    /// Creates a role manager using `session` for credentials.
    pub fn new(client: ApiClient, session: Session) -> Self {
        Self { client, session }
    }

    /// Applies `action` to the account with `email`.
    ///
    /// The action is passed to the server as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] without contacting the server when no
    /// token is stored, or an API error if the change fails.
    pub async fn set_role(&self, email: &str, action: &str) -> Result<RoleChangeResponse, Error> {
        let Some(token) = self.session.token().await else {
            tracing::warn!(email, action, "role change refused: no session token");
            return Err(Error::Unauthorized);
        };

        let change = RoleChange::new(email, action);
        Ok(self.client.manage_admin(&change, &token).await?)
    }

    /// Grants admin rights to `email`.
    ///
    /// # Errors
    ///
    /// See [`AdminRoleManager::set_role`].
    pub async fn grant(&self, email: &str) -> Result<RoleChangeResponse, Error> {
        self.set_role(email, "grant").await
    }

    /// Revokes admin rights from `email`.
    ///
    /// # Errors
    ///
    /// See [`AdminRoleManager::set_role`].
    pub async fn revoke(&self, email: &str) -> Result<RoleChangeResponse, Error> {
        self.set_role(email, "revoke").await
    }
}
