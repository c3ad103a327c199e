// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::credential::{CredentialStore, MemoryCredentialStore};

/// The current login, backed by a credential store.
///
/// Cloning is cheap and clones share the same store.
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// Creates a session over the given store.
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a session over a shared store.
    pub fn from_store(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Creates a session that forgets its token when dropped.
    pub fn in_memory() -> Self {
        Self::new(MemoryCredentialStore::new())
    }

    /// The bearer token, if logged in. An empty stored token counts as none.
    pub async fn token(&self) -> Option<String> {
        self.store.get_token().await.filter(|t| !t.is_empty())
    }

    /// Whether a token is present.
    pub async fn is_authenticated(&self) -> bool {
        self.token().await.is_some()
    }

    /// Stores the token obtained at login, replacing any previous one.
    pub async fn login(&self, token: &str) {
        tracing::debug!("storing session token");
        self.store.set_token(token).await;
    }

    /// Forgets the stored token.
    pub async fn logout(&self) {
        tracing::debug!("removing session token");
        self.store.remove_token().await;
    }
}
