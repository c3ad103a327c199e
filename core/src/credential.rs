// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Persistence of the single bearer token.
//!
//! Stores never report failures to their callers: an unreadable token is the
//! same as no token, and a failed write is logged and dropped.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

/// Name of the key the token is stored under.
pub const TOKEN_KEY: &str = "auth_token";

/// Best-effort storage for one bearer token.
#[async_trait]
pub trait CredentialStore: fmt::Debug + Send + Sync {
    /// Persists the token, replacing any previous one.
    async fn set_token(&self, token: &str);

    /// The stored token, or `None` if there is none or it cannot be read.
    async fn get_token(&self) -> Option<String>;

    /// Deletes the stored token. Does nothing if there is none.
    async fn remove_token(&self);
}

/// Stores the token in a file under a state directory.
///
/// Whitespace around the stored token is ignored on read, so a file edited by
/// hand still yields a sendable token.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Creates a store keeping its token in `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_KEY),
            lock: Mutex::new(()),
        }
    }

    /// Path of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.path, token).await?;

        // owner-only, the file holds a credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn set_token(&self, token: &str) {
        let _guard = self.lock.lock().await;
        if let Err(e) = self.write(token).await {
            tracing::error!(path = %self.path.display(), error = %e, "error storing token");
        }
    }

    async fn get_token(&self) -> Option<String> {
        let _guard = self.lock.lock().await;
        match fs::read_to_string(&self.path).await {
            Ok(token) => Some(token.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "error getting token");
                None
            }
        }
    }

    async fn remove_token(&self) {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "error removing token");
            }
        }
    }
}

/// Keeps the token in memory only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn set_token(&self, token: &str) {
        *self.token.lock().await = Some(token.to_string());
    }

    async fn get_token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    async fn remove_token(&self) {
        *self.token.lock().await = None;
    }
}
