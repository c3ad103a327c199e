// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use circular_api::ApiClient;

use crate::credential::FileCredentialStore;
use crate::repository::EventRepository;
use crate::role::AdminRoleManager;
use crate::session::Session;
use crate::{Config, Error};

/// Circular client core.
#[derive(Debug, Clone)]
pub struct Circular {
    config: Config,
    session: Session,
    events: EventRepository,
    roles: AdminRoleManager,
}

impl Circular {
    /// Creates a new instance, keeping the session token under the state directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no state directory is available or the client
    /// cannot be built.
    pub fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;

        let state_dir = config
            .state_dir
            .clone()
            .ok_or_else(|| Error::Config("No state directory available".to_string()))?;

        let session = Session::new(FileCredentialStore::new(state_dir));
        Self::with_session(config, session)
    }

    /// Creates a new instance with an existing session.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn with_session(config: Config, session: Session) -> Result<Self, Error> {
        let client = ApiClient::new(config.api.clone())?;
        tracing::debug!(base_url = %config.api.origin(), "circular client ready");

        Ok(Self {
            events: EventRepository::new(client.clone(), session.clone()),
            roles: AdminRoleManager::new(client, session.clone()),
            config,
            session,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Event listing and creation.
    pub fn events(&self) -> &EventRepository {
        &self.events
    }

    /// Admin role management.
    pub fn roles(&self) -> &AdminRoleManager {
        &self.roles
    }
}
