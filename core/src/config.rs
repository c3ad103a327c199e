// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::str::FromStr;

use circular_api::ApiConfig;
use tokio::fs;

use crate::Error;

/// The name of the Circular application.
pub const APP_NAME: &str = "circular";

const CIRCULAR_CONFIG_ENV: &str = "CIRCULAR_CONFIG";

/// Configuration for the Circular client.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Event service settings: `base_url`, `timeout_secs`, `user_agent`.
    #[serde(flatten)]
    pub api: ApiConfig,

    /// Directory for storing the session token.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// The path is taken from `path`, else the `CIRCULAR_CONFIG` environment
    /// variable, else `circular/config.toml` in the user config directory. If
    /// the default file does not exist, defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file cannot be read, or any
    /// file cannot be parsed.
    #[tracing::instrument]
    pub async fn load(path: Option<PathBuf>) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path,
            None => match std::env::var(CIRCULAR_CONFIG_ENV) {
                Ok(env_path) => PathBuf::from(env_path),
                Err(_) => {
                    let path = user_config_dir()?.join(APP_NAME).join("config.toml");
                    if !path.exists() {
                        tracing::debug!(path = %path.display(), "no config file, using defaults");
                        return Ok(Self::default());
                    }
                    path
                }
            },
        };

        fs::read_to_string(&path)
            .await
            .map_err(|e| {
                Error::Config(format!(
                    "Failed to read config file at {}: {e}",
                    path.display()
                ))
            })?
            .parse()
    }

    /// Resolves the state directory.
    ///
    /// A leading `~` or `$HOME` is expanded. When unset, the user state
    /// directory joined with `circular` is used; if there is none, the
    /// directory stays unset and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed but unknown.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.state_dir = match self.state_dir.take() {
            Some(dir) => Some(expand_home(&dir)?),
            None => match user_state_dir() {
                Ok(dir) => Some(dir.join(APP_NAME)),
                Err(e) => {
                    tracing::warn!(error = %e, "state directory unavailable");
                    None
                }
            },
        };
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }
}

/// Replaces a leading `~` or `$HOME` component with the home directory.
fn expand_home(path: &Path) -> Result<PathBuf, Error> {
    let rest = HOME_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix).ok());

    match rest {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(path.to_path_buf()),
    }
}

const HOME_PREFIXES: [&str; 3] = ["~", "$HOME", "${HOME}"];

fn home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Config("No home directory for the current user".into()))
}

fn user_config_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let dir = dirs::config_dir();
    dir.ok_or_else(|| Error::Config("No config directory for the current user".into()))
}

fn user_state_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(not(unix))]
    let dir = dirs::data_local_dir();
    dir.ok_or_else(|| Error::Config("No state directory for the current user".into()))
}
