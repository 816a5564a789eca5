//
//  employes-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading and saving the settings needed to bootstrap a
//! [`Connection`]. The library itself is configured only through setters;
//! this module is the bootstrap layer the CLI uses on top of them.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/employes/config.toml`
//! - **macOS**: `~/Library/Application Support/employes/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\employes\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [connection]
//! api_url = "https://connect.employes.nl/v2"
//! bearer_token = "eyJ0eXAiOiJKV1Qi..."
//! administration_id = "5f8a1c2e-0000-4000-8000-000000000000"
//! testing = false
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use employes_client::config::Config;
//!
//! let config = Config::load()?;
//! let connection = config.connection();
//! println!("Using {}", connection.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::{Connection, DEFAULT_API_URL};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["api_url", "bearer_token", "administration_id", "testing"];

/// Persistent configuration.
///
/// All fields use `#[serde(default)]`, so a partial or empty file loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
}

/// Settings applied to a [`Connection`] by [`Config::connection`].
///
/// | Field | Default |
/// |-------|---------|
/// | `api_url` | `https://connect.employes.nl/v2` |
/// | `bearer_token` | `None` |
/// | `administration_id` | `None` |
/// | `testing` | `false` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_id: Option<String>,

    /// Route every request to the httpbin echo service.
    #[serde(default)]
    pub testing: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            bearer_token: None,
            administration_id: None,
            testing: false,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Builds a connection from these settings.
    ///
    /// Unset token or administration id are left empty; requests and
    /// endpoint resolution require them.
    pub fn connection(&self) -> Connection {
        let settings = &self.connection;
        let mut connection = Connection::new();
        connection.set_api_url(settings.api_url.as_str());
        if let Some(token) = &settings.bearer_token {
            connection.set_bearer_token(token.as_str());
        }
        if let Some(administration_id) = &settings.administration_id {
            connection.set_administration_id(administration_id.as_str());
        }
        connection.set_testing(settings.testing);
        connection
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_url" => Some(self.connection.api_url.clone()),
            "bearer_token" => self.connection.bearer_token.clone(),
            "administration_id" => self.connection.administration_id.clone(),
            "testing" => Some(self.connection.testing.to_string()),
            _ => None,
        }
    }

    /// Sets a configuration value.
    ///
    /// Returns `false` for unknown keys and for a `testing` value that is not
    /// `true` or `false`.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "api_url" => {
                self.connection.api_url = value;
                true
            }
            "bearer_token" => {
                self.connection.bearer_token = Some(value);
                true
            }
            "administration_id" => {
                self.connection.administration_id = Some(value);
                true
            }
            "testing" => match value.parse() {
                Ok(testing) => {
                    self.connection.testing = testing;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.connection.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        assert!(config.set("bearer_token", "tok".to_string()));
        assert!(config.set("administration_id", "adm".to_string()));
        assert!(config.set("testing", "true".to_string()));
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "[connection]\nadministration_id = \"adm\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.connection.administration_id.as_deref(), Some("adm"));
        assert_eq!(config.connection.api_url, DEFAULT_API_URL);
        assert!(!config.connection.testing);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "connection = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration file"));
    }

    #[test]
    fn test_connection_applies_settings() {
        let mut config = Config::default();
        config.set("api_url", "https://staging.example.com/v2/".to_string());
        config.set("bearer_token", "tok".to_string());
        config.set("administration_id", "adm".to_string());

        let connection = config.connection();
        assert_eq!(connection.api_url(), "https://staging.example.com/v2");
        assert_eq!(connection.bearer_token(), "tok");
        assert_eq!(connection.administration_id(), "adm");
        assert!(!connection.is_testing());
    }

    #[test]
    fn test_unknown_keys_and_bad_values_are_rejected() {
        let mut config = Config::default();
        assert!(!config.set("editor", "vim".to_string()));
        assert!(!config.set("testing", "maybe".to_string()));
        assert_eq!(config.get("editor"), None);
        assert_eq!(config.get("testing").as_deref(), Some("false"));
    }
}
