//
//  employes-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod employee;
mod leave;

pub use config::ConfigCommand;
pub use employee::EmployeeCommand;
pub use leave::LeaveCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::api::client::Connection;
use crate::api::common::ApiError;
use crate::config::Config;
use crate::entity::Resource;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

/// Employes CLI - Work with the Employes payroll API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "employes",
    version,
    about = "Work with the Employes API from the command line",
    long_about = "employes is a CLI for the Employes payroll REST API.\n\n\
                  It lists, shows and edits the employees and leaves of one administration.",
    propagate_version = true,
    after_help = "Use 'employes <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Bearer token used to authenticate
    #[arg(long, global = true, env = "EMPLOYES_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Administration (tenant) id
    #[arg(long, short = 'a', global = true, env = "EMPLOYES_ADMINISTRATION")]
    pub administration: Option<String>,

    /// Base URL of the API
    #[arg(long, global = true, env = "EMPLOYES_API_URL")]
    pub api_url: Option<String>,

    /// Send every request to the httpbin echo service instead of the API
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to an alternative configuration file
    #[arg(long, global = true, env = "EMPLOYES_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage employees
    #[command(visible_alias = "emp")]
    Employee(EmployeeCommand),

    /// View leave records
    Leave(LeaveCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Errors raised while assembling a connection from flags and configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SetupError {
    #[error(
        "No bearer token configured. Pass --token, set EMPLOYES_TOKEN, \
         or run 'employes config set bearer_token <TOKEN>'"
    )]
    MissingToken,

    #[error(
        "No administration configured. Pass --administration, set EMPLOYES_ADMINISTRATION, \
         or run 'employes config set administration_id <ID>'"
    )]
    MissingAdministration,
}

impl GlobalOptions {
    /// Loads the configuration file selected by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Builds a connection from the configuration file with flag and
    /// environment overrides applied on top.
    ///
    /// # Errors
    ///
    /// Fails with [`SetupError`] when no token or administration id is known,
    /// so commands never reach the request builder without them.
    pub fn connection(&self) -> Result<Connection> {
        let config = self.load_config()?;
        let connection = self.apply(config.connection())?;
        tracing::debug!(?connection, "Connection assembled");
        Ok(connection)
    }

    fn apply(&self, mut connection: Connection) -> Result<Connection, SetupError> {
        if let Some(api_url) = &self.api_url {
            connection.set_api_url(api_url.as_str());
        }
        if let Some(administration) = &self.administration {
            connection.set_administration_id(administration.as_str());
        }
        if self.sandbox {
            connection.set_testing(true);
        }
        if let Some(token) = &self.token {
            connection.set_bearer_token(token.as_str());
        }

        if connection.bearer_token().is_empty() {
            return Err(SetupError::MissingToken);
        }
        if connection.administration_id().is_empty() {
            return Err(SetupError::MissingAdministration);
        }
        Ok(connection)
    }

    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::new(OutputFormat::Json)
        } else {
            OutputWriter::new(OutputFormat::Table)
        }
    }
}

/// Applies `KEY=VALUE` pairs to a resource through its fillable list.
///
/// Returns the keys that were ignored because they are not fillable.
pub(crate) fn apply_attributes<'c, R: Resource<'c>>(
    resource: &mut R,
    pairs: &[(String, Value)],
) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, value)| !resource.try_set(key, value.clone()))
        .map(|(key, _)| key.clone())
        .collect()
}

/// Maps a command failure to a process exit code.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(setup) = error.downcast_ref::<SetupError>() {
        return match setup {
            SetupError::MissingToken => exit_codes::AUTH_ERROR,
            SetupError::MissingAdministration => exit_codes::USAGE,
        };
    }

    match error.downcast_ref::<ApiError>().and_then(ApiError::status) {
        Some(404) => exit_codes::NOT_FOUND,
        Some(401 | 403) => exit_codes::AUTH_ERROR,
        _ => exit_codes::ERROR,
    }
}
