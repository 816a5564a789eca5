//
//  employes-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the connection settings stored in the configuration
//! file, so the token and administration id do not have to be passed on
//! every invocation.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::CONFIG_KEYS;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// One of: api_url, bearer_token, administration_id, testing
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// One of: api_url, bearer_token, administration_id, testing
    pub key: String,

    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        ensure_known_key(&args.key)?;
        let config = global.load_config()?;
        let value = masked(&args.key, config.get(&args.key));

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        ensure_known_key(&args.key)?;
        let path = global.config_path()?;
        let mut config = global.load_config()?;

        if !config.set(&args.key, args.value.clone()) {
            bail!("Invalid value '{}' for {}", args.value, args.key);
        }
        config.save_to(&path)?;

        let shown = masked(&args.key, Some(args.value.clone())).unwrap_or_default();

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            let entries: serde_json::Map<String, serde_json::Value> = CONFIG_KEYS
                .iter()
                .map(|key| (key.to_string(), serde_json::json!(masked(key, config.get(key)))))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        for key in CONFIG_KEYS {
            let value = masked(key, config.get(key))
                .unwrap_or_else(|| style("(not set)").dim().to_string());
            println!("{} = {}", style(key).cyan(), value);
        }

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        println!("{}", global.config_path()?.display());
        Ok(())
    }
}

fn ensure_known_key(key: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        );
    }
    Ok(())
}

/// Hides the bearer token when printing configuration values.
fn masked(key: &str, value: Option<String>) -> Option<String> {
    match key {
        "bearer_token" => value.map(|_| "********".to_string()),
        _ => value,
    }
}
