//
//  employes-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Employes Client Library
//!
//! A typed client for the Employes REST API. Every resource the API exposes is
//! scoped to an *administration* (the tenant), and this library maps those
//! resources onto in-memory entities that know how to list, fetch, store and
//! delete themselves.
//!
//! ## Overview
//!
//! The library is built around a small resource-mapping engine:
//!
//! - A [`Connection`] holds the base URL, bearer token and administration id,
//!   builds authenticated requests, dispatches them through a pluggable
//!   [`Transport`](api::transport::Transport) and classifies failures into
//!   [`ApiError`].
//! - An [`Entity`] stores a resource's attributes and enforces which of them the
//!   client may write (the *fillable* set).
//! - Capability traits ([`Listable`], [`Getable`], [`Storable`], [`Deletable`])
//!   graft one HTTP verb each onto any resource type that opts in.
//! - The [`EmployesApi`] registry binds a connection to resource constructors.
//!
//! ## Module Structure
//!
//! - [`api`]: Connection, request building, transport and error taxonomy
//! - [`entity`]: Entity model and capability traits
//! - [`resources`]: Concrete resources (employees, leaves)
//! - [`config`]: TOML configuration used to bootstrap a connection
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use employes_client::{Connection, EmployesApi, Getable, Listable, Params};
//!
//! # async fn example() -> Result<(), employes_client::ApiError> {
//! let mut connection = Connection::new();
//! connection.set_administration_id("YOUR_ADMINISTRATION_GUID");
//! connection.set_bearer_token("YOUR_BEARER_TOKEN");
//!
//! let api = EmployesApi::new(&connection);
//!
//! let employees = api.employee().list(&Params::new()).await?;
//! println!("{} employees", employees.len());
//!
//! let employee = api.employee().get("EMPLOYEE_GUID").await?;
//! println!("{employee}");
//! # Ok(())
//! # }
//! ```

/// Connection, request building and transport layer.
///
/// Everything that touches HTTP lives here: the [`Connection`] with its
/// verb-specific operations, the request builder and wire encoding, the
/// transport abstraction with interceptors, and the [`ApiError`] taxonomy.
pub mod api;

/// Entity model and capability traits.
///
/// Provides the attribute bag with fillable filtering, response
/// reconstruction, and the [`Listable`], [`Getable`], [`Storable`] and
/// [`Deletable`] capabilities.
pub mod entity;

/// Concrete API resources.
///
/// Each resource fixes an endpoint segment and a fillable attribute list and
/// declares which capabilities it supports.
pub mod resources;

/// Configuration file management.
///
/// Stores connection settings in a platform-specific location:
/// - Linux: `~/.config/employes/config.toml`
/// - macOS: `~/Library/Application Support/employes/config.toml`
/// - Windows: `%APPDATA%\employes\config\config.toml`
pub mod config;

/// Command-line interface definitions.
pub mod cli;

/// Output formatting for table and JSON modes.
pub mod output;

/// Utility functions and helpers.
pub mod util;

pub use api::client::{Connection, TenantContext};
pub use api::common::ApiError;
pub use api::request::Params;
pub use api::EmployesApi;
pub use config::Config;
pub use entity::actions::{Deletable, Getable, Listable, SaveOutcome, Storable, UpdateOutcome};
pub use entity::{Attributes, Entity, Resource};
pub use resources::{Employee, Leave};

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "employes";

/// Application version constant, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// No bearer token was configured or the API rejected it.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested employee or leave record does not exist in the
    /// administration.
    pub const NOT_FOUND: i32 = 8;
}
