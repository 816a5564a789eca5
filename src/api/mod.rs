//
//  employes-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides everything between an entity and the network.
//!
//! ## Architecture
//!
//! - [`client`]: The [`Connection`](client::Connection) with tenant context
//!   and verb-specific operations
//! - [`request`]: Plain-data requests/responses, header defaults and the
//!   form encoding the API expects
//! - [`transport`]: The pluggable transport, interceptors and the default
//!   reqwest-backed implementation
//! - [`common`]: The [`ApiError`] taxonomy
//! - [`registry`]: The [`EmployesApi`] resource factory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use employes_client::api::EmployesApi;
//! use employes_client::{Connection, Listable, Params};
//!
//! # async fn example() -> Result<(), employes_client::ApiError> {
//! let mut connection = Connection::new();
//! connection.set_bearer_token("your-token");
//! connection.set_administration_id("your-administration");
//!
//! let api = EmployesApi::new(&connection);
//! for leave in api.leave().list(&Params::new()).await? {
//!     println!("{leave}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]:
//!
//! - `NotFound`: 404 Not Found
//! - `Api`: every other status, undecodable bodies and network failures

/// Connection to the Employes API.
pub mod client;

/// Error taxonomy shared by all operations.
pub mod common;

/// Resource factory bound to a connection.
pub mod registry;

/// Request building and wire encoding.
pub mod request;

/// Transport abstraction and interceptors.
pub mod transport;

pub use client::Connection;
pub use common::ApiError;
pub use registry::EmployesApi;
