//
//  employes-client
//  api/registry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource factory.
//!
//! [`EmployesApi`] binds a [`Connection`] to the resource constructors so that
//! callers obtain ready-to-use instances without handling the connection
//! themselves.

use crate::api::client::Connection;
use crate::entity::{Attributes, Resource};
use crate::resources::{Employee, Leave};

/// Entry point producing resources bound to one connection.
///
/// # Example
///
/// ```rust
/// use employes_client::{Connection, EmployesApi, Resource};
/// use serde_json::json;
///
/// let mut connection = Connection::new();
/// connection.set_administration_id("adm");
/// let api = EmployesApi::new(&connection);
///
/// let attributes = json!({"id": "42", "first_name": "Jane"});
/// let employee = api.employee_with(attributes.as_object().unwrap());
/// assert!(employee.exists());
/// assert_eq!(employee.to_string(), "Employee[id=42]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmployesApi<'c> {
    connection: &'c Connection,
}

impl<'c> EmployesApi<'c> {
    pub fn new(connection: &'c Connection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &'c Connection {
        self.connection
    }

    /// Creates an empty resource of any type.
    pub fn resource<R: Resource<'c>>(&self) -> R {
        R::new(self.connection)
    }

    /// Creates a resource of any type pre-filled with `attributes`.
    pub fn resource_with<R: Resource<'c>>(&self, attributes: &Attributes) -> R {
        R::with_attributes(self.connection, attributes)
    }

    pub fn employee(&self) -> Employee<'c> {
        self.resource()
    }

    /// Creates an employee pre-filled with `attributes`, including read-only
    /// ones such as `id`.
    pub fn employee_with(&self, attributes: &Attributes) -> Employee<'c> {
        self.resource_with(attributes)
    }

    pub fn leave(&self) -> Leave<'c> {
        self.resource()
    }

    pub fn leave_with(&self, attributes: &Attributes) -> Leave<'c> {
        self.resource_with(attributes)
    }
}
