//
//  employes-client
//  resources/employee.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Employees of an administration.
//!
//! # Fillable Attributes
//!
//! Personal details (`first_name`, `initials`, `surname_prefix`, `surname`,
//! `date_of_birth`, `gender`), contact details (`email`, `phone_number`),
//! address (`street`, `house_number`, `house_number_addition`, `zipcode`,
//! `city`, `country_code`), and employment details (`employee_number`,
//! `start_date`, `end_date`, `iban`).
//!
//! Everything else the API returns, such as `id`, `created_at` and
//! `updated_at`, is read-only.
//!
//! # Example
//!
//! ```rust,no_run
//! use employes_client::{Connection, EmployesApi, Resource, SaveOutcome, Storable};
//!
//! # async fn example(connection: &Connection) -> Result<(), employes_client::ApiError> {
//! let mut employee = EmployesApi::new(connection).employee();
//! employee.try_set("first_name", "Jane");
//! employee.try_set("surname", "Doe");
//!
//! if let SaveOutcome::Created(employee) = employee.save().await? {
//!     println!("created {}", employee);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::entity::actions::{Deletable, Getable, Listable, Storable};
use crate::entity::{describe, Entity, Resource};

/// An employee record.
#[derive(Clone)]
pub struct Employee<'c> {
    entity: Entity<'c>,
}

impl<'c> Resource<'c> for Employee<'c> {
    const NAME: &'static str = "Employee";
    const PATH: &'static str = "employees";
    const FILLABLE: &'static [&'static str] = &[
        "first_name",
        "initials",
        "surname_prefix",
        "surname",
        "date_of_birth",
        "gender",
        "email",
        "phone_number",
        "street",
        "house_number",
        "house_number_addition",
        "zipcode",
        "city",
        "country_code",
        "employee_number",
        "start_date",
        "end_date",
        "iban",
    ];

    fn from_entity(entity: Entity<'c>) -> Self {
        Self { entity }
    }

    fn entity(&self) -> &Entity<'c> {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity<'c> {
        &mut self.entity
    }
}

impl<'c> Listable<'c> for Employee<'c> {}
impl<'c> Getable<'c> for Employee<'c> {}
impl<'c> Storable<'c> for Employee<'c> {}
impl<'c> Deletable<'c> for Employee<'c> {}

impl fmt::Display for Employee<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, Self::NAME, &self.entity)
    }
}

impl fmt::Debug for Employee<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(Self::NAME).field(&self.entity).finish()
    }
}
