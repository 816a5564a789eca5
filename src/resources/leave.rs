//
//  employes-client
//  resources/leave.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Leave records (holidays, sick leave, special leave) of an administration.
//!
//! Leaves are read-only through the API: they can be listed and fetched but
//! not stored or deleted, so [`Leave`] only implements [`Listable`] and
//! [`Getable`].

use std::fmt;

use crate::entity::actions::{Getable, Listable};
use crate::entity::{describe, Entity, Resource};

/// A leave record.
#[derive(Clone)]
pub struct Leave<'c> {
    entity: Entity<'c>,
}

impl<'c> Resource<'c> for Leave<'c> {
    const NAME: &'static str = "Leave";
    const PATH: &'static str = "leaves";
    const FILLABLE: &'static [&'static str] = &[
        "employee_id",
        "leave_type",
        "start_date",
        "end_date",
        "hours",
        "description",
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

impl<'c> Listable<'c> for Leave<'c> {}
impl<'c> Getable<'c> for Leave<'c> {}

impl fmt::Display for Leave<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, Self::NAME, &self.entity)
    }
}

impl fmt::Debug for Leave<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(Self::NAME).field(&self.entity).finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::client::Connection;
    use crate::api::request::{HttpMethod, Params};
    use crate::api::transport::mock::RecordingTransport;

    #[test]
    fn test_list_reads_data_envelope() {
        let transport = RecordingTransport::new();
        transport.respond(
            200,
            r#"{"data":[{"id":"L1","hours":8},{"id":"L2","hours":4}],"meta":{"total":2}}"#,
        );
        let mut connection = Connection::with_transport(transport.clone());
        connection.set_bearer_token("secret");
        connection.set_administration_id("adm");

        let leaves = tokio_test::block_on(Leave::new(&connection).list(&Params::new())).unwrap();

        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[1].attribute("hours"), Some(&json!(4)));
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://connect.employes.nl/v2/adm/leaves/");
    }

    #[test]
    fn test_display_uses_resource_name() {
        let connection = Connection::new();
        let mut leave = Leave::new(&connection);
        leave.try_set("leave_type", "holiday");

        assert_eq!(leave.to_string(), "Leave[leave_type=holiday]");
        assert!(format!("{leave:?}").starts_with("Leave("));
    }
}
