//
//  employes-client
//  entity/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Entity Model
//!
//! An [`Entity`] is the in-memory representation of one remote resource: an
//! ordered map of JSON attributes, the static list of attributes the client
//! may write, and the name of the primary key.
//!
//! ## Attribute Rules
//!
//! - Attributes outside the fillable list (server-assigned ids, timestamps)
//!   can be read but are never sent to the server.
//! - [`Entity::try_set`] only writes fillable attributes and reports whether
//!   the write was applied.
//! - [`Entity::fill`] and [`Entity::set_attribute`] write unconditionally;
//!   they exist to ingest server responses.
//! - An entity *exists* when its primary key is present and non-empty.
//!
//! ## Resources
//!
//! Concrete resources implement [`Resource`], which supplies the endpoint and
//! the response-reconstruction operations every capability in [`actions`]
//! builds on.
//!
//! ```rust
//! use employes_client::{Connection, EmployesApi, Resource};
//!
//! let mut connection = Connection::new();
//! connection.set_administration_id("adm");
//!
//! let api = EmployesApi::new(&connection);
//! let mut employee = api.employee();
//!
//! assert!(employee.try_set("first_name", "Jane"));
//! assert!(!employee.try_set("id", "42"));
//! assert!(!employee.exists());
//! assert_eq!(employee.endpoint(), "adm/employees/");
//! ```

pub mod actions;

use std::fmt;

use serde_json::{Map, Value};

use crate::api::client::Connection;
use crate::api::common::ApiError;
use crate::api::request::url_encode;

/// Attribute map of an entity. Keys keep the order the server sent them in.
pub type Attributes = Map<String, Value>;

/// Attribute storage shared by every resource type.
#[derive(Clone)]
pub struct Entity<'c> {
    connection: &'c Connection,
    attributes: Attributes,
    fillable: &'static [&'static str],
    primary_key: &'static str,
}

impl<'c> Entity<'c> {
    /// Creates an empty entity bound to `connection`.
    pub fn new(
        connection: &'c Connection,
        fillable: &'static [&'static str],
        primary_key: &'static str,
    ) -> Self {
        Self {
            connection,
            attributes: Attributes::new(),
            fillable,
            primary_key,
        }
    }

    /// Returns the connection this entity was created with.
    pub fn connection(&self) -> &'c Connection {
        self.connection
    }

    /// Returns every attribute, fillable or not.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the attributes whose keys are fillable.
    ///
    /// This is exactly the payload sent on create and update.
    pub fn fillables(&self) -> Attributes {
        self.attributes
            .iter()
            .filter(|(key, _)| self.is_fillable(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns the static fillable list.
    pub fn fillable(&self) -> &'static [&'static str] {
        self.fillable
    }

    /// Returns the name of the primary key attribute.
    pub fn primary_key(&self) -> &'static str {
        self.primary_key
    }

    pub fn is_fillable(&self, key: &str) -> bool {
        self.fillable.contains(&key)
    }

    /// Writes an attribute without checking the fillable list.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Writes an attribute if it is fillable.
    ///
    /// Returns `true` if the value was stored and `false` if the key is not
    /// fillable, in which case the entity is unchanged.
    pub fn try_set(&mut self, key: &str, value: impl Into<Value>) -> bool {
        if !self.is_fillable(key) {
            tracing::debug!("Ignoring write to non-fillable attribute '{}'", key);
            return false;
        }
        self.set_attribute(key, value);
        true
    }

    /// Returns an attribute, or `None` if it is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns `true` if the attribute is present and not `null`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Writes every attribute of `attributes`, bypassing the fillable list.
    pub fn fill(&mut self, attributes: &Attributes) {
        for (key, value) in attributes {
            self.set_attribute(key.clone(), value.clone());
        }
    }

    /// Returns `true` when the primary key is present and non-empty.
    ///
    /// `null`, `""`, `"0"`, `0`, `false` and empty arrays or objects all
    /// count as empty.
    pub fn exists(&self) -> bool {
        self.get(self.primary_key).is_some_and(|value| !is_empty(value))
    }

    /// Returns the primary key rendered for use in a URL path.
    pub fn id(&self) -> Option<String> {
        match self.get(self.primary_key)? {
            Value::Null => None,
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

impl fmt::Debug for Entity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.attributes.iter()).finish()
    }
}

/// Writes the `Name[key=value]` form used by every resource's `Display`.
///
/// Only the first attribute is shown; an entity without attributes renders
/// as `Name[]`.
pub fn describe(f: &mut fmt::Formatter<'_>, name: &str, entity: &Entity<'_>) -> fmt::Result {
    match entity.attributes().iter().next() {
        Some((key, Value::String(value))) => write!(f, "{}[{}={}]", name, key, value),
        Some((key, value)) => write!(f, "{}[{}={}]", name, key, value),
        None => write!(f, "{}[]", name),
    }
}

/// A remote resource type.
///
/// Implementors provide storage access and the resource's static
/// description; everything else, including endpoint resolution and response
/// reconstruction, comes from the provided methods.
///
/// # Example
///
/// ```rust
/// use employes_client::{Connection, Entity, Resource};
///
/// struct Department<'c> {
///     entity: Entity<'c>,
/// }
///
/// impl<'c> Resource<'c> for Department<'c> {
///     const NAME: &'static str = "Department";
///     const PATH: &'static str = "departments";
///     const FILLABLE: &'static [&'static str] = &["name"];
///
///     fn from_entity(entity: Entity<'c>) -> Self {
///         Self { entity }
///     }
///
///     fn entity(&self) -> &Entity<'c> {
///         &self.entity
///     }
///
///     fn entity_mut(&mut self) -> &mut Entity<'c> {
///         &mut self.entity
///     }
/// }
///
/// let mut connection = Connection::new();
/// connection.set_administration_id("adm");
/// let department = Department::new(&connection);
/// assert_eq!(department.endpoint(), "adm/departments/");
/// ```
pub trait Resource<'c>: Sized {
    /// Display name, e.g. `"Employee"`.
    const NAME: &'static str;

    /// Endpoint segment below the administration, e.g. `"employees"`.
    const PATH: &'static str;

    /// Attributes the client may write and submit.
    const FILLABLE: &'static [&'static str];

    /// Name of the primary key attribute.
    const PRIMARY_KEY: &'static str = "id";

    fn from_entity(entity: Entity<'c>) -> Self;

    fn entity(&self) -> &Entity<'c>;

    fn entity_mut(&mut self) -> &mut Entity<'c>;

    /// Creates an empty instance bound to `connection`.
    fn new(connection: &'c Connection) -> Self {
        Self::from_entity(Entity::new(connection, Self::FILLABLE, Self::PRIMARY_KEY))
    }

    /// Creates an instance pre-filled with `attributes`.
    ///
    /// The fillable list is not applied, so server-owned keys such as `id`
    /// may be supplied.
    fn with_attributes(connection: &'c Connection, attributes: &Attributes) -> Self {
        let mut resource = Self::new(connection);
        resource.entity_mut().fill(attributes);
        resource
    }

    fn connection(&self) -> &'c Connection {
        self.entity().connection()
    }

    fn attributes<'s>(&'s self) -> &'s Attributes
    where
        'c: 's,
    {
        self.entity().attributes()
    }

    fn fillables(&self) -> Attributes {
        self.entity().fillables()
    }

    /// Reads an attribute; see [`Entity::get`].
    fn attribute<'s>(&'s self, key: &str) -> Option<&'s Value>
    where
        'c: 's,
    {
        self.entity().get(key)
    }

    /// Writes a fillable attribute; see [`Entity::try_set`].
    fn try_set(&mut self, key: &str, value: impl Into<Value>) -> bool {
        self.entity_mut().try_set(key, value)
    }

    fn exists(&self) -> bool {
        self.entity().exists()
    }

    /// Returns the collection endpoint, `"<administration>/<path>/"`.
    ///
    /// # Panics
    ///
    /// Panics if the connection has no administration id.
    fn endpoint(&self) -> String {
        let administration_id = self.connection().administration_id();
        assert!(
            !administration_id.is_empty(),
            "an administration id must be set before resolving the {} endpoint",
            Self::NAME
        );
        format!("{}/{}/", administration_id, Self::PATH)
    }

    /// Returns the endpoint of the item with `id`.
    fn item_endpoint(&self, id: &str) -> String {
        format!("{}{}", self.endpoint(), url_encode(id))
    }

    /// Builds a new instance on the same connection from a response payload.
    ///
    /// The receiver is not modified.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the payload is not a JSON object.
    fn make_from_response(&self, payload: &Value) -> Result<Self, ApiError> {
        let mut resource = Self::new(self.connection());
        resource.self_from_response(payload)?;
        Ok(resource)
    }

    /// Fills the receiver from a response payload and returns it.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the payload is not a JSON object; the
    /// receiver is left unchanged in that case.
    fn self_from_response(&mut self, payload: &Value) -> Result<&mut Self, ApiError> {
        let attributes = payload
            .as_object()
            .ok_or_else(|| ApiError::unexpected_payload(Self::NAME, "an object", payload))?;
        self.entity_mut().fill(attributes);
        Ok(self)
    }

    /// Builds one instance per element of `result["data"]`, in order.
    ///
    /// A missing or `null` `data` field yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if `data` is not an array or one of its
    /// elements is not an object.
    fn collection_from_result(&self, result: &Value) -> Result<Vec<Self>, ApiError> {
        match result.get("data") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| self.make_from_response(item))
                .collect(),
            Some(other) => Err(ApiError::unexpected_payload(
                Self::NAME,
                "a \"data\" array",
                other,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resources::{Employee, Leave};

    fn connection() -> Connection {
        let mut connection = Connection::new();
        connection.set_administration_id("adm");
        connection
    }

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_non_fillable_write_is_rejected() {
        let connection = connection();
        let mut employee = Employee::with_attributes(&connection, &attrs(json!({"id": "7"})));
        let before = employee.attributes().clone();

        assert!(!employee.try_set("id", "8"));
        assert!(!employee.try_set("created_at", "2024-01-01"));
        assert_eq!(employee.attributes(), &before);
    }

    #[test]
    fn test_fillable_write_updates_only_that_key() {
        let connection = connection();
        let mut employee = Employee::with_attributes(
            &connection,
            &attrs(json!({"id": "7", "first_name": "Jan"})),
        );

        assert!(employee.try_set("first_name", "Jane"));
        assert_eq!(
            employee.attributes(),
            &attrs(json!({"id": "7", "first_name": "Jane"}))
        );
    }

    #[test]
    fn test_fillables_excludes_server_fields() {
        let connection = connection();
        let employee = Employee::with_attributes(
            &connection,
            &attrs(json!({"id": "7", "first_name": "Jane", "created_at": "2024-01-01"})),
        );

        assert_eq!(employee.fillables(), attrs(json!({"first_name": "Jane"})));
    }

    #[test]
    fn test_existence_law() {
        let connection = connection();
        let cases = [
            (json!({"id": "abc"}), true),
            (json!({"id": 12}), true),
            (json!({}), false),
            (json!({"id": ""}), false),
            (json!({"id": null}), false),
            (json!({"id": "0"}), false),
            (json!({"first_name": "Jane"}), false),
        ];

        for (payload, expected) in cases {
            let employee = Employee::with_attributes(&connection, &attrs(payload.clone()));
            assert_eq!(employee.exists(), expected, "payload {}", payload);
        }
    }

    #[test]
    fn test_collection_preserves_server_order() {
        let connection = connection();
        let employee = Employee::new(&connection);
        let result = json!({"data": [{"id": "1"}, {"id": "2"}]});

        let collection = employee.collection_from_result(&result).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection[0].attributes(), &attrs(json!({"id": "1"})));
        assert_eq!(collection[1].attributes(), &attrs(json!({"id": "2"})));
    }

    #[test]
    fn test_collection_without_data_is_empty() {
        let connection = connection();
        let leave = Leave::new(&connection);

        assert!(leave.collection_from_result(&json!({})).unwrap().is_empty());
        assert!(leave.collection_from_result(&json!({"data": null})).unwrap().is_empty());
        assert!(leave.collection_from_result(&json!({"data": "x"})).is_err());
        assert!(leave.collection_from_result(&json!({"data": [1]})).is_err());
    }

    #[test]
    fn test_make_from_response_leaves_receiver_untouched() {
        let connection = connection();
        let source = Employee::with_attributes(&connection, &attrs(json!({"id": "1"})));

        let made = source
            .make_from_response(&json!({"id": "2", "first_name": "Jane"}))
            .unwrap();

        assert_eq!(source.attributes(), &attrs(json!({"id": "1"})));
        assert_eq!(made.attribute("id"), Some(&json!("2")));
        assert!(std::ptr::eq(made.connection(), source.connection()));
    }

    #[test]
    fn test_self_from_response_overwrites_in_place() {
        let connection = connection();
        let mut employee =
            Employee::with_attributes(&connection, &attrs(json!({"first_name": "Jan"})));

        employee
            .self_from_response(&json!({"id": "9", "first_name": "Jane"}))
            .unwrap();

        assert!(employee.exists());
        assert_eq!(employee.attribute("first_name"), Some(&json!("Jane")));
        assert!(employee.self_from_response(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_endpoint_is_stable() {
        let connection = connection();
        let employee = Employee::new(&connection);
        let first = employee.endpoint();

        assert_eq!(first, "adm/employees/");
        assert_eq!(employee.endpoint(), first);
        assert_eq!(Employee::new(&connection).endpoint(), first);
        assert_eq!(Leave::new(&connection).endpoint(), "adm/leaves/");
        assert_eq!(employee.item_endpoint("a b"), "adm/employees/a+b");
    }

    #[test]
    #[should_panic(expected = "administration id")]
    fn test_endpoint_requires_administration() {
        let connection = Connection::new();
        Employee::new(&connection).endpoint();
    }

    #[test]
    fn test_unknown_attribute_reads_none() {
        let connection = connection();
        let employee = Employee::with_attributes(&connection, &attrs(json!({"email": null})));

        assert_eq!(employee.attribute("nickname"), None);
        assert!(!employee.entity().has("email"));
        assert!(!employee.entity().has("nickname"));
    }

    #[test]
    fn test_display_and_debug() {
        let connection = connection();
        let employee = Employee::with_attributes(
            &connection,
            &attrs(json!({"id": "1234", "first_name": "Jane"})),
        );

        assert_eq!(employee.to_string(), "Employee[id=1234]");
        assert_eq!(Leave::new(&connection).to_string(), "Leave[]");
        let debug = format!("{:?}", employee.entity());
        assert!(debug.starts_with(r#"{"id": "#));
        assert!(debug.contains("first_name"));
        assert!(!debug.contains("Connection"));
    }

    fn surname_of<'s, 'c: 's, R: Resource<'c>>(resource: &'s R) -> Option<&'s Value> {
        resource.attribute("surname")
    }

    #[test]
    fn test_attribute_borrows_from_any_resource() {
        let connection = connection();
        let employee =
            Employee::with_attributes(&connection, &attrs(json!({"id": "7", "surname": "Doe"})));

        let surname = surname_of(&employee);
        let attributes = employee.attributes();

        assert_eq!(surname, Some(&json!("Doe")));
        assert_eq!(attributes.len(), 2);
    }
}
