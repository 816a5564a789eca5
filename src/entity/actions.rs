//
//  employes-client
//  entity/actions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Capabilities
//!
//! Each trait in this module maps one HTTP verb onto a [`Resource`]. A
//! resource opts in with an empty `impl`, which makes its capability set part
//! of its type: calling `save()` on a resource that is not [`Storable`] does
//! not compile.
//!
//! | Capability | Request | Result |
//! |------------|---------|--------|
//! | [`Listable::list`] | `GET <endpoint>?<params>` | new instances |
//! | [`Getable::get`] | `GET <endpoint><id>` | new instance |
//! | [`Storable::create`] | `POST <endpoint>` | receiver, filled |
//! | [`Storable::update`] | `PATCH <endpoint><id>` | [`UpdateOutcome`] |
//! | [`Deletable::delete`] | `DELETE <endpoint><id>` | decoded response |
//!
//! Errors from the connection are propagated untouched.

// Capability futures are not required to be Send.
#![allow(async_fn_in_trait)]

use serde_json::Value;

use crate::api::common::ApiError;
use crate::api::request::Params;
use crate::entity::Resource;

/// Result of [`Storable::update`].
///
/// The API either echoes the updated resource, which is then written back
/// into the receiver, or acknowledges the update with a bare `200` and no
/// resource body.
#[derive(Debug)]
pub enum UpdateOutcome<'a, T> {
    /// The server acknowledged the update without returning the resource.
    Acknowledged,
    /// The server returned the resource; the receiver now holds it.
    Updated(&'a mut T),
}

impl<T> UpdateOutcome<'_, T> {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged)
    }
}

/// Result of [`Storable::save`].
#[derive(Debug)]
pub enum SaveOutcome<'a, T> {
    /// The resource did not exist and was created; the receiver now carries
    /// the server-assigned fields.
    Created(&'a mut T),
    /// The resource existed and the server returned its new state.
    Updated(&'a mut T),
    /// The resource existed and the server acknowledged the update without a
    /// body.
    Acknowledged,
}

impl<'a, T> From<UpdateOutcome<'a, T>> for SaveOutcome<'a, T> {
    fn from(outcome: UpdateOutcome<'a, T>) -> Self {
        match outcome {
            UpdateOutcome::Acknowledged => Self::Acknowledged,
            UpdateOutcome::Updated(resource) => Self::Updated(resource),
        }
    }
}

/// Lists the resources of the administration.
pub trait Listable<'c>: Resource<'c> {
    /// Fetches the collection, passing `params` as the query string.
    ///
    /// Instances are returned in server order; an empty `data` yields an
    /// empty vector.
    async fn list(&self, params: &Params) -> Result<Vec<Self>, ApiError> {
        let result = self.connection().get(&self.endpoint(), params).await?;
        self.collection_from_result(&result)
    }
}

/// Fetches a single resource by id.
pub trait Getable<'c>: Resource<'c> {
    /// Fetches the resource with `id` into a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such resource exists.
    async fn get(&self, id: &str) -> Result<Self, ApiError> {
        let result = self
            .connection()
            .get(&self.item_endpoint(id), &Params::new())
            .await?;
        self.make_from_response(&result)
    }
}

/// Creates and updates resources.
pub trait Storable<'c>: Resource<'c> {
    /// Updates the resource if it exists, creates it otherwise.
    ///
    /// This is the only place that decides between create and update.
    async fn save(&mut self) -> Result<SaveOutcome<'_, Self>, ApiError> {
        if self.exists() {
            self.update().await.map(SaveOutcome::from)
        } else {
            self.create().await.map(SaveOutcome::Created)
        }
    }

    /// POSTs the fillable attributes and fills the receiver from the response.
    async fn create(&mut self) -> Result<&mut Self, ApiError> {
        let result = self
            .connection()
            .post(&self.endpoint(), &self.fillables())
            .await?;
        self.self_from_response(&result)
    }

    /// PATCHes the fillable attributes to the item endpoint.
    ///
    /// Returns [`UpdateOutcome::Acknowledged`] when the server answers with a
    /// bare `200` or an empty body, and [`UpdateOutcome::Updated`] after
    /// filling the receiver from the returned resource otherwise.
    ///
    /// # Errors
    ///
    /// Fails without sending a request if the resource has no id.
    async fn update(&mut self) -> Result<UpdateOutcome<'_, Self>, ApiError> {
        let id = require_id(&*self, "update")?;
        let result = self
            .connection()
            .patch(&self.item_endpoint(&id), &self.fillables())
            .await?;

        if is_acknowledgement(&result) {
            return Ok(UpdateOutcome::Acknowledged);
        }

        self.self_from_response(&result).map(UpdateOutcome::Updated)
    }
}

/// Deletes resources.
pub trait Deletable<'c>: Resource<'c> {
    /// DELETEs the item endpoint and returns the decoded response as is.
    ///
    /// # Errors
    ///
    /// Fails without sending a request if the resource has no id.
    async fn delete(&self) -> Result<Value, ApiError> {
        let id = require_id(self, "delete")?;
        self.connection().delete(&self.item_endpoint(&id)).await
    }
}

/// Returns the resource id, refusing to fall back to the collection endpoint.
fn require_id<'c, R: Resource<'c>>(resource: &R, action: &str) -> Result<String, ApiError> {
    match resource.entity().id() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApiError::new(format!(
            "Cannot {} {}: no {} set",
            action,
            R::NAME,
            R::PRIMARY_KEY
        ))),
    }
}

fn is_acknowledgement(result: &Value) -> bool {
    result.is_null() || result.as_u64() == Some(200)
}
