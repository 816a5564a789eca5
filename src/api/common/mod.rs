//
//  employes-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the error taxonomy every Connection-mediated
//! operation reports through, together with the helpers that turn a failed
//! HTTP response into one of its variants.
//!
//! # Overview
//!
//! Only two kinds of failure ever leave the connection layer:
//!
//! - [`ApiError::NotFound`] - the server answered HTTP 404
//! - [`ApiError::Api`] - anything else: other non-2xx statuses, undecodable
//!   success bodies, network failures, unexpected payload shapes
//!
//! # Example
//!
//! ```rust
//! use employes_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::NotFound { message }) => println!("Not found: {}", message),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::api::transport::TransportError;

/// Unified error type for all Employes API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `Api` | Any other failure | other non-2xx, or none |
///
/// When an `Api` error carries a status, its message is formatted as
/// `"Error <status>: <detail>"`.
///
/// # Example
///
/// ```rust
/// use employes_client::ApiError;
///
/// let err = ApiError::from_response(500, r#"{"message":"boom"}"#);
/// assert_eq!(err.to_string(), "Error 500: boom");
/// assert_eq!(err.status(), Some(500));
///
/// let err = ApiError::from_response(404, r#"{"message":"not found"}"#);
/// assert!(err.is_not_found());
/// assert_eq!(err.message(), "not found");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered HTTP 404.
    ///
    /// The message is the server's `message` field when the error body
    /// decodes to an object carrying one, otherwise the raw body text.
    #[error("{message}")]
    NotFound {
        /// Message reported by the server
        message: String,
    },

    /// Any other failure: a non-2xx status other than 404, an undecodable
    /// success body, a transport failure or an unexpected payload shape.
    #[error("{message}")]
    Api {
        /// HTTP status, when the failure came from an HTTP response
        status: Option<u16>,
        /// Human-readable message, already prefixed with the status if any
        message: String,
    },
}

impl ApiError {
    /// Creates an error with no HTTP status.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an error for a non-2xx status other than 404.
    ///
    /// The message becomes `"Error <status>: <detail>"`.
    pub fn with_status(status: u16, detail: &str) -> Self {
        Self::Api {
            status: Some(status),
            message: format!("Error {}: {}", status, detail),
        }
    }

    /// Creates a [`ApiError::NotFound`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Classifies a failed HTTP response.
    ///
    /// The detail is extracted with [`extract_error_message`]; a 404 becomes
    /// [`ApiError::NotFound`] and every other status an [`ApiError::Api`]
    /// carrying the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_error_message(body);
        if status == 404 {
            Self::not_found(detail)
        } else {
            Self::with_status(status, &detail)
        }
    }

    /// Creates an error describing a payload that did not have the shape the
    /// entity layer expected.
    pub fn unexpected_payload(resource: &str, expected: &str, payload: &Value) -> Self {
        let kind = match payload {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        Self::new(format!(
            "Unexpected {} payload: expected {}, got {}",
            resource, expected, kind
        ))
    }

    /// Returns the HTTP status associated with this error, if any.
    ///
    /// [`ApiError::NotFound`] always reports `404`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => *status,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message } | Self::Api { message, .. } => message,
        }
    }

    /// Returns `true` for [`ApiError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Extracts a human-readable message from an error response body.
///
/// The Employes API reports errors as:
/// ```json
/// {"message": "Human readable message"}
/// ```
///
/// When the body decodes to an object with a non-null `message` field, that
/// field is returned (strings verbatim, other values as JSON text). In every
/// other case the raw body is returned unchanged.
///
/// # Example
///
/// ```rust
/// use employes_client::api::common::extract_error_message;
///
/// assert_eq!(extract_error_message(r#"{"message":"Invalid token"}"#), "Invalid token");
/// assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
/// ```
pub fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        match json.get("message") {
            Some(Value::String(message)) => return message.clone(),
            Some(Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }

    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_message_field() {
        let err = ApiError::from_response(404, r#"{"message":"not found"}"#);
        assert_eq!(err, ApiError::not_found("not found"));
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_server_error_is_prefixed_with_status() {
        let err = ApiError::from_response(500, r#"{"message":"boom"}"#);
        assert!(!err.is_not_found());
        assert_eq!(err.message(), "Error 500: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_raw_body_used_without_message_field() {
        let err = ApiError::from_response(422, r#"{"errors":["first_name is required"]}"#);
        assert_eq!(
            err.message(),
            r#"Error 422: {"errors":["first_name is required"]}"#
        );

        let err = ApiError::from_response(404, "nothing here");
        assert_eq!(err.message(), "nothing here");
    }

    #[test]
    fn test_null_message_falls_back_to_body() {
        let body = r#"{"message":null}"#;
        assert_eq!(extract_error_message(body), body);
    }

    #[test]
    fn test_non_string_message_is_rendered_as_json() {
        assert_eq!(extract_error_message(r#"{"message":42}"#), "42");
    }

    #[test]
    fn test_transport_errors_carry_no_status() {
        let err: ApiError = TransportError::Other("connection reset".to_string()).into();
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), "connection reset");
    }

    #[test]
    fn test_unexpected_payload_names_the_shape() {
        let err = ApiError::unexpected_payload("Employee", "an object", &Value::Bool(true));
        assert_eq!(
            err.message(),
            "Unexpected Employee payload: expected an object, got a boolean"
        );
    }
}
