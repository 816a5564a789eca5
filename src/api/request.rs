//
//  employes-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Building and Wire Encoding
//!
//! Requests and responses are described as plain data ([`HttpRequest`],
//! [`HttpResponse`]) so that any [`Transport`](super::transport::Transport)
//! can execute them. This module also owns the wire encoding the Employes API
//! expects:
//!
//! - request bodies are `application/x-www-form-urlencoded`
//! - query strings and bodies follow PHP `http_build_query` conventions
//! - path segments are form-encoded (a space becomes `+`)
//!
//! ## Default Headers
//!
//! | Header | Value |
//! |--------|-------|
//! | `Accept` | `application/json` |
//! | `Content-Type` | `application/x-www-form-urlencoded` |
//! | `Authorization` | `Bearer <token>` |

use std::fmt;

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Query parameters and form bodies.
///
/// Values may be nested; see [`build_query`] for how they are flattened.
pub type Params = Map<String, Value>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns the path segment of the echo endpoint used in sandbox mode.
    pub fn sandbox_path(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by [`build_request`]; interceptors may rewrite it before the
/// transport executes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Sets a header, replacing any existing header with the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the value of a header, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .rev()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Builds a fully formed request.
///
/// Caller-supplied headers are applied first and the defaults afterwards, so
/// a caller header with the same name as a default (compared
/// case-insensitively) is replaced and `Authorization` is always present.
/// A non-empty `query` is appended to `url` as a URL-encoded query string.
///
/// # Panics
///
/// Panics if `bearer_token` is empty. Building a request without credentials
/// is a programming error, not a recoverable API failure.
///
/// # Example
///
/// ```rust
/// use employes_client::api::request::{build_request, HttpMethod, Params};
///
/// let mut query = Params::new();
/// query.insert("page".to_string(), 2.into());
///
/// let request = build_request(
///     "secret",
///     HttpMethod::Get,
///     "https://connect.employes.nl/v2/abc/employees/",
///     None,
///     Some(&query),
///     &[],
/// );
///
/// assert_eq!(request.url, "https://connect.employes.nl/v2/abc/employees/?page=2");
/// assert_eq!(request.header("authorization"), Some("Bearer secret"));
/// ```
pub fn build_request(
    bearer_token: &str,
    method: HttpMethod,
    url: &str,
    body: Option<String>,
    query: Option<&Params>,
    extra_headers: &[(String, String)],
) -> HttpRequest {
    assert!(
        !bearer_token.is_empty(),
        "a bearer token must be set before building a request"
    );

    let mut url = url.to_string();
    if let Some(query) = query.filter(|query| !query.is_empty()) {
        let encoded = build_query(query);
        if !encoded.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encoded);
        }
    }

    let mut request = HttpRequest {
        method,
        url,
        headers: Vec::with_capacity(extra_headers.len() + 3),
        body,
    };

    for (name, value) in extra_headers {
        request.set_header(name.clone(), value.clone());
    }
    request.set_header("Accept", "application/json");
    request.set_header("Content-Type", "application/x-www-form-urlencoded");
    request.set_header("Authorization", format!("Bearer {}", bearer_token));

    request
}

/// Encodes parameters the way PHP's `http_build_query` does.
///
/// - strings are sent verbatim
/// - numbers as their decimal text
/// - `true` as `1`, `false` as `0`
/// - `null` values are omitted
/// - arrays become `key[0]=…&key[1]=…`, objects `key[sub]=…`
///
/// # Example
///
/// ```rust
/// use employes_client::api::request::build_query;
/// use serde_json::json;
///
/// let params = json!({"first_name": "Jane Doe", "active": true, "tags": ["a"]});
/// let encoded = build_query(params.as_object().unwrap());
/// assert_eq!(encoded, "first_name=Jane+Doe&active=1&tags%5B0%5D=a");
/// ```
pub fn build_query(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        append_value(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_value(serializer: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            serializer.append_pair(key, if *flag { "1" } else { "0" });
        }
        Value::Number(number) => {
            serializer.append_pair(key, &number.to_string());
        }
        Value::String(text) => {
            serializer.append_pair(key, text);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_value(serializer, &format!("{}[{}]", key, index), item);
            }
        }
        Value::Object(map) => {
            for (sub_key, item) in map {
                append_value(serializer, &format!("{}[{}]", key, sub_key), item);
            }
        }
    }
}

/// Form-encodes a single path segment (PHP `urlencode`).
///
/// ```rust
/// use employes_client::api::request::url_encode;
///
/// assert_eq!(url_encode("a b/c"), "a+b%2Fc");
/// ```
pub fn url_encode(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_default_headers_are_present() {
        let request = build_request("tok", HttpMethod::Post, "https://x/y", Some("a=1".into()), None, &[]);
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        assert_eq!(request.body.as_deref(), Some("a=1"));
        assert_eq!(request.headers.len(), 3);
    }

    #[test]
    fn test_caller_cannot_replace_authorization() {
        let extra = vec![
            ("authorization".to_string(), "Bearer forged".to_string()),
            ("X-Request-Id".to_string(), "42".to_string()),
        ];
        let request = build_request("tok", HttpMethod::Get, "https://x/y", None, None, &extra);
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        assert_eq!(request.header("x-request-id"), Some("42"));
        let auth_headers = request
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .count();
        assert_eq!(auth_headers, 1);
    }

    #[test]
    fn test_query_string_is_appended() {
        let query = params(json!({"status": "active", "page": 3}));
        let request = build_request("tok", HttpMethod::Get, "https://x/a/employees/", None, Some(&query), &[]);
        assert_eq!(request.url, "https://x/a/employees/?status=active&page=3");

        let request = build_request("tok", HttpMethod::Get, "https://x/get?q=1", None, Some(&query), &[]);
        assert_eq!(request.url, "https://x/get?q=1&status=active&page=3");
    }

    #[test]
    fn test_empty_query_leaves_url_untouched() {
        let request = build_request("tok", HttpMethod::Get, "https://x/y", None, Some(&Params::new()), &[]);
        assert_eq!(request.url, "https://x/y");
    }

    #[test]
    #[should_panic(expected = "bearer token")]
    fn test_missing_token_panics() {
        build_request("", HttpMethod::Get, "https://x/y", None, None, &[]);
    }

    #[test]
    fn test_build_query_flattens_like_php() {
        let query = params(json!({
            "name": "Jane & Co",
            "hours": 7.5,
            "active": false,
            "note": null,
            "address": {"city": "Utrecht", "lines": ["Oudegracht 1"]}
        }));
        assert_eq!(
            build_query(&query),
            "name=Jane+%26+Co&hours=7.5&active=0&address%5Bcity%5D=Utrecht&address%5Blines%5D%5B0%5D=Oudegracht+1"
        );
    }

    #[test]
    fn test_url_encode_matches_form_encoding() {
        assert_eq!(url_encode("42"), "42");
        assert_eq!(url_encode("{abc def}"), "%7Babc+def%7D");
        assert_eq!(url_encode("ünï"), "%C3%BCn%C3%AF");
    }

    #[test]
    fn test_response_success_range() {
        let mut response = HttpResponse {
            status: 204,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: String::new(),
        };
        assert!(response.is_success());
        assert_eq!(response.header("content-type"), Some("application/json"));
        response.status = 301;
        assert!(!response.is_success());
    }
}
