//
//  employes-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Connection to the Employes API
//!
//! This module provides the [`Connection`], the single place where HTTP
//! requests are built, dispatched and their failures classified.
//!
//! ## Features
//!
//! - Tenant context (base URL, bearer token, administration id)
//! - Form-encoded bodies and `http_build_query` style query strings
//! - Ordered request/response interceptors
//! - Lazily constructed, cached transport
//! - Sandbox mode routing every verb to the httpbin echo service
//! - Error classification into [`ApiError`]

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;

use super::common::ApiError;
use super::request::{build_request, build_query, HttpMethod, HttpRequest, HttpResponse, Params};
use super::transport::{Interceptor, ReqwestTransport, Transport, TransportStack};

/// Base URL of the production API.
pub const DEFAULT_API_URL: &str = "https://connect.employes.nl/v2";

/// Base URL of the echo service used in sandbox mode.
pub const SANDBOX_URL: &str = "https://httpbin.org";

/// The tenant a connection talks to and the credentials it uses.
///
/// # Fields
///
/// * `base_url` - API root every relative path is resolved against
/// * `bearer_token` - token sent in the `Authorization` header
/// * `administration_id` - administration (tenant) embedded in every endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub base_url: String,
    pub bearer_token: String,
    pub administration_id: String,
}

impl Default for TenantContext {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            bearer_token: String::new(),
            administration_id: String::new(),
        }
    }
}

impl fmt::Debug for TenantContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantContext")
            .field("base_url", &self.base_url)
            .field(
                "bearer_token",
                &if self.bearer_token.is_empty() { "" } else { "<redacted>" },
            )
            .field("administration_id", &self.administration_id)
            .finish()
    }
}

/// Authenticated connection to the Employes API.
///
/// A connection is configured once through its setters and then shared by
/// reference with every entity created from it. Each operation builds a
/// request, sends it through the transport stack and decodes the JSON body.
///
/// # Transport Lifecycle
///
/// The transport stack is created on the first request (or by
/// [`connect`](Self::connect)) and reused afterwards. Interceptors must be
/// registered before that point; later registrations are ignored.
///
/// # Example
///
/// ```rust,no_run
/// use employes_client::{Connection, Params};
///
/// # async fn example() -> Result<(), employes_client::ApiError> {
/// let mut connection = Connection::new();
/// connection.set_bearer_token("your-token");
/// connection.set_administration_id("your-administration");
///
/// let employees = connection.get("your-administration/employees/", &Params::new()).await?;
/// println!("{}", employees["data"]);
/// # Ok(())
/// # }
/// ```
pub struct Connection {
    context: TenantContext,
    interceptors: Vec<Arc<dyn Interceptor>>,
    testing: bool,
    transport: Option<Arc<dyn Transport>>,
    stack: OnceCell<TransportStack>,
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection {
    /// Creates a connection to the production API using [`ReqwestTransport`].
    pub fn new() -> Self {
        Self {
            context: TenantContext::default(),
            interceptors: Vec::new(),
            testing: false,
            transport: None,
            stack: OnceCell::new(),
        }
    }

    /// Creates a connection that sends every request through `transport`.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Some(Arc::new(transport)),
            ..Self::new()
        }
    }

    /// Creates a connection from a complete tenant context.
    pub fn from_context(context: TenantContext) -> Self {
        Self {
            context,
            ..Self::new()
        }
    }

    /// Returns the tenant context.
    pub fn context(&self) -> &TenantContext {
        &self.context
    }

    pub fn api_url(&self) -> &str {
        &self.context.base_url
    }

    /// Sets the API root. A trailing slash is stripped.
    pub fn set_api_url(&mut self, api_url: impl Into<String>) {
        let api_url = api_url.into();
        self.context.base_url = api_url.trim_end_matches('/').to_string();
    }

    pub fn bearer_token(&self) -> &str {
        &self.context.bearer_token
    }

    pub fn set_bearer_token(&mut self, bearer_token: impl Into<String>) {
        self.context.bearer_token = bearer_token.into();
    }

    /// Returns the administration id, or an empty string if none was set.
    pub fn administration_id(&self) -> &str {
        &self.context.administration_id
    }

    pub fn set_administration_id(&mut self, administration_id: impl Into<String>) {
        self.context.administration_id = administration_id.into();
    }

    /// Returns `true` when sandbox mode is enabled.
    pub fn is_testing(&self) -> bool {
        self.testing
    }

    /// Enables or disables sandbox mode.
    ///
    /// In sandbox mode every request goes to `https://httpbin.org/<method>`
    /// regardless of its path; headers, body and query are unchanged.
    pub fn set_testing(&mut self, testing: bool) {
        self.testing = testing;
    }

    /// Appends an interceptor to the chain.
    ///
    /// Returns `false` and leaves the chain unchanged if the transport stack
    /// has already been built.
    pub fn insert_interceptor(&mut self, interceptor: impl Interceptor + 'static) -> bool {
        if self.stack.get().is_some() {
            tracing::warn!("Interceptor ignored: the transport has already been initialised");
            return false;
        }
        self.interceptors.push(Arc::new(interceptor));
        true
    }

    /// Sets the bearer token and builds the transport stack eagerly.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the HTTP client cannot be created.
    pub fn connect(&mut self, bearer_token: impl Into<String>) -> Result<(), ApiError> {
        self.set_bearer_token(bearer_token);
        self.stack().map(|_| ())
    }

    /// Returns `true` once the transport stack has been built.
    pub fn is_connected(&self) -> bool {
        self.stack.get().is_some()
    }

    fn stack(&self) -> Result<&TransportStack, ApiError> {
        self.stack.get_or_try_init(|| {
            let transport: Arc<dyn Transport> = match &self.transport {
                Some(transport) => Arc::clone(transport),
                None => Arc::new(ReqwestTransport::new()?),
            };
            tracing::debug!(
                "Initialising transport with {} interceptor(s)",
                self.interceptors.len()
            );
            Ok(TransportStack::new(transport, self.interceptors.clone()))
        })
    }

    /// Resolves a relative path to an absolute URL.
    ///
    /// ```rust
    /// use employes_client::api::request::HttpMethod;
    /// use employes_client::Connection;
    ///
    /// let mut connection = Connection::new();
    /// assert_eq!(
    ///     connection.format_url("abc/employees/", HttpMethod::Get),
    ///     "https://connect.employes.nl/v2/abc/employees/"
    /// );
    ///
    /// connection.set_testing(true);
    /// assert_eq!(
    ///     connection.format_url("abc/employees/", HttpMethod::Patch),
    ///     "https://httpbin.org/patch"
    /// );
    /// ```
    pub fn format_url(&self, path: &str, method: HttpMethod) -> String {
        if self.testing {
            return format!("{}/{}", SANDBOX_URL, method.sandbox_path());
        }

        format!("{}/{}", self.context.base_url, path)
    }

    /// Builds the request for `method` and a relative `path`.
    ///
    /// # Panics
    ///
    /// Panics if no bearer token has been set.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        query: Option<&Params>,
        extra_headers: &[(String, String)],
    ) -> HttpRequest {
        build_request(
            &self.context.bearer_token,
            method,
            &self.format_url(path, method),
            body,
            query,
            extra_headers,
        )
    }

    /// Makes an HTTP GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a 404 and [`ApiError::Api`] for
    /// every other failure.
    ///
    /// # Panics
    ///
    /// Panics if no bearer token has been set.
    pub async fn get(&self, path: &str, params: &Params) -> Result<Value, ApiError> {
        let request = self.build_request(HttpMethod::Get, path, None, Some(params), &[]);
        self.send(request).await
    }

    /// Makes an HTTP POST request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Same classification as [`get`](Self::get).
    pub async fn post(&self, path: &str, body: &Params) -> Result<Value, ApiError> {
        let request = self.build_request(HttpMethod::Post, path, Some(build_query(body)), None, &[]);
        self.send(request).await
    }

    /// Makes an HTTP PATCH request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Same classification as [`get`](Self::get).
    pub async fn patch(&self, path: &str, body: &Params) -> Result<Value, ApiError> {
        let request = self.build_request(HttpMethod::Patch, path, Some(build_query(body)), None, &[]);
        self.send(request).await
    }

    /// Makes an HTTP DELETE request.
    ///
    /// # Errors
    ///
    /// Same classification as [`get`](Self::get).
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.build_request(HttpMethod::Delete, path, None, None, &[]);
        self.send(request).await
    }

    async fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!("{} {}", method, url);

        let response = self.stack()?.send(request).await.map_err(|e| {
            tracing::debug!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;
        tracing::debug!("{} {} returned {}", method, url, response.status);

        if !response.is_success() {
            return Err(ApiError::from_response(response.status, &response.body));
        }

        parse_response(&response)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("context", &self.context)
            .field("interceptors", &self.interceptors.len())
            .field("testing", &self.testing)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Decodes a success body. An empty body decodes to `null`.
fn parse_response(response: &HttpResponse) -> Result<Value, ApiError> {
    tracing::trace!("Response body: {}", response.body);
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&response.body)?)
}
