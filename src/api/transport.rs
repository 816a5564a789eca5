//
//  employes-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The connection never talks to the network directly. It hands an
//! [`HttpRequest`] to a [`Transport`] and receives an [`HttpResponse`] back,
//! whatever the status. The default transport is [`ReqwestTransport`]; tests
//! and embedders can supply their own.
//!
//! ## Interceptors
//!
//! [`Interceptor`]s see every outgoing request and every incoming response,
//! in registration order. They are bundled with the transport into a
//! [`TransportStack`] the first time a connection sends a request; the stack
//! is immutable from then on.
//!
//! ```rust
//! use employes_client::api::transport::HeaderInterceptor;
//! use employes_client::Connection;
//!
//! let mut connection = Connection::new();
//! assert!(connection.insert_interceptor(HeaderInterceptor::new("X-Client", "payroll-sync")));
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method};
use thiserror::Error;

use super::request::{HttpMethod, HttpRequest, HttpResponse};

/// Failure to complete an HTTP exchange.
///
/// A transport returns a response for every status it receives; this error
/// only covers exchanges that produced no response at all.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error raised by the reqwest client (connect, TLS, timeout, body read)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Error raised by a custom transport
    #[error("{0}")]
    Other(String),
}

/// Executes plain-data HTTP requests.
///
/// Implementations must return `Ok` for every response they receive,
/// including 4xx and 5xx; status classification belongs to the connection.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Hook applied to every request and response passing through a connection.
///
/// Both methods default to doing nothing, so an interceptor only implements
/// the side it cares about.
pub trait Interceptor: Send + Sync {
    /// Called before the request is handed to the transport.
    fn on_request(&self, _request: &mut HttpRequest) {}

    /// Called after the transport returned a response.
    fn on_response(&self, _response: &mut HttpResponse) {}
}

/// Interceptor that adds a fixed header to every request.
///
/// The header replaces any caller header with the same name. Registering one
/// for `Authorization` overrides the bearer token.
#[derive(Debug, Clone)]
pub struct HeaderInterceptor {
    name: String,
    value: String,
}

impl HeaderInterceptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Interceptor for HeaderInterceptor {
    fn on_request(&self, request: &mut HttpRequest) {
        request.set_header(self.name.clone(), self.value.clone());
    }
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a `employes-client/<version>` user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(format!("employes-client/{}", crate::VERSION))
                .build()?,
        })
    }

    /// Wraps an existing client, keeping its timeouts, proxies and so on.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(reqwest_method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// A transport together with the interceptors frozen at construction time.
pub struct TransportStack {
    transport: Arc<dyn Transport>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl TransportStack {
    pub fn new(transport: Arc<dyn Transport>, interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            transport,
            interceptors,
        }
    }

    /// Number of interceptors in the stack.
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Runs the request interceptors, the transport, then the response
    /// interceptors.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, TransportError> {
        for interceptor in &self.interceptors {
            interceptor.on_request(&mut request);
        }

        let mut response = self.transport.send(request).await?;

        for interceptor in &self.interceptors {
            interceptor.on_response(&mut response);
        }

        Ok(response)
    }
}

/// In-memory transport for tests: records every request and replays queued
/// responses in order.
#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::{Transport, TransportError};
    use crate::api::request::{HttpRequest, HttpResponse};

    #[derive(Clone, Default)]
    pub(crate) struct RecordingTransport {
        requests: Arc<Mutex<Vec<HttpRequest>>>,
        responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    }

    impl RecordingTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn respond(&self, status: u16, body: &str) -> &Self {
            self.responses.lock().unwrap().push_back(HttpResponse {
                status,
                headers: vec![("Content-Type".to_string(), "application/json".to_string())],
                body: body.to_string(),
            });
            self
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request was recorded")
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| TransportError::Other("no response queued".to_string()))
        }
    }
}
