//! The transport boundary.
//!
//! A [`Transport`] performs the actual network exchange for a
//! [`RequestDescriptor`]. The REST client depends only on this trait;
//! [`ReqwestTransport`] is the default implementation.
//!
//! Awaiting [`Transport::send`] is the only suspension point of a request.
//! Dropping the client future drops the transport future with it, so an
//! abandoned call never reaches response processing.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, RequestDescriptor};
use crate::clients::http_response::RawResponse;
use crate::config::ClientConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Performs an HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns whatever came back.
    ///
    /// Non-2xx statuses are not errors at this level.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for network-level failures (DNS, connection
    /// resets, timeouts configured on the underlying client, ...).
    async fn send(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with the default user agent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created
    /// (e.g., TLS initialization failure).
    pub fn new() -> Result<Self, TransportError> {
        Self::with_user_agent(&default_user_agent())
    }

    /// Creates a transport using the user agent from `config`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        config
            .user_agent()
            .map_or_else(Self::new, Self::with_user_agent)
    }

    /// Creates a transport sending the given user agent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let code = response.status().as_u16();
        let headers = Self::parse_response_headers(response.headers());
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse::new(code, headers, body))
    }
}

fn default_user_agent() -> String {
    format!("newsline-client/{CLIENT_VERSION}")
}
