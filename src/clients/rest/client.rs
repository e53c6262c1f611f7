//! REST client implementation.
//!
//! This module provides the [`RestClient`] type, the single entry point for
//! executing [`Endpoint`]s against the news API.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::endpoint::Endpoint;
use crate::clients::errors::{HttpError, TransportError};
use crate::clients::request_pipeline::{DefaultRequestPipeline, RequestPipeline};
use crate::clients::response_pipeline::{DefaultResponsePipeline, ResponsePipeline};
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::{ApiKeyProvider, ClientConfig, UrlHostProvider};
use crate::error::ConfigError;

/// Typed REST client.
///
/// Holds three immutable collaborators: a [`Transport`], a
/// [`RequestPipeline`] and a [`ResponsePipeline`]. There is no other state,
/// so one client can serve any number of concurrent calls.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` whenever its collaborators are, which holds
/// for the defaults.
///
/// # Example
///
/// ```rust,ignore
/// use newsline_client::{ClientConfig, EmptyData, EndpointBuilder, RestClient, UrlHost};
///
/// let config = ClientConfig::builder()
///     .url_host(UrlHost::new("https://newsapi.org")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let endpoint = EndpointBuilder::<EmptyData, SourcesResponse>::get()
///     .with_path("/v2/top-headlines/sources")
///     .with_query("language", "en")
///     .build();
///
/// let sources = client.execute_request(&endpoint).await?;
/// ```
#[derive(Debug)]
pub struct RestClient<
    T = ReqwestTransport,
    Q = DefaultRequestPipeline,
    P = DefaultResponsePipeline,
> {
    transport: T,
    request_pipeline: Q,
    response_pipeline: P,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(ReqwestTransport::from_config(config)?, config))
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client with the default pipelines over a custom transport.
    #[must_use]
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self::with_pipelines(
            transport,
            DefaultRequestPipeline::new(config),
            DefaultResponsePipeline::new(),
        )
    }

    /// Creates a client resolving host and API key from providers.
    ///
    /// Both providers are read once, here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host provider fails.
    pub fn from_providers(
        transport: T,
        host_provider: &dyn UrlHostProvider,
        api_key_provider: &dyn ApiKeyProvider,
    ) -> Result<Self, ConfigError> {
        let config = ClientConfig::from_providers(host_provider, api_key_provider)?;
        Ok(Self::with_transport(transport, &config))
    }
}

impl<T, Q, P> RestClient<T, Q, P> {
    /// Creates a client from explicit collaborators.
    #[must_use]
    pub const fn with_pipelines(transport: T, request_pipeline: Q, response_pipeline: P) -> Self {
        Self {
            transport,
            request_pipeline,
            response_pipeline,
        }
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the request pipeline.
    #[must_use]
    pub const fn request_pipeline(&self) -> &Q {
        &self.request_pipeline
    }

    /// Returns the response pipeline.
    #[must_use]
    pub const fn response_pipeline(&self) -> &P {
        &self.response_pipeline
    }
}

impl<T, Q, P> RestClient<T, Q, P>
where
    T: Transport,
    Q: RequestPipeline,
    P: ResponsePipeline,
{
    /// Executes `endpoint` and decodes the response into `R`.
    ///
    /// Builds the request, sends it through the transport and runs the
    /// response pipeline. Nothing is retried and errors from every stage are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Build`] if the URL cannot be built
    /// - [`HttpError::Serialization`] if the body cannot be encoded or the
    ///   response cannot be decoded
    /// - [`HttpError::Transport`] with the transport's own error
    /// - [`HttpError::Server`] for non-HTTP or non-2xx responses
    pub async fn execute_request<B, R>(&self, endpoint: &Endpoint<B, R>) -> Result<R, HttpError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let client_request = endpoint.make_request();

        let request = self.request_pipeline.make_url_request(&client_request)?;
        tracing::debug!("Sending {} request to {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        tracing::debug!(
            "Received response for {} with status {:?}",
            endpoint.path(),
            response.status_code
        );

        self.response_pipeline
            .make_response_data(response, &client_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::endpoint::{EmptyData, EndpointBuilder};
    use crate::clients::errors::ServerError;
    use crate::clients::http_request::{Header, RequestDescriptor};
    use crate::clients::http_response::RawResponse;
    use crate::config::{ApiKey, UrlHost};
    use async_trait::async_trait;
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestResponse {
        id: u64,
        message: String,
    }

    /// Records every request and answers with a fixed response.
    struct RecordingTransport {
        status: u16,
        body: &'static str,
        requests: Mutex<Vec<RequestDescriptor>>,
    }

    impl RecordingTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(RawResponse::new(
                self.status,
                HashMap::new(),
                self.body.as_bytes().to_vec(),
            ))
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .url_host(UrlHost::new("https://api.example.com").unwrap())
            .api_key(ApiKey::new("k1").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_execute_request_decodes_response() {
        let transport = RecordingTransport::new(200, r#"{"id":123,"message":"Success"}"#);
        let client = RestClient::with_transport(transport, &config());
        let endpoint: Endpoint<EmptyData, TestResponse> =
            EndpointBuilder::get().with_path("/users").build();

        let response = client.execute_request(&endpoint).await.unwrap();

        assert_eq!(
            response,
            TestResponse {
                id: 123,
                message: "Success".to_string()
            }
        );

        let requests = client.transport().requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.as_str(), "https://api.example.com/users");
        assert_eq!(requests[0].header(Header::ApiKey), Some("k1"));
        assert_eq!(requests[0].header(Header::ContentType), Some("application/json"));
    }

    #[tokio::test]
    async fn test_build_failure_never_reaches_transport() {
        let transport = RecordingTransport::new(200, "{}");
        let config = ClientConfig::builder()
            .url_host(UrlHost::new("https://exa mple.com").unwrap())
            .build()
            .unwrap();
        let client = RestClient::with_transport(transport, &config);
        let endpoint: Endpoint<EmptyData, EmptyData> =
            EndpointBuilder::get().with_path("/users").build();

        let result = client.execute_request(&endpoint).await;

        assert!(matches!(result, Err(HttpError::Build(_))));
        assert!(client.transport().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_status_carries_response() {
        let transport = RecordingTransport::new(401, r#"{"status":"error"}"#);
        let client = RestClient::with_transport(transport, &config());
        let endpoint: Endpoint<EmptyData, TestResponse> =
            EndpointBuilder::get().with_path("/users").build();

        let result = client.execute_request(&endpoint).await;

        match result {
            Err(HttpError::Server(ServerError::UnexpectedStatus(response))) => {
                assert_eq!(response.status_code, Some(401));
                assert_eq!(response.body_text(), r#"{"status":"error"}"#);
            }
            other => panic!("Expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_from_providers_resolves_configuration() {
        let client = RestClient::from_providers(
            RecordingTransport::new(200, "{}"),
            &config(),
            &config(),
        )
        .unwrap();

        assert_eq!(
            client.request_pipeline().api_key().map(AsRef::as_ref),
            Some("k1")
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
        assert_send_sync::<RestClient<RecordingTransport>>();
    }
}
