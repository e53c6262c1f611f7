//! Builds a complete [`RequestDescriptor`] from an endpoint.
//!
//! The pipeline runs three steps in order:
//!
//! 1. [`UrlRequestBuilder`] produces the method and URL
//! 2. the endpoint body, if any, is encoded by the [`Serializer`]
//! 3. [`HeaderInjector`] adds `Content-Type` and `X-Api-Key`
//!
//! Failures from any step are returned as-is.

use serde::Serialize;

use crate::clients::endpoint::RestClientRequest;
use crate::clients::errors::HttpError;
use crate::clients::header_injector::{DefaultHeaderInjector, HeaderInjector};
use crate::clients::http_request::RequestDescriptor;
use crate::clients::serializer::{JsonSerializer, Serializer};
use crate::clients::url_request_builder::{DefaultUrlRequestBuilder, UrlRequestBuilder};
use crate::config::{ApiKey, ClientConfig};

/// Produces transport-ready requests.
pub trait RequestPipeline: Send + Sync {
    /// Builds the descriptor for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the URL cannot be built, or
    /// [`HttpError::Serialization`] if the body cannot be encoded.
    fn make_url_request<B: Serialize, R>(
        &self,
        request: &RestClientRequest<'_, B, R>,
    ) -> Result<RequestDescriptor, HttpError>;
}

/// Default [`RequestPipeline`].
#[derive(Clone, Debug)]
pub struct DefaultRequestPipeline<
    U = DefaultUrlRequestBuilder,
    S = JsonSerializer,
    H = DefaultHeaderInjector,
> {
    request_builder: U,
    serializer: S,
    header_injector: H,
    api_key: Option<ApiKey>,
}

impl DefaultRequestPipeline {
    /// Creates a pipeline with the default components for `config`.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_components(
            DefaultUrlRequestBuilder::new(config.url_host().clone()),
            JsonSerializer,
            DefaultHeaderInjector,
            config.api_key().cloned(),
        )
    }
}

impl<U, S, H> DefaultRequestPipeline<U, S, H> {
    /// Creates a pipeline from explicit components.
    #[must_use]
    pub const fn with_components(
        request_builder: U,
        serializer: S,
        header_injector: H,
        api_key: Option<ApiKey>,
    ) -> Self {
        Self {
            request_builder,
            serializer,
            header_injector,
            api_key,
        }
    }

    /// Returns the API key injected into every request, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}

impl<U, S, H> RequestPipeline for DefaultRequestPipeline<U, S, H>
where
    U: UrlRequestBuilder,
    S: Serializer,
    H: HeaderInjector,
{
    fn make_url_request<B: Serialize, R>(
        &self,
        request: &RestClientRequest<'_, B, R>,
    ) -> Result<RequestDescriptor, HttpError> {
        let mut descriptor = self.request_builder.make_url_request(request)?;

        if let Some(body) = request.body() {
            descriptor.body = Some(self.serializer.serialize(body)?);
        }

        Ok(self
            .header_injector
            .inject(&descriptor, request, self.api_key.as_ref()))
    }
}
