//! Turns a raw response into the endpoint's response type.

use serde::de::DeserializeOwned;

use crate::clients::endpoint::RestClientRequest;
use crate::clients::errors::HttpError;
use crate::clients::http_response::RawResponse;
use crate::clients::serializer::{JsonSerializer, Serializer};
use crate::clients::status_validator::{DefaultStatusCodeValidator, StatusCodeValidator};

/// Validates and decodes responses.
pub trait ResponsePipeline: Send + Sync {
    /// Validates `response` and decodes its body into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Server`] if the status is rejected, or
    /// [`HttpError::Serialization`] if the body does not decode into `R`.
    fn make_response_data<B, R: DeserializeOwned>(
        &self,
        response: RawResponse,
        request: &RestClientRequest<'_, B, R>,
    ) -> Result<R, HttpError>;
}

/// Default [`ResponsePipeline`]: status validation, then decoding.
#[derive(Clone, Debug, Default)]
pub struct DefaultResponsePipeline<V = DefaultStatusCodeValidator, S = JsonSerializer> {
    status_validator: V,
    serializer: S,
}

impl DefaultResponsePipeline {
    /// Creates a pipeline with the default validator and JSON decoding.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_components(DefaultStatusCodeValidator, JsonSerializer)
    }
}

impl<V, S> DefaultResponsePipeline<V, S> {
    /// Creates a pipeline from explicit components.
    #[must_use]
    pub const fn with_components(status_validator: V, serializer: S) -> Self {
        Self {
            status_validator,
            serializer,
        }
    }
}

impl<V, S> ResponsePipeline for DefaultResponsePipeline<V, S>
where
    V: StatusCodeValidator,
    S: Serializer,
{
    fn make_response_data<B, R: DeserializeOwned>(
        &self,
        response: RawResponse,
        _request: &RestClientRequest<'_, B, R>,
    ) -> Result<R, HttpError> {
        let response = self.status_validator.validate(response)?;
        Ok(self.serializer.deserialize(&response.body)?)
    }
}
