//! Error types for the REST client.
//!
//! Each stage of a request has its own error type:
//!
//! - [`RequestBuildError`]: the URL or query string could not be assembled
//! - [`SerializerError`]: a body could not be encoded, or a response could
//!   not be decoded into the declared type
//! - [`TransportError`]: whatever the transport failed with, untouched
//! - [`ServerError`]: the response was not HTTP, or its status was not 2xx
//! - [`HttpError`]: the unified error returned by
//!   [`RestClient::execute_request`](crate::clients::RestClient::execute_request)
//!
//! Errors are converted into [`HttpError`] with `?` only; no stage inspects
//! or rewrites an error produced by the stage below it.
//!
//! # Example
//!
//! ```rust,ignore
//! use newsline_client::clients::{HttpError, ServerError};
//!
//! match client.execute_request(&endpoint).await {
//!     Ok(sources) => println!("{sources:?}"),
//!     Err(HttpError::Server(ServerError::UnexpectedStatus(response))) => {
//!         println!("status {:?}", response.status_code);
//!     }
//!     Err(HttpError::Transport(e)) => println!("network error: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::http_response::RawResponse;

/// Boxed error used at the swappable seams (codec, transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised while turning an endpoint into a transport-ready request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestBuildError {
    /// `base_url + path` did not parse as a URL.
    #[error("Invalid URL {0}")]
    InvalidUrl(String),

    /// The URL could not be re-parsed after the query string was applied.
    #[error("Invalid queryString")]
    InvalidQueryParameters,
}

/// Error raised by a [`Serializer`](crate::clients::Serializer).
#[derive(Debug, Error)]
pub enum SerializerError {
    /// A request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] BoxError),

    /// Response bytes did not decode into the declared type.
    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] BoxError),
}

/// Error raised by a [`Transport`](crate::clients::Transport).
///
/// This is an opaque wrapper: `Display` and `source()` are those of the
/// wrapped error, and the original value can be recovered with
/// [`downcast_ref`](Self::downcast_ref) or [`into_inner`](Self::into_inner).
#[derive(Debug)]
pub struct TransportError(BoxError);

impl TransportError {
    /// Wraps an arbitrary transport failure.
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self(error.into())
    }

    /// Returns the wrapped error if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Returns a reference to the wrapped error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Consumes the wrapper, returning the original error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// Error raised by a [`StatusCodeValidator`](crate::clients::StatusCodeValidator).
///
/// Both variants carry the offending response so callers can inspect the
/// body and headers. Equality is structural on that response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// The transport produced a response without an HTTP status code.
    #[error("The response object could not be converted to an HTTP response")]
    NonHttpResponse(RawResponse),

    /// The status code was outside `200..300`.
    #[error("Unexpected HTTP status {}", status_label(.0))]
    UnexpectedStatus(RawResponse),
}

impl ServerError {
    /// Returns the response carried by this error.
    #[must_use]
    pub const fn response(&self) -> &RawResponse {
        match self {
            Self::NonHttpResponse(response) | Self::UnexpectedStatus(response) => response,
        }
    }

    /// Returns the HTTP status code, or `0` when there is none.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.response().status_code.unwrap_or(0)
    }

    /// Returns a short explanation of why the response was rejected.
    #[must_use]
    pub const fn failure_reason(&self) -> &'static str {
        match self {
            Self::NonHttpResponse(_) => "The response object could not be converted to an HTTP response",
            Self::UnexpectedStatus(_) => "The status code is outside the 2xx success range",
        }
    }
}

fn status_label(response: &RawResponse) -> String {
    response
        .status_code
        .map_or_else(|| "<none>".to_string(), |code| code.to_string())
}

/// Unified error type returned by the REST client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be built.
    #[error(transparent)]
    Build(#[from] RequestBuildError),

    /// A body could not be encoded or a response could not be decoded.
    #[error(transparent)]
    Serialization(#[from] SerializerError),

    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-HTTP or non-2xx response.
    #[error(transparent)]
    Server(#[from] ServerError),
}
