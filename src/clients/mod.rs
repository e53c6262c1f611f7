//! HTTP client types for the news API.
//!
//! This module provides the typed request layer: endpoint descriptions, the
//! request and response pipelines, and the transport boundary.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Endpoint`] and [`EndpointBuilder`]: Immutable, typed request descriptions
//! - [`RestClient`]: Executes endpoints and decodes responses
//! - [`RequestPipeline`] / [`DefaultRequestPipeline`]: URL, body and headers
//! - [`ResponsePipeline`] / [`DefaultResponsePipeline`]: Status validation and decoding
//! - [`Transport`] / [`ReqwestTransport`]: The network exchange
//! - [`HttpError`]: The unified error returned by every call
//!
//! # Example
//!
//! ```rust,ignore
//! use newsline_client::clients::{EmptyData, Endpoint, EndpointBuilder};
//!
//! let endpoint: Endpoint<EmptyData, ArticlesResponse> = EndpointBuilder::get()
//!     .with_path("/v2/top-headlines")
//!     .with_query_values("sources", ["bbc-news", "cnn"])
//!     .build();
//!
//! let articles = client.execute_request(&endpoint).await?;
//! ```
//!
//! # Customization
//!
//! Every stage sits behind a trait. Swap one by building the default
//! pipelines with [`DefaultRequestPipeline::with_components`] or
//! [`DefaultResponsePipeline::with_components`], or provide a whole pipeline
//! through [`RestClient::with_pipelines`].

mod endpoint;
mod errors;
mod header_injector;
mod http_request;
mod http_response;
mod request_pipeline;
mod response_pipeline;
pub mod rest;
mod serializer;
mod status_validator;
mod transport;
mod url_request_builder;

pub use endpoint::{
    EmptyData, Endpoint, EndpointBuilder, QueryItem, RequestType, RestClientRequest,
};
pub use errors::{
    BoxError, HttpError, RequestBuildError, SerializerError, ServerError, TransportError,
};
pub use header_injector::{DefaultHeaderInjector, HeaderInjector};
pub use http_request::{ContentType, Header, HeaderMap, HttpMethod, RequestDescriptor};
pub use http_response::RawResponse;
pub use request_pipeline::{DefaultRequestPipeline, RequestPipeline};
pub use response_pipeline::{DefaultResponsePipeline, ResponsePipeline};
pub use serializer::{JsonSerializer, Serializer};
pub use status_validator::{DefaultStatusCodeValidator, StatusCodeValidator};
pub use transport::{ReqwestTransport, Transport, CLIENT_VERSION};
pub use url_request_builder::{DefaultUrlRequestBuilder, UrlRequestBuilder};

pub use rest::RestClient;
