//! # Newsline Client
//!
//! A typed REST client for the news API, providing validated configuration,
//! immutable endpoint descriptions, and a pipelined request/response layer
//! over a pluggable HTTP transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the base URL and API key
//! - [`Environment`] selection between the live API and a local mock server
//! - Typed endpoints via [`EndpointBuilder`]
//! - [`RestClient`], which builds, sends, validates and decodes requests
//! - News services for sources and top headlines via [`news`]
//!
//! ## Quick Start
//!
//! ```rust
//! use newsline_client::{ApiKey, ClientConfig, EmptyData, Endpoint, EndpointBuilder, UrlHost};
//!
//! let config = ClientConfig::builder()
//!     .url_host(UrlHost::new("https://newsapi.org").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let endpoint: Endpoint<EmptyData, EmptyData> = EndpointBuilder::get()
//!     .with_path("/v2/top-headlines")
//!     .with_query_values("sources", ["bbc-news", "cnn"])
//!     .build();
//!
//! assert_eq!(endpoint.queries()[0].to_query_pair(), "sources=bbc-news,cnn");
//! ```
//!
//! ## Executing Requests
//!
//! ```rust,ignore
//! use newsline_client::{ClientConfig, RestClient};
//! use newsline_client::news::{ArticlesResponse, headlines_endpoint};
//!
//! let config = ClientConfig::from_process_env()?;
//! let client = RestClient::new(&config)?;
//!
//! let sources = vec!["bbc-news".to_string()];
//! let response: ArticlesResponse = client.execute_request(&headlines_endpoint(&sources)).await?;
//! ```
//!
//! ## Environment Selection
//!
//! [`Environment::resolve`] picks `Development` when an API key is
//! available and falls back to `Mock` (`http://localhost:8080`) otherwise.
//! [`ClientConfig::from_process_env`] reads `APP_ENVIRONMENT` and
//! `NEWS_API_KEY`.
//!
//! ## Errors
//!
//! Every call returns [`HttpError`], which wraps the error of the stage that
//! failed without reinterpreting it. Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client and its collaborators are `Send + Sync`
//! - **Transport-agnostic**: The core depends only on the [`Transport`] trait

pub mod clients;
pub mod config;
pub mod error;
pub mod news;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApiKeyProvider, ClientConfig, ClientConfigBuilder, Environment, UrlHost,
    UrlHostProvider,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    EmptyData, Endpoint, EndpointBuilder, HttpError, HttpMethod, RawResponse, RequestBuildError,
    RequestDescriptor, ReqwestTransport, RestClient, SerializerError, ServerError, Transport,
    TransportError,
};
