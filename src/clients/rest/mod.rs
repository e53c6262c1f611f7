//! REST client for the news API.
//!
//! [`RestClient`] executes typed [`Endpoint`](crate::clients::Endpoint)s and
//! returns decoded responses.
//!
//! # Overview
//!
//! A single call runs through four stages:
//!
//! 1. the request pipeline builds the URL, encodes the body and injects headers
//! 2. the [`Transport`](crate::clients::Transport) performs the exchange
//! 3. the status validator accepts `2xx` responses only
//! 4. the response body is decoded into the endpoint's response type
//!
//! Errors from any stage are returned unchanged. There is no retry, caching
//! or error translation at this level.
//!
//! # Example
//!
//! ```rust,ignore
//! use newsline_client::{ClientConfig, Environment, RestClient};
//!
//! let config = ClientConfig::from_environment(Environment::Development, Some("key".into()))?;
//! let client = RestClient::new(&config)?;
//! let response = client.execute_request(&endpoint).await?;
//! ```

mod client;

pub use client::RestClient;
