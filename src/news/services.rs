//! Network services for the news API.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::{EmptyData, Endpoint, EndpointBuilder, HttpError, RestClient, Transport};
use crate::news::types::{Article, ArticlesResponse, Source, SourcesResponse};

/// Path of the sources listing.
pub const SOURCES_PATH: &str = "/v2/top-headlines/sources";

/// Path of the top headlines listing.
pub const HEADLINES_PATH: &str = "/v2/top-headlines";

/// Lists the sources a user can pick headlines from.
#[async_trait]
pub trait SourcesService: Send + Sync {
    /// Fetches all English-language sources.
    ///
    /// # Errors
    ///
    /// Returns the client's [`HttpError`] unchanged.
    async fn fetch_sources(&self) -> Result<Vec<Source>, HttpError>;
}

/// Fetches top headlines.
#[async_trait]
pub trait HeadlinesService: Send + Sync {
    /// Fetches the top headlines published by `sources`.
    ///
    /// An empty slice sends no `sources` parameter at all.
    ///
    /// # Errors
    ///
    /// Returns the client's [`HttpError`] unchanged.
    async fn fetch_headlines(&self, sources: &[String]) -> Result<Vec<Article>, HttpError>;
}

/// Builds the sources endpoint.
#[must_use]
pub fn sources_endpoint() -> Endpoint<EmptyData, SourcesResponse> {
    EndpointBuilder::get()
        .with_path(SOURCES_PATH)
        .with_query("language", "en")
        .build()
}

/// Builds the headlines endpoint for `sources`.
#[must_use]
pub fn headlines_endpoint(sources: &[String]) -> Endpoint<EmptyData, ArticlesResponse> {
    EndpointBuilder::get()
        .with_path(HEADLINES_PATH)
        .with_query_values("sources", sources.iter().cloned())
        .build()
}

/// [`SourcesService`] and [`HeadlinesService`] over a shared [`RestClient`].
///
/// Cloning is cheap; clones share the client.
#[derive(Debug)]
pub struct NewsService<T: Transport> {
    client: Arc<RestClient<T>>,
}

impl<T: Transport> Clone for NewsService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> NewsService<T> {
    /// Creates a service that owns `client`.
    #[must_use]
    pub fn new(client: RestClient<T>) -> Self {
        Self::from_shared(Arc::new(client))
    }

    /// Creates a service over an already shared client.
    #[must_use]
    pub const fn from_shared(client: Arc<RestClient<T>>) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &RestClient<T> {
        &self.client
    }
}

#[async_trait]
impl<T: Transport> SourcesService for NewsService<T> {
    async fn fetch_sources(&self) -> Result<Vec<Source>, HttpError> {
        let response = self.client.execute_request(&sources_endpoint()).await?;
        Ok(response.sources)
    }
}

#[async_trait]
impl<T: Transport> HeadlinesService for NewsService<T> {
    async fn fetch_headlines(&self, sources: &[String]) -> Result<Vec<Article>, HttpError> {
        let response = self
            .client
            .execute_request(&headlines_endpoint(sources))
            .await?;
        Ok(response.articles)
    }
}
