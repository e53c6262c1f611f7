//! Turns an endpoint into a bare [`RequestDescriptor`].

use url::Url;

use crate::clients::endpoint::{QueryItem, RestClientRequest};
use crate::clients::errors::RequestBuildError;
use crate::clients::http_request::RequestDescriptor;
use crate::config::UrlHost;

/// Builds the method and URL of a request. Headers and body are added later.
pub trait UrlRequestBuilder: Send + Sync {
    /// Builds a descriptor with no headers and no body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestBuildError::InvalidUrl`] if `base_url + path` does not
    /// parse, or [`RequestBuildError::InvalidQueryParameters`] if the URL no
    /// longer parses once the query string is applied.
    fn make_url_request<B, R>(
        &self,
        request: &RestClientRequest<'_, B, R>,
    ) -> Result<RequestDescriptor, RequestBuildError>;
}

/// Default [`UrlRequestBuilder`] working from a fixed [`UrlHost`].
///
/// The URL is the plain concatenation `base_url + path`; slashes are not
/// normalised. Multi-valued query parameters are comma-joined.
#[derive(Clone, Debug)]
pub struct DefaultUrlRequestBuilder {
    url_host: UrlHost,
}

impl DefaultUrlRequestBuilder {
    /// Creates a builder for the given host.
    #[must_use]
    pub const fn new(url_host: UrlHost) -> Self {
        Self { url_host }
    }

    /// Returns the host this builder targets.
    #[must_use]
    pub const fn url_host(&self) -> &UrlHost {
        &self.url_host
    }
}

impl UrlRequestBuilder for DefaultUrlRequestBuilder {
    fn make_url_request<B, R>(
        &self,
        request: &RestClientRequest<'_, B, R>,
    ) -> Result<RequestDescriptor, RequestBuildError> {
        let url_string = format!("{}{}", self.url_host.base_url(), request.path());

        let mut url =
            Url::parse(&url_string).map_err(|_| RequestBuildError::InvalidUrl(url_string.clone()))?;

        let queries = request.queries();
        if !queries.is_empty() {
            let query = queries
                .iter()
                .map(QueryItem::to_query_pair)
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        let url = Url::parse(url.as_str()).map_err(|_| RequestBuildError::InvalidQueryParameters)?;

        Ok(RequestDescriptor::new(request.method(), url))
    }
}
