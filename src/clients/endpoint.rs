//! Endpoint definitions.
//!
//! An [`Endpoint`] describes one API call: the verb (with its body, if any),
//! the path, and the query parameters. It binds exactly one request body
//! type `B` and one response type `R`, both known at the call site.
//!
//! Endpoints are built with [`EndpointBuilder`]:
//!
//! ```rust
//! use newsline_client::clients::{EmptyData, Endpoint, EndpointBuilder, HttpMethod};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct SourcesResponse {
//!     status: String,
//! }
//!
//! let endpoint: Endpoint<EmptyData, SourcesResponse> = EndpointBuilder::get()
//!     .with_path("/v2/top-headlines/sources")
//!     .with_query("language", "en")
//!     .build();
//!
//! assert_eq!(endpoint.method(), HttpMethod::Get);
//! assert_eq!(endpoint.queries().len(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::clients::http_request::{ContentType, HttpMethod};

/// The body used by endpoints that send or expect nothing.
///
/// Serializes to `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyData {}

/// The verb of an endpoint, carrying the body for verbs that have one.
///
/// A `Get` never has a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestType<B> {
    /// GET, no body.
    Get,
    /// POST with a body.
    Post(B),
    /// PUT with a body.
    Put(B),
}

impl<B> RequestType<B> {
    /// Returns the HTTP method for this verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::Get => HttpMethod::Get,
            Self::Post(_) => HttpMethod::Post,
            Self::Put(_) => HttpMethod::Put,
        }
    }

    /// Returns the body, or `None` for `Get`.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        match self {
            Self::Get => None,
            Self::Post(body) | Self::Put(body) => Some(body),
        }
    }

    /// Returns the content type of the request body.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        ContentType::Json
    }

    /// Returns the content type expected in the response.
    #[must_use]
    pub const fn accept_content_type(&self) -> ContentType {
        ContentType::Json
    }
}

impl<B> fmt::Display for RequestType<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.method(), f)
    }
}

/// One query parameter: a key and one or more values.
///
/// Multiple values are sent comma-joined under a single key
/// (`tags=tech,mobile`), not as repeated keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryItem {
    /// The parameter name.
    pub key: String,
    /// The parameter values, in order.
    pub values: Vec<String>,
}

impl QueryItem {
    /// Returns the values joined with commas, as sent on the wire.
    #[must_use]
    pub fn joined_value(&self) -> String {
        self.values.join(",")
    }

    /// Returns the percent-encoded `key=v1,v2` form of this item.
    ///
    /// Keys and values are percent-encoded except for commas, which stay
    /// literal both as separators and inside a value.
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        let values: Vec<_> = self.values.iter().map(|value| encode_component(value)).collect();
        format!("{}={}", encode_component(&self.key), values.join(","))
    }
}

fn encode_component(component: &str) -> String {
    urlencoding::encode(component).replace("%2C", ",")
}

/// An immutable description of one API call.
///
/// `B` is the request body type and `R` the response type the call decodes
/// into. Use [`EndpointBuilder`] to construct one.
pub struct Endpoint<B, R> {
    request_type: RequestType<B>,
    path: String,
    queries: Vec<QueryItem>,
    response: PhantomData<fn() -> R>,
}

impl<B, R> Endpoint<B, R> {
    /// Returns the verb and body.
    #[must_use]
    pub const fn request_type(&self) -> &RequestType<B> {
        &self.request_type
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.request_type.method()
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.request_type.body()
    }

    /// Returns the path appended to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in insertion order.
    #[must_use]
    pub fn queries(&self) -> &[QueryItem] {
        &self.queries
    }

    /// Wraps this endpoint into a [`RestClientRequest`].
    #[must_use]
    pub const fn make_request(&self) -> RestClientRequest<'_, B, R> {
        RestClientRequest::new(self)
    }
}

impl<B: Clone, R> Clone for Endpoint<B, R> {
    fn clone(&self) -> Self {
        Self {
            request_type: self.request_type.clone(),
            path: self.path.clone(),
            queries: self.queries.clone(),
            response: PhantomData,
        }
    }
}

impl<B: PartialEq, R> PartialEq for Endpoint<B, R> {
    fn eq(&self, other: &Self) -> bool {
        self.request_type == other.request_type
            && self.path == other.path
            && self.queries == other.queries
    }
}

impl<B: Eq, R> Eq for Endpoint<B, R> {}

impl<B: fmt::Debug, R> fmt::Debug for Endpoint<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("request_type", &self.request_type)
            .field("path", &self.path)
            .field("queries", &self.queries)
            .field("response", &std::any::type_name::<R>())
            .finish()
    }
}

/// Fluent builder for [`Endpoint`] values.
///
/// Start with [`get`](EndpointBuilder::get), [`post`](EndpointBuilder::post)
/// or [`put`](EndpointBuilder::put), then add a path and query parameters.
/// Builder methods never fail.
pub struct EndpointBuilder<B, R> {
    request_type: RequestType<B>,
    path: String,
    queries: Vec<QueryItem>,
    response: PhantomData<fn() -> R>,
}

impl<R> EndpointBuilder<EmptyData, R> {
    /// Starts a GET endpoint with an empty path.
    #[must_use]
    pub const fn get() -> Self {
        Self::new(RequestType::Get)
    }

    /// Starts a GET endpoint at `path`.
    #[must_use]
    pub fn get_at(path: impl Into<String>) -> Self {
        Self::get().with_path(path)
    }
}

impl<B, R> EndpointBuilder<B, R> {
    const fn new(request_type: RequestType<B>) -> Self {
        Self {
            request_type,
            path: String::new(),
            queries: Vec::new(),
            response: PhantomData,
        }
    }

    /// Starts a POST endpoint carrying `body`, with an empty path.
    #[must_use]
    pub const fn post(body: B) -> Self {
        Self::new(RequestType::Post(body))
    }

    /// Starts a PUT endpoint carrying `body`, with an empty path.
    #[must_use]
    pub const fn put(body: B) -> Self {
        Self::new(RequestType::Put(body))
    }

    /// Starts a POST endpoint carrying `body` at `path`.
    #[must_use]
    pub fn post_at(body: B, path: impl Into<String>) -> Self {
        Self::post(body).with_path(path)
    }

    /// Starts a PUT endpoint carrying `body` at `path`.
    #[must_use]
    pub fn put_at(body: B, path: impl Into<String>) -> Self {
        Self::put(body).with_path(path)
    }

    /// Sets the path. The last call wins.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Appends a single-valued query parameter.
    ///
    /// An empty value is ignored. Repeating a key appends another entry
    /// instead of replacing the earlier one.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.queries.push(QueryItem {
                key: key.into(),
                values: vec![value],
            });
        }
        self
    }

    /// Appends a multi-valued query parameter, sent comma-joined.
    ///
    /// An empty list is ignored.
    #[must_use]
    pub fn with_query_values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.queries.push(QueryItem {
                key: key.into(),
                values,
            });
        }
        self
    }

    /// Builds the immutable [`Endpoint`].
    #[must_use]
    pub fn build(self) -> Endpoint<B, R> {
        Endpoint {
            request_type: self.request_type,
            path: self.path,
            queries: self.queries,
            response: PhantomData,
        }
    }
}

impl<B: Clone, R> Clone for EndpointBuilder<B, R> {
    fn clone(&self) -> Self {
        Self {
            request_type: self.request_type.clone(),
            path: self.path.clone(),
            queries: self.queries.clone(),
            response: PhantomData,
        }
    }
}

impl<B: fmt::Debug, R> fmt::Debug for EndpointBuilder<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointBuilder")
            .field("request_type", &self.request_type)
            .field("path", &self.path)
            .field("queries", &self.queries)
            .finish()
    }
}

/// An endpoint together with the facets derived from it.
///
/// This is what the request and response pipelines work on.
pub struct RestClientRequest<'a, B, R> {
    endpoint: &'a Endpoint<B, R>,
}

impl<'a, B, R> RestClientRequest<'a, B, R> {
    /// Wraps an endpoint.
    #[must_use]
    pub const fn new(endpoint: &'a Endpoint<B, R>) -> Self {
        Self { endpoint }
    }

    /// Returns the wrapped endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &'a Endpoint<B, R> {
        self.endpoint
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.endpoint.method()
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.endpoint.path()
    }

    /// Returns the query parameters.
    #[must_use]
    pub fn queries(&self) -> &'a [QueryItem] {
        self.endpoint.queries()
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&'a B> {
        self.endpoint.body()
    }

    /// Returns the content type of the request body.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.endpoint.request_type.content_type()
    }

    /// Returns the content type expected in the response.
    #[must_use]
    pub const fn accept_content_type(&self) -> ContentType {
        self.endpoint.request_type.accept_content_type()
    }
}

impl<B, R> Clone for RestClientRequest<'_, B, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, R> Copy for RestClientRequest<'_, B, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize)]
    struct TestRequest {
        name: String,
        value: i32,
    }

    #[derive(Debug, Deserialize)]
    struct TestResponse;

    #[test]
    fn test_get_endpoint_defaults() {
        let endpoint = EndpointBuilder::<EmptyData, TestResponse>::get().build();

        assert_eq!(endpoint.path(), "");
        assert!(endpoint.queries().is_empty());
        assert_eq!(endpoint.request_type(), &RequestType::Get);
        assert!(endpoint.body().is_none());
    }

    #[test]
    fn test_post_endpoint_carries_body() {
        let body = TestRequest {
            name: "user".to_string(),
            value: 123,
        };
        let endpoint = EndpointBuilder::<_, TestResponse>::post(body.clone())
            .with_path("/api/users")
            .build();

        assert_eq!(endpoint.method(), HttpMethod::Post);
        assert_eq!(endpoint.path(), "/api/users");
        assert_eq!(endpoint.body(), Some(&body));
    }

    #[test]
    fn test_put_endpoint_carries_body() {
        let body = TestRequest {
            name: "updated".to_string(),
            value: 999,
        };
        let endpoint = EndpointBuilder::<_, TestResponse>::put(body).build();

        match endpoint.request_type() {
            RequestType::Put(body) => assert_eq!(body.value, 999),
            other => panic!("Expected PUT, got {other}"),
        }
    }

    #[test]
    fn test_with_path_last_call_wins() {
        let endpoint = EndpointBuilder::<EmptyData, TestResponse>::get()
            .with_path("/first")
            .with_path("/second")
            .build();

        assert_eq!(endpoint.path(), "/second");
    }

    #[test]
    fn test_queries_keep_order_and_duplicates() {
        let endpoint = EndpointBuilder::<EmptyData, TestResponse>::get()
            .with_query("page", "1")
            .with_query_values("tags", ["tech", "mobile"])
            .with_query("page", "2")
            .build();

        let keys: Vec<_> = endpoint.queries().iter().map(|q| q.key.as_str()).collect();
        assert_eq!(keys, vec!["page", "tags", "page"]);
        assert_eq!(endpoint.queries()[1].joined_value(), "tech,mobile");
        assert_eq!(endpoint.queries()[2].values, vec!["2".to_string()]);
    }

    #[test]
    fn test_empty_query_values_are_ignored() {
        let endpoint = EndpointBuilder::<EmptyData, TestResponse>::get()
            .with_query("language", "en")
            .with_query("empty", "")
            .with_query_values("none", Vec::<String>::new())
            .build();

        assert_eq!(endpoint.queries().len(), 1);
        assert_eq!(endpoint.queries()[0].key, "language");
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = EndpointBuilder::<EmptyData, TestResponse>::get()
            .with_path("/users")
            .with_query("limit", "10");

        assert_eq!(builder.clone().build(), builder.build());
    }

    #[test]
    fn test_query_pair_encoding() {
        let item = QueryItem {
            key: "tags".to_string(),
            values: vec!["tech".to_string(), "mobile".to_string(), "ios".to_string()],
        };
        assert_eq!(item.to_query_pair(), "tags=tech,mobile,ios");

        let item = QueryItem {
            key: "q".to_string(),
            values: vec!["new york".to_string(), "a,b".to_string()],
        };
        assert_eq!(item.to_query_pair(), "q=new%20york,a,b");
    }

    #[test]
    fn test_single_value_keeps_literal_commas() {
        let endpoint = EndpointBuilder::<EmptyData, TestResponse>::get()
            .with_query("sources", "bbc-news,cnn")
            .with_query("q", "a&b=c")
            .build();

        assert_eq!(endpoint.queries()[0].to_query_pair(), "sources=bbc-news,cnn");
        assert_eq!(endpoint.queries()[1].to_query_pair(), "q=a%26b%3Dc");
    }

    #[test]
    fn test_path_taking_constructors() {
        let body = TestRequest {
            name: "user".to_string(),
            value: 1,
        };

        let get = EndpointBuilder::<EmptyData, TestResponse>::get_at("/users").build();
        let post = EndpointBuilder::<_, TestResponse>::post_at(body.clone(), "/users").build();
        let put = EndpointBuilder::<_, TestResponse>::put_at(body.clone(), "/users/1")
            .with_path("/users/2")
            .build();

        assert_eq!(get, EndpointBuilder::get().with_path("/users").build());
        assert_eq!(post.path(), "/users");
        assert_eq!(post.body(), Some(&body));
        assert_eq!(put.method(), HttpMethod::Put);
        assert_eq!(put.path(), "/users/2");
    }

    #[test]
    fn test_request_wrapper_facets() {
        let endpoint = EndpointBuilder::<EmptyData, TestResponse>::get()
            .with_path("/users")
            .build();
        let request = endpoint.make_request();

        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/users");
        assert_eq!(request.content_type(), ContentType::Json);
        assert_eq!(request.accept_content_type(), ContentType::Json);
        assert!(request.body().is_none());
    }

    #[test]
    fn test_empty_data_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&EmptyData {}).unwrap(), "{}");
    }
}
