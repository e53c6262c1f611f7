//! Standard header injection.

use crate::clients::endpoint::RestClientRequest;
use crate::clients::http_request::{Header, RequestDescriptor};
use crate::config::ApiKey;

/// Adds the standard headers to a request.
pub trait HeaderInjector: Send + Sync {
    /// Returns a copy of `request` with the standard headers set.
    ///
    /// The input descriptor is left untouched.
    fn inject<B, R>(
        &self,
        request: &RequestDescriptor,
        client_request: &RestClientRequest<'_, B, R>,
        api_key: Option<&ApiKey>,
    ) -> RequestDescriptor;
}

/// Default [`HeaderInjector`].
///
/// Always sets `Content-Type` from the endpoint and sets `X-Api-Key` when a
/// key is available. Both overwrite any existing value.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHeaderInjector;

impl HeaderInjector for DefaultHeaderInjector {
    fn inject<B, R>(
        &self,
        request: &RequestDescriptor,
        client_request: &RestClientRequest<'_, B, R>,
        api_key: Option<&ApiKey>,
    ) -> RequestDescriptor {
        let mut request = request.clone();

        request
            .headers
            .set(Header::ContentType, client_request.content_type().as_str());

        if let Some(api_key) = api_key {
            request.headers.set(Header::ApiKey, api_key.as_ref());
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::endpoint::{EmptyData, Endpoint, EndpointBuilder};
    use crate::clients::http_request::HttpMethod;
    use url::Url;

    fn endpoint() -> Endpoint<EmptyData, EmptyData> {
        EndpointBuilder::get().with_path("/users").build()
    }

    fn descriptor() -> RequestDescriptor {
        RequestDescriptor::new(
            HttpMethod::Get,
            Url::parse("https://api.example.com/users").unwrap(),
        )
    }

    #[test]
    fn test_sets_content_type_and_api_key() {
        let endpoint = endpoint();
        let key = ApiKey::new("test-key").unwrap();

        let request =
            DefaultHeaderInjector.inject(&descriptor(), &endpoint.make_request(), Some(&key));

        assert_eq!(request.header(Header::ContentType), Some("application/json"));
        assert_eq!(request.header(Header::ApiKey), Some("test-key"));
    }

    #[test]
    fn test_no_api_key_leaves_header_absent() {
        let endpoint = endpoint();

        let request = DefaultHeaderInjector.inject(&descriptor(), &endpoint.make_request(), None);

        assert_eq!(request.header(Header::ContentType), Some("application/json"));
        assert!(!request.headers.contains(Header::ApiKey));
    }

    #[test]
    fn test_overwrites_existing_values() {
        let endpoint = endpoint();
        let key = ApiKey::new("new-key").unwrap();
        let mut original = descriptor();
        original.headers.set("content-type", "text/plain");
        original.headers.set("x-api-key", "old-key");

        let request = DefaultHeaderInjector.inject(&original, &endpoint.make_request(), Some(&key));

        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.header(Header::ContentType), Some("application/json"));
        assert_eq!(request.header(Header::ApiKey), Some("new-key"));
    }

    #[test]
    fn test_input_descriptor_is_not_mutated() {
        let endpoint = endpoint();
        let key = ApiKey::new("test-key").unwrap();
        let original = descriptor();

        let injected = DefaultHeaderInjector.inject(&original, &endpoint.make_request(), Some(&key));

        assert!(original.headers.is_empty());
        assert_ne!(original, injected);
        assert_eq!(original.url, injected.url);
    }

    #[test]
    fn test_preserves_unrelated_headers() {
        let endpoint = endpoint();
        let mut original = descriptor();
        original.headers.set(Header::Authorization, "Bearer abc");

        let request = DefaultHeaderInjector.inject(&original, &endpoint.make_request(), None);

        assert_eq!(request.header(Header::Authorization), Some("Bearer abc"));
    }
}
