//! Configuration types for the Newsline client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: the resolved host and credentials a client is built from
//! - [`ClientConfigBuilder`]: a builder for [`ClientConfig`]
//! - [`UrlHost`] and [`ApiKey`]: validated newtypes
//! - [`UrlHostProvider`] and [`ApiKeyProvider`]: the configuration boundary,
//!   resolved once when a client is constructed
//! - [`Environment`]: `Development` or `Mock` environment selection
//!
//! # Example
//!
//! ```rust
//! use newsline_client::{ApiKey, ClientConfig, UrlHost};
//!
//! let config = ClientConfig::builder()
//!     .url_host(UrlHost::new("https://newsapi.org").unwrap())
//!     .api_key(ApiKey::new("my-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.url_host().base_url(), "https://newsapi.org");
//! ```

mod environment;
mod newtypes;

pub use environment::{
    Environment, EnvironmentApiKeyProvider, EnvironmentHostProvider, API_KEY_VAR, ENVIRONMENT_VAR,
};
pub use newtypes::{ApiKey, UrlHost};

use crate::error::ConfigError;

/// Supplies the base URL requests are sent to.
pub trait UrlHostProvider {
    /// Returns the host every endpoint path is appended to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the provider cannot produce a valid host.
    fn url_host(&self) -> Result<UrlHost, ConfigError>;
}

/// Supplies the optional API key sent in the `X-Api-Key` header.
pub trait ApiKeyProvider {
    /// Returns the key, or `None` when requests should go out unauthenticated.
    fn api_key(&self) -> Option<ApiKey>;
}

/// Resolved client configuration.
///
/// Holds everything the request pipeline and the default transport need.
/// Values are read once when a client is constructed and never change
/// afterwards.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    url_host: UrlHost,
    api_key: Option<ApiKey>,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Resolves a configuration from a host provider and a key provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host provider fails.
    pub fn from_providers(
        host_provider: &dyn UrlHostProvider,
        api_key_provider: &dyn ApiKeyProvider,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            url_host: host_provider.url_host()?,
            api_key: api_key_provider.api_key(),
            user_agent: None,
        })
    }

    /// Resolves a configuration for an [`Environment`] and a raw API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment host is invalid.
    pub fn from_environment(
        environment: Environment,
        raw_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_providers(
            &EnvironmentHostProvider::new(environment),
            &EnvironmentApiKeyProvider::new(environment, raw_api_key),
        )
    }

    /// Resolves a configuration from `APP_ENVIRONMENT` and `NEWS_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment host is invalid.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_process_env();
        Self::from_providers(
            &EnvironmentHostProvider::new(environment),
            &EnvironmentApiKeyProvider::from_process_env(environment),
        )
    }

    /// Returns the host.
    #[must_use]
    pub const fn url_host(&self) -> &UrlHost {
        &self.url_host
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the user agent used by the default transport, if configured.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl UrlHostProvider for ClientConfig {
    fn url_host(&self) -> Result<UrlHost, ConfigError> {
        Ok(self.url_host.clone())
    }
}

impl ApiKeyProvider for ClientConfig {
    fn api_key(&self) -> Option<ApiKey> {
        self.api_key.clone()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `url_host` is required; `api_key` and `user_agent` are optional.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    url_host: Option<UrlHost>,
    api_key: Option<ApiKey>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host (required).
    #[must_use]
    pub fn url_host(mut self, url_host: UrlHost) -> Self {
        self.url_host = Some(url_host);
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the user agent sent by the default transport.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `url_host` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let url_host = self
            .url_host
            .ok_or(ConfigError::MissingRequiredField { field: "url_host" })?;

        Ok(ClientConfig {
            url_host,
            api_key: self.api_key,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_url_host() {
        let result = ClientConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "url_host" })
        ));
    }

    #[test]
    fn test_builder_without_api_key() {
        let config = ClientConfig::builder()
            .url_host(UrlHost::new("https://api.example.com").unwrap())
            .build()
            .unwrap();

        assert!(config.api_key().is_none());
        assert!(config.user_agent().is_none());
    }

    #[test]
    fn test_config_acts_as_providers() {
        let config = ClientConfig::builder()
            .url_host(UrlHost::new("https://api.example.com").unwrap())
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap();

        assert_eq!(
            UrlHostProvider::url_host(&config).unwrap().base_url(),
            "https://api.example.com"
        );
        assert_eq!(
            ApiKeyProvider::api_key(&config).unwrap().as_ref(),
            "test-key"
        );
    }

    #[test]
    fn test_from_environment_development() {
        let config =
            ClientConfig::from_environment(Environment::Development, Some("k1".to_string()))
                .unwrap();

        assert_eq!(config.url_host().base_url(), "https://newsapi.org");
        assert_eq!(config.api_key().unwrap().as_ref(), "k1");
    }

    #[test]
    fn test_from_environment_mock_drops_key() {
        let config =
            ClientConfig::from_environment(Environment::Mock, Some("k1".to_string())).unwrap();

        assert_eq!(config.url_host().base_url(), "http://localhost:8080");
        assert!(config.api_key().is_none());
    }
}
