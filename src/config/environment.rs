//! Runtime environment selection.
//!
//! This module provides the [`Environment`] enum, which decides which news
//! API host the client talks to and whether an API key is required.

use crate::config::newtypes::{ApiKey, UrlHost};
use crate::config::{ApiKeyProvider, UrlHostProvider};
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Process environment variable holding the environment name.
pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Process environment variable holding the news API key.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// The environment the client runs against.
///
/// # Example
///
/// ```rust
/// use newsline_client::Environment;
///
/// let env: Environment = "Development".parse().unwrap();
/// assert_eq!(env.base_url(), "https://newsapi.org");
/// assert!(env.requires_api_key());
/// assert_eq!(Environment::Mock.to_string(), "Mock");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The live news API. Requires an API key.
    Development,
    /// A local mock server. No API key is sent.
    Mock,
}

impl Environment {
    /// Returns the base URL for this environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Development => "https://newsapi.org",
            Self::Mock => "http://localhost:8080",
        }
    }

    /// Returns `true` if requests in this environment must carry an API key.
    #[must_use]
    pub const fn requires_api_key(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Selects an environment from an optional explicit name and an optional key.
    ///
    /// - An explicit `Development` without a usable key falls back to `Mock`.
    /// - Any other recognised explicit name is used as-is.
    /// - With no (or an unrecognised) name, `Development` is chosen when a key
    ///   is available, otherwise `Mock`.
    #[must_use]
    pub fn resolve(name: Option<&str>, api_key: Option<&str>) -> Self {
        let has_key = api_key.is_some_and(|key| !key.is_empty());

        if let Some(name) = name {
            match name.parse::<Self>() {
                Ok(Self::Development) if !has_key => {
                    tracing::warn!(
                        "Development environment selected but no API key found. Falling back to mock."
                    );
                    return Self::Mock;
                }
                Ok(environment) => {
                    tracing::info!("Using `{}` environment from {}", environment, ENVIRONMENT_VAR);
                    return environment;
                }
                Err(error) => tracing::warn!("{error}"),
            }
        }

        let environment = if has_key { Self::Development } else { Self::Mock };
        tracing::info!("Using `{}` environment (API key present: {})", environment, has_key);
        environment
    }

    /// Resolves the environment from `APP_ENVIRONMENT` and `NEWS_API_KEY`.
    #[must_use]
    pub fn from_process_env() -> Self {
        let name = std::env::var(ENVIRONMENT_VAR).ok();
        let key = std::env::var(API_KEY_VAR).ok();
        Self::resolve(name.as_deref(), key.as_deref())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("Development"),
            Self::Mock => f.write_str("Mock"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Development" => Ok(Self::Development),
            "Mock" => Ok(Self::Mock),
            other => Err(ConfigError::InvalidEnvironment {
                value: other.to_string(),
            }),
        }
    }
}

/// Host provider backed by an [`Environment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentHostProvider {
    environment: Environment,
}

impl EnvironmentHostProvider {
    /// Creates a provider for the given environment.
    #[must_use]
    pub const fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl UrlHostProvider for EnvironmentHostProvider {
    fn url_host(&self) -> Result<UrlHost, ConfigError> {
        UrlHost::new(self.environment.base_url())
    }
}

/// API key provider backed by an [`Environment`] and a raw key source.
///
/// The key is only handed out when the environment requires one.
#[derive(Clone, Debug)]
pub struct EnvironmentApiKeyProvider {
    environment: Environment,
    raw_key: Option<String>,
}

impl EnvironmentApiKeyProvider {
    /// Creates a provider for the given environment and raw key.
    #[must_use]
    pub fn new(environment: Environment, raw_key: Option<String>) -> Self {
        Self {
            environment,
            raw_key,
        }
    }

    /// Creates a provider reading the raw key from `NEWS_API_KEY`.
    #[must_use]
    pub fn from_process_env(environment: Environment) -> Self {
        Self::new(environment, std::env::var(API_KEY_VAR).ok())
    }
}

impl ApiKeyProvider for EnvironmentApiKeyProvider {
    fn api_key(&self) -> Option<ApiKey> {
        if !self.environment.requires_api_key() {
            return None;
        }

        let key = self.raw_key.clone().and_then(|raw| ApiKey::new(raw).ok());
        if key.is_none() {
            tracing::error!(
                "API key required for {} environment but {} is not set",
                self.environment,
                API_KEY_VAR
            );
        }
        key
    }
}
