//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that the
//! request pipeline never has to deal with an empty host or key.

use crate::error::ConfigError;
use std::fmt;

/// A validated news API key.
///
/// The key is sent in the `X-Api-Key` header of every request. Its `Debug`
/// output is masked so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use newsline_client::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// The base URL every endpoint path is appended to.
///
/// The string is kept verbatim: no trailing slash is added or removed, so
/// callers control how `base_url + path` concatenates.
///
/// # Example
///
/// ```rust
/// use newsline_client::UrlHost;
///
/// let host = UrlHost::new("https://newsapi.org").unwrap();
/// assert_eq!(host.base_url(), "https://newsapi.org");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlHost(String);

impl UrlHost {
    /// Creates a new validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the URL is empty, or
    /// [`ConfigError::InvalidBaseUrl`] if it lacks an `http`/`https` scheme.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }
        Ok(Self(base_url))
    }

    /// Returns the base URL exactly as configured.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UrlHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty() {
        assert_eq!(ApiKey::new(""), Err(ConfigError::EmptyApiKey));
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_url_host_keeps_trailing_slash() {
        let host = UrlHost::new("https://api.example.com/").unwrap();
        assert_eq!(host.base_url(), "https://api.example.com/");
    }

    #[test]
    fn test_url_host_rejects_empty() {
        assert_eq!(UrlHost::new(""), Err(ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn test_url_host_rejects_missing_scheme() {
        assert!(matches!(
            UrlHost::new("api.example.com"),
            Err(ConfigError::InvalidBaseUrl { url }) if url == "api.example.com"
        ));
    }

    #[test]
    fn test_url_host_accepts_plain_http() {
        let host = UrlHost::new("http://localhost:8080").unwrap();
        assert_eq!(host.to_string(), "http://localhost:8080");
    }
}
