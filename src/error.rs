//! Configuration error types for the Newsline client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid hosts or keys are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use newsline_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid news API key.")]
    EmptyApiKey,

    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the API host (e.g., 'https://newsapi.org').")]
    EmptyBaseUrl,

    /// Base URL does not start with an HTTP scheme.
    #[error("Invalid base URL '{url}'. Expected an 'http://' or 'https://' URL.")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// Environment name is not recognised.
    #[error("Invalid environment '{value}'. Expected 'Development' or 'Mock'.")]
    InvalidEnvironment {
        /// The rejected environment name.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
