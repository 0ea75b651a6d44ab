//! Error types for SDK configuration.
//!
//! This module contains the error type returned when building a
//! [`ServiceConfig`](crate::ServiceConfig) or one of its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use data_product_exchange::{BearerToken, ConfigError};
//!
//! let result = BearerToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBearerToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Please provide a valid access token.")]
    EmptyBearerToken,

    /// Basic authentication requires both a username and a password.
    #[error("Basic authentication requires a non-empty username and password.")]
    EmptyBasicCredentials,

    /// Service URL is invalid.
    #[error("Invalid service URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.example.com/data_product_exchange/v1').")]
    InvalidServiceUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value '{value}' for environment variable {variable}.")]
    InvalidEnvironmentValue {
        /// The environment variable name.
        variable: String,
        /// The rejected value.
        value: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}
