//! HTTP-specific error types for the Data Product Exchange SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, deadlines, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the service
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.code),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Retries exhausted after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Timeout { timeout }) => println!("Gave up after {timeout:?}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` is extracted from the error body (first `errors[].message`,
/// then `error`, `message`, `errorMessage`), falling back to the HTTP reason
/// phrase. The parsed body is kept in `body` for structured inspection.
///
/// # Example
///
/// ```rust
/// use data_product_exchange::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Data product version not found".to_string(),
///     error_reference: Some("abc-123".to_string()),
///     body: None,
/// };
///
/// assert_eq!(error.to_string(), "Data product version not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable error message.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` or `X-Global-Transaction-Id` header).
    pub error_reference: Option<String>,
    /// The parsed JSON error body, if the response carried one.
    pub body: Option<serde_json::Value>,
}

/// Error returned when maximum retry attempts have been exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Error message from the last response.
    pub message: String,
    /// Reference ID for error reporting.
    pub error_reference: Option<String>,
    /// The parsed JSON error body of the last response.
    pub body: Option<serde_json::Value>,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request URL could not be constructed.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The call did not complete before its deadline.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The deadline that elapsed.
        timeout: Duration,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns the parsed JSON error body when the error came from a response.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Response(e) => e.body.as_ref(),
            Self::MaxRetries(e) => e.body.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` if the call was abandoned because its deadline elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: None,
            body: None,
        };
        assert_eq!(error.to_string(), "Not Found");
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "Rate limited".to_string(),
            error_reference: None,
            body: None,
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("Exceeded maximum retry count"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "patch".to_string()
            }
            .to_string(),
            "Cannot use patch without specifying data."
        );
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
        assert!(InvalidHttpRequestError::InvalidUrl {
            url: "http://".to_string()
        }
        .to_string()
        .contains("http://"));
    }

    #[test]
    fn test_status_code_and_body_accessors() {
        let error = HttpError::Response(HttpResponseError {
            code: 400,
            message: "bad".to_string(),
            error_reference: None,
            body: Some(json!({"errors": [{"code": "invalid_parameter"}]})),
        });
        assert_eq!(error.status_code(), Some(400));
        assert!(error.body().is_some());
        assert!(!error.is_timeout());

        let timeout = HttpError::Timeout {
            timeout: Duration::from_millis(10),
        };
        assert_eq!(timeout.status_code(), None);
        assert!(timeout.is_timeout());
        assert!(timeout.to_string().contains("timed out"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
            body: None,
        };
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _: &dyn std::error::Error = &HttpError::Timeout {
            timeout: Duration::from_secs(1),
        };
    }
}
