//! Error types for Data Product Exchange operations.
//!
//! [`ServiceError`] is what every operation on
//! [`DataProductExchange`](crate::rest::DataProductExchange) and every pager
//! method returns. It layers local validation and decoding failures on top of
//! the transport's [`HttpError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::rest::ServiceError;
//!
//! match service.get_data_product_version(&options).await {
//!     Ok(response) => println!("{:?}", response.result()),
//!     Err(ServiceError::MissingRequiredParameter { field, .. }) => {
//!         println!("{field} must be set");
//!     }
//!     Err(e) if e.status_code() == Some(404) => println!("no such version"),
//!     Err(e) => {
//!         for error in e.errors() {
//!             println!("{}: {}", error.code.unwrap_or_default(), error.message.unwrap_or_default());
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::resources::v1::ErrorModel;

/// Error type for Data Product Exchange operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required option was missing or empty. No request was sent.
    #[error("{operation}: parameter '{field}' is required and must not be empty")]
    MissingRequiredParameter {
        /// The operation that was called (e.g., `GetDataProduct`).
        operation: &'static str,
        /// The JSON name of the missing field.
        field: &'static str,
    },

    /// The options handed to a pager cannot be paged. No request was sent.
    #[error("Invalid pager options: {reason}")]
    InvalidPagerOptions {
        /// Why the options were rejected.
        reason: String,
    },

    /// The pager has already returned its last page.
    #[error("No more results available")]
    NoMoreResults,

    /// A successful response body could not be decoded.
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw body as received.
        raw_body: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ServiceError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns the request correlation ID when the error came from a response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the call was abandoned because its deadline elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Returns the structured error entries of a non-2xx response body.
    ///
    /// Entries that do not decode as [`ErrorModel`] are skipped; an error
    /// without a response body yields an empty list.
    #[must_use]
    pub fn errors(&self) -> Vec<ErrorModel> {
        let Self::Http(e) = self else {
            return Vec::new();
        };
        e.body()
            .and_then(|body| body.get("errors"))
            .and_then(serde_json::Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Fails with [`ServiceError::MissingRequiredParameter`] if `value` is empty.
pub(crate) fn require_non_empty(
    operation: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::MissingRequiredParameter { operation, field });
    }
    Ok(())
}

// Verify ServiceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError};
    use serde_json::json;
    use std::time::Duration;

    fn response_error(code: u16, body: Option<serde_json::Value>) -> ServiceError {
        ServiceError::Http(HttpError::Response(HttpResponseError {
            code,
            message: "failed".to_string(),
            error_reference: Some("req-1".to_string()),
            body,
        }))
    }

    #[test]
    fn test_missing_parameter_message_names_operation_and_field() {
        let error = ServiceError::MissingRequiredParameter {
            operation: "GetDataProduct",
            field: "id",
        };
        let message = error.to_string();
        assert!(message.contains("GetDataProduct"));
        assert!(message.contains("'id'"));
    }

    #[test]
    fn test_status_code_and_request_id() {
        let error = response_error(404, None);
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));

        let error = ServiceError::Http(HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 503,
            tries: 3,
            message: "down".to_string(),
            error_reference: None,
            body: None,
        }));
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(error.request_id(), None);

        assert_eq!(ServiceError::NoMoreResults.status_code(), None);
    }

    #[test]
    fn test_decode_error_keeps_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error = ServiceError::Decode {
            status: 200,
            raw_body: "{oops".to_string(),
            source,
        };
        assert_eq!(error.status_code(), Some(200));
        assert!(error.to_string().contains("status 200"));
        if let ServiceError::Decode { raw_body, .. } = error {
            assert_eq!(raw_body, "{oops");
        }
    }

    #[test]
    fn test_errors_parses_error_models() {
        let error = response_error(
            400,
            Some(json!({
                "errors": [
                    {"code": "invalid_parameter", "message": "bad state", "target": {"type": "parameter", "name": "state"}},
                    "not an object",
                    {"code": "missing_required_field", "message": "container is required"}
                ],
                "trace": "abc"
            })),
        );

        let errors = error.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code.as_deref(), Some("invalid_parameter"));
        assert_eq!(
            errors[0].target.as_ref().and_then(|t| t.name.as_deref()),
            Some("state")
        );
        assert_eq!(errors[1].message.as_deref(), Some("container is required"));
    }

    #[test]
    fn test_errors_is_empty_without_body() {
        assert!(response_error(500, None).errors().is_empty());
        assert!(ServiceError::NoMoreResults.errors().is_empty());
    }

    #[test]
    fn test_is_timeout() {
        let error: ServiceError = HttpError::Timeout {
            timeout: Duration::from_millis(5),
        }
        .into();
        assert!(error.is_timeout());
        assert!(!response_error(500, None).is_timeout());
    }
}
