//! HTTP response types for the Data Product Exchange SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing status,
//! headers and the raw body of a service response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the service.
///
/// The body is kept as raw text so that callers decide how to decode it:
/// an empty body is a valid "no content" result, not an error.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body: body.into(),
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body contains anything other than whitespace.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Returns the first value of a header (name is matched case-insensitively).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the request correlation ID, if present.
    ///
    /// Looks at `X-Request-Id` first, then `X-Global-Transaction-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
            .or_else(|| self.header("x-global-transaction-id"))
    }

    /// Parses the body as untyped JSON; `None` if empty or not JSON.
    #[must_use]
    pub fn json_body(&self) -> Option<serde_json::Value> {
        if !self.has_body() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }

    /// Decodes the body into `T`.
    ///
    /// Returns `Ok(None)` for an empty body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a non-empty body does not decode into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        if !self.has_body() {
            return Ok(None);
        }
        serde_json::from_str(&self.body).map(Some)
    }
}
