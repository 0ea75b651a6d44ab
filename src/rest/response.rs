//! Response wrapper for service operations.
//!
//! [`DetailedResponse<T>`] pairs the decoded result of an operation with the
//! status code and headers of the HTTP response it came from.
//!
//! The result is an `Option`: a successful response with an empty body is
//! not an error, it simply carries no result.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = service.get_data_product(&GetDataProductOptions::new("dp-1")).await?;
//!
//! assert_eq!(response.status_code(), 200);
//! if let Some(product) = response.result() {
//!     println!("{:?}", product.name);
//! }
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ServiceError;

/// The result of a service operation together with response metadata.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// The HTTP status code.
    status_code: u16,
    /// Response headers, keyed by lower-cased name.
    headers: HashMap<String, Vec<String>>,
    /// The decoded result (`None` for an empty body).
    result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// Creates a new `DetailedResponse`.
    #[must_use]
    pub const fn new(
        status_code: u16,
        headers: HashMap<String, Vec<String>>,
        result: Option<T>,
    ) -> Self {
        Self {
            status_code,
            headers,
            result,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
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
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
            .or_else(|| self.header("x-global-transaction-id"))
    }

    /// Returns the decoded result, if the response had a body.
    #[must_use]
    pub const fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Consumes the response and returns the decoded result.
    #[must_use]
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Maps the result to a different type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> DetailedResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: self.result.map(f),
        }
    }
}

impl<T: DeserializeOwned> DetailedResponse<T> {
    /// Creates a `DetailedResponse` by decoding a successful HTTP response.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Decode`] if the non-empty body does not decode
    /// into `T`. The raw body is kept on the error.
    pub fn from_http_response(response: HttpResponse) -> Result<Self, ServiceError> {
        let result = response.decode().map_err(|source| ServiceError::Decode {
            status: response.code,
            raw_body: response.body.clone(),
            source,
        })?;

        Ok(Self::new(response.code, response.headers, result))
    }
}

impl DetailedResponse<()> {
    /// Creates a `DetailedResponse` for an operation that returns no result.
    #[must_use]
    pub fn without_result(response: HttpResponse) -> Self {
        Self::new(response.code, response.headers, None)
    }
}

// Verify DetailedResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DetailedResponse<String>>();
};
