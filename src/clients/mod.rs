//! HTTP client types for Data Product Exchange communication.
//!
//! This module provides the transport layer used by
//! [`DataProductExchange`](crate::DataProductExchange). It handles request
//! validation, header composition, retries and deadlines.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the service
//! - [`HttpResponse`]: A raw response from the service
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using the `Retry-After` header value, or the configured interval
//! - **5xx (except 501)**: Retries after the configured interval
//! - **Other errors**: Returned immediately
//! - **Deadline elapsed**: Never retried
//!
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_NAME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
