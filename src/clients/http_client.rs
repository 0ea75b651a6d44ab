//! HTTP client for Data Product Exchange communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the service with retry handling and per-call deadlines.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
use crate::clients::http_request::{merge_header, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ServiceConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// SDK name used in the `User-Agent` header.
pub const SDK_NAME: &str = "data-product-exchange-rust-sdk";

/// HTTP client for making requests to the service.
///
/// The client handles:
/// - URL construction from the configured service URL
/// - Default headers including `User-Agent`, `Accept` and `Authorization`
/// - Automatic retry logic for 429 and 5xx responses (except 501)
/// - Deadlines covering the whole call, retries included
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone (the connection pool is shared).
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (the service URL without trailing `/`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Wait between retries when no `Retry-After` header is present.
    retry_interval: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}{SDK_NAME}/{SDK_VERSION} (lang=rust; rust={rust_version})");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(authorization) = config.authenticator().authorization_header() {
            default_headers.insert("Authorization".to_string(), authorization);
        }

        for (key, value) in config.default_headers() {
            merge_header(&mut default_headers, key.clone(), value.clone());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri: config.service_url().as_ref().to_string(),
            default_headers,
            retry_interval: config.retry_interval(),
        })
    }

    /// Returns a copy of this client sending requests to another base URI.
    ///
    /// The connection pool is shared with the original client.
    #[must_use]
    pub fn with_base_uri(&self, base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into().trim_end_matches('/').to_string(),
            ..self.clone()
        }
    }

    /// Returns a copy of this client with an additional default header.
    #[must_use]
    pub fn with_default_header(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut client = self.clone();
        merge_header(&mut client.default_headers, key.into(), value.into());
        client
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the service.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging (defaults, then content type, then request headers)
    /// - Retry logic for retryable status codes
    /// - The request deadline, if any
    ///
    /// Dropping the returned future abandons the call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation or URL construction fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The deadline elapses (`Timeout`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.build_url(&request.path)?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            merge_header(
                &mut headers,
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                merge_header(&mut headers, key.clone(), value.clone());
            }
        }

        match request.timeout {
            Some(timeout) => {
                tokio::time::timeout(timeout, self.send_with_retries(&request, &url, &headers))
                    .await
                    .map_err(|_| HttpError::Timeout { timeout })?
            }
            None => self.send_with_retries(&request, &url, &headers).await,
        }
    }

    /// Builds the absolute request URL.
    fn build_url(&self, path: &str) -> Result<reqwest::Url, InvalidHttpRequestError> {
        let url = format!("{}/{}", self.base_uri, path.trim_start_matches('/'));
        reqwest::Url::parse(&url).map_err(|_| InvalidHttpRequestError::InvalidUrl { url })
    }

    async fn send_with_retries(
        &self,
        request: &HttpRequest,
        url: &reqwest::Url,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(url.clone()),
                HttpMethod::Post => self.client.post(url.clone()),
                HttpMethod::Patch => self.client.patch(url.clone()),
                HttpMethod::Delete => self.client.delete(url.clone()),
            };

            for (key, value) in headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                "Sending {} request to {} (attempt {} of {})",
                request.http_method,
                url,
                tries,
                request.tries
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            let response = HttpResponse::new(code, res_headers, body_text);

            tracing::debug!("Received status {} for {} {}", code, request.http_method, url);

            if response.is_ok() {
                return Ok(response);
            }

            let body = response.json_body();
            let message = Self::error_message(code, body.as_ref());
            let error_reference = response.request_id().map(String::from);

            if !Self::is_retryable(code) {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                    body,
                }));
            }

            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message,
                        error_reference,
                        body,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message,
                    error_reference,
                    body,
                }));
            }

            let delay = self.calculate_retry_delay(&response, code);
            tracing::warn!(
                "Retrying {} {} after status {} in {:?}",
                request.http_method,
                url,
                code,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Returns `true` for status codes that are worth retrying.
    fn is_retryable(code: u16) -> bool {
        code == 429 || ((500..=599).contains(&code) && code != 501)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(&self, response: &HttpResponse, status: u16) -> Duration {
        // Only 429 honours Retry-After
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            {
                return delay;
            }
        }
        self.retry_interval
    }

    /// Extracts a human readable message from an error body.
    ///
    /// Looks at `errors[0].message`, `error`, `message` and `errorMessage`
    /// in that order, then falls back to the status reason phrase.
    pub(crate) fn error_message(code: u16, body: Option<&serde_json::Value>) -> String {
        let from_body = body.and_then(|body| {
            body.get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|first| first.get("message"))
                .or_else(|| body.get("error"))
                .or_else(|| body.get("message"))
                .or_else(|| body.get("errorMessage"))
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        });

        from_body.unwrap_or_else(|| {
            let reason = reqwest::StatusCode::from_u16(code)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("Unknown Error");
            format!("Error: {reason}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Authenticator;
    use crate::config::{BearerToken, ServiceUrl};
    use serde_json::json;

    fn create_test_config() -> ServiceConfig {
        ServiceConfig::builder()
            .service_url(ServiceUrl::new("https://dpx.example.com/data_product_exchange/v1").unwrap())
            .authenticator(Authenticator::bearer(BearerToken::new("test-token").unwrap()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.base_uri(),
            "https://dpx.example.com/data_product_exchange/v1"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("data-product-exchange-rust-sdk/"));
        assert!(user_agent.contains("lang=rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ServiceConfig::builder()
            .authenticator(Authenticator::NoAuth)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_for_no_auth() {
        let config = ServiceConfig::builder()
            .authenticator(Authenticator::NoAuth)
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_config_default_headers_are_included() {
        let config = create_test_config().with_default_header("X-Team", "catalog");
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(
            client.default_headers().get("X-Team"),
            Some(&"catalog".to_string())
        );
    }

    #[test]
    fn test_with_base_uri_trims_and_keeps_headers() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let other = client.with_base_uri("http://localhost:1234/");
        assert_eq!(other.base_uri(), "http://localhost:1234");
        assert_eq!(other.default_headers(), client.default_headers());
    }

    #[test]
    fn test_build_url_joins_path() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let url = client.build_url("/data_products/abc").unwrap();
        assert_eq!(
            url.as_str(),
            "https://dpx.example.com/data_product_exchange/v1/data_products/abc"
        );
    }

    #[test]
    fn test_build_url_rejects_malformed_base() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let broken = client.with_base_uri("not a url");
        assert!(matches!(
            broken.build_url("data_products"),
            Err(InvalidHttpRequestError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_is_retryable() {
        assert!(HttpClient::is_retryable(429));
        assert!(HttpClient::is_retryable(500));
        assert!(HttpClient::is_retryable(503));
        assert!(!HttpClient::is_retryable(501));
        assert!(!HttpClient::is_retryable(400));
        assert!(!HttpClient::is_retryable(404));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = json!({"errors": [{"code": "not_found", "message": "Version not found"}]});
        assert_eq!(
            HttpClient::error_message(404, Some(&body)),
            "Version not found"
        );

        let body = json!({"error": "bad request"});
        assert_eq!(HttpClient::error_message(400, Some(&body)), "bad request");

        let body = json!({"message": "oops"});
        assert_eq!(HttpClient::error_message(500, Some(&body)), "oops");

        let body = json!({"errorMessage": "denied"});
        assert_eq!(HttpClient::error_message(403, Some(&body)), "denied");

        assert_eq!(HttpClient::error_message(404, None), "Error: Not Found");
    }

    #[test]
    fn test_merge_header_ignores_name_case() {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), "sdk".to_string());

        merge_header(
            &mut headers,
            "accept".to_string(),
            "application/hal+json".to_string(),
        );

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("accept"),
            Some(&"application/hal+json".to_string())
        );
        assert!(headers.get("Accept").is_none());
    }

    #[test]
    fn test_config_default_header_replaces_sdk_header_case_insensitively() {
        let config = create_test_config().with_default_header("accept", "text/csv");
        let client = HttpClient::new(&config).unwrap();
        let accept: Vec<_> = client
            .default_headers()
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case("accept"))
            .collect();
        assert_eq!(accept.len(), 1);
        assert_eq!(accept[0].1, "text/csv");
    }

    #[test]
    fn test_retry_delay_falls_back_on_unrepresentable_retry_after() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1e30".to_string()]);
        let response = HttpResponse::new(429, headers, "");

        assert_eq!(
            client.calculate_retry_delay(&response, 429),
            client.retry_interval
        );

        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["-3".to_string()]);
        let response = HttpResponse::new(429, headers, "");
        assert_eq!(
            client.calculate_retry_delay(&response, 429),
            client.retry_interval
        );

        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2".to_string()]);
        let response = HttpResponse::new(429, headers, "");
        assert_eq!(
            client.calculate_retry_delay(&response, 429),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
