//! Configuration types for the Data Product Exchange SDK.
//!
//! This module provides the configuration used to construct a
//! [`DataProductExchange`](crate::DataProductExchange) service client.
//!
//! # Overview
//!
//! - [`ServiceConfig`]: The configuration struct holding all SDK settings
//! - [`ServiceConfigBuilder`]: A builder for constructing [`ServiceConfig`] instances
//! - [`ServiceUrl`]: A validated service base URL
//! - [`BearerToken`]: A validated access token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use data_product_exchange::{Authenticator, ServiceConfig, ServiceUrl};
//!
//! let config = ServiceConfig::builder()
//!     .service_url(ServiceUrl::new("https://api.example.com/data_product_exchange/v1").unwrap())
//!     .authenticator(Authenticator::NoAuth)
//!     .max_retries(3)
//!     .retry_interval(Duration::from_millis(500))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 3);
//! ```
//!
//! # Environment
//!
//! [`ServiceConfig::from_env`] reads settings prefixed with the upper-cased
//! service name (default `DPX`):
//!
//! | Variable | Meaning |
//! |---|---|
//! | `DPX_URL` | Service URL |
//! | `DPX_AUTH_TYPE` | `noauth`, `bearertoken` or `basic` |
//! | `DPX_BEARER_TOKEN` | Token for `bearertoken` |
//! | `DPX_USERNAME` / `DPX_PASSWORD` | Credentials for `basic` |
//! | `DPX_ENABLE_RETRIES` | `true` enables retries |
//! | `DPX_MAX_RETRIES` | Retry count (default 4 when enabled) |
//! | `DPX_RETRY_INTERVAL` | Seconds between retries |

mod newtypes;

pub use newtypes::{BearerToken, ServiceUrl};

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Authenticator;
use crate::error::ConfigError;

/// Default service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://dpx-api.cloud.ibm.com/data_product_exchange/v1";

/// Default service name used for environment lookups.
pub const DEFAULT_SERVICE_NAME: &str = "dpx";

/// Default wait between retries.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Retry count used when retries are enabled from the environment without
/// an explicit count.
pub const DEFAULT_ENV_MAX_RETRIES: u32 = 4;

/// Configuration for the Data Product Exchange SDK.
///
/// # Thread Safety
///
/// `ServiceConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    service_url: ServiceUrl,
    authenticator: Authenticator,
    default_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
    max_retries: u32,
    retry_interval: Duration,
    timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Creates a new builder for constructing a `ServiceConfig`.
    #[must_use]
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an unusable value or the
    /// selected authentication type lacks its credentials.
    pub fn from_env(service_name: &str) -> Result<Self, ConfigError> {
        Self::from_env_vars(service_name, |name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// This is the implementation behind [`from_env`](Self::from_env); it
    /// allows loading from a map instead of the process environment.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use data_product_exchange::ServiceConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("DPX_URL", "https://dpx.example.com/v1"),
    ///     ("DPX_AUTH_TYPE", "noauth"),
    /// ]);
    /// let config = ServiceConfig::from_env_vars("dpx", |name| {
    ///     vars.get(name).map(|v| (*v).to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.service_url().as_ref(), "https://dpx.example.com/v1");
    /// ```
    pub fn from_env_vars<F>(service_name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = service_name.to_uppercase().replace('-', "_");
        let var = |suffix: &str| {
            let name = format!("{prefix}_{suffix}");
            lookup(&name).map(|value| (name, value))
        };

        let mut builder = Self::builder();

        if let Some((_, url)) = var("URL") {
            builder = builder.service_url(ServiceUrl::new(url)?);
        }

        let auth_type = var("AUTH_TYPE").map(|(name, value)| (name, value.to_lowercase()));
        let authenticator = match auth_type {
            None => match var("BEARER_TOKEN") {
                Some((_, token)) => Authenticator::bearer(BearerToken::new(token)?),
                None => Authenticator::NoAuth,
            },
            Some((_, ref kind)) if kind == "noauth" => Authenticator::NoAuth,
            Some((_, ref kind)) if kind == "bearertoken" => {
                let (_, token) = var("BEARER_TOKEN").ok_or(ConfigError::EmptyBearerToken)?;
                Authenticator::bearer(BearerToken::new(token)?)
            }
            Some((_, ref kind)) if kind == "basic" => {
                let username = var("USERNAME").map(|(_, v)| v).unwrap_or_default();
                let password = var("PASSWORD").map(|(_, v)| v).unwrap_or_default();
                Authenticator::basic(username, password)?
            }
            Some((variable, value)) => {
                return Err(ConfigError::InvalidEnvironmentValue { variable, value });
            }
        };
        builder = builder.authenticator(authenticator);

        let retries_enabled = match var("ENABLE_RETRIES") {
            Some((variable, value)) => parse_bool(&variable, &value)?,
            None => false,
        };
        if retries_enabled {
            let max_retries = match var("MAX_RETRIES") {
                Some((variable, value)) => value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidEnvironmentValue { variable, value })?,
                None => DEFAULT_ENV_MAX_RETRIES,
            };
            builder = builder.max_retries(max_retries);

            if let Some((variable, value)) = var("RETRY_INTERVAL") {
                let seconds = value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|s| s.is_finite() && *s >= 0.0)
                    .ok_or(ConfigError::InvalidEnvironmentValue { variable, value })?;
                builder = builder.retry_interval(Duration::from_secs_f64(seconds));
            }
        }

        builder.build()
    }

    /// Returns the service URL.
    #[must_use]
    pub const fn service_url(&self) -> &ServiceUrl {
        &self.service_url
    }

    /// Returns the authenticator.
    #[must_use]
    pub const fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Returns headers added to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the number of retries after the first attempt (0 disables retries).
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the wait between retries when the server gives no `Retry-After`.
    #[must_use]
    pub const fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Returns the default per-call deadline, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns a copy of this configuration pointing at another service URL.
    #[must_use]
    pub fn with_service_url(&self, service_url: ServiceUrl) -> Self {
        Self {
            service_url,
            ..self.clone()
        }
    }

    /// Returns a copy of this configuration with an extra default header.
    #[must_use]
    pub fn with_default_header(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut config = self.clone();
        config.default_headers.insert(key.into(), value.into());
        config
    }
}

// Verify ServiceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceConfig>();
};

fn parse_bool(variable: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvironmentValue {
            variable: variable.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Builder for constructing [`ServiceConfig`] instances.
///
/// The only required field is `authenticator`.
///
/// # Defaults
///
/// - `service_url`: [`DEFAULT_SERVICE_URL`]
/// - `max_retries`: `0` (no retries)
/// - `retry_interval`: 1 second
/// - `timeout`: `None`
/// - `default_headers`: empty
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    service_url: Option<ServiceUrl>,
    authenticator: Option<Authenticator>,
    default_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
    max_retries: Option<u32>,
    retry_interval: Option<Duration>,
    timeout: Option<Duration>,
}

impl ServiceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service URL.
    #[must_use]
    pub fn service_url(mut self, url: ServiceUrl) -> Self {
        self.service_url = Some(url);
        self
    }

    /// Sets the authenticator (required).
    #[must_use]
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of retries for retryable responses (429 and 5xx except 501).
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the wait between retries.
    #[must_use]
    pub const fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = Some(interval);
        self
    }

    /// Sets the default per-call deadline.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ServiceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `authenticator` is not set,
    /// or [`ConfigError::InvalidServiceUrl`] if the default URL cannot be parsed.
    pub fn build(self) -> Result<ServiceConfig, ConfigError> {
        let authenticator = self
            .authenticator
            .ok_or(ConfigError::MissingRequiredField {
                field: "authenticator",
            })?;

        let service_url = match self.service_url {
            Some(url) => url,
            None => ServiceUrl::new(DEFAULT_SERVICE_URL)?,
        };

        Ok(ServiceConfig {
            service_url,
            authenticator,
            default_headers: self.default_headers,
            user_agent_prefix: self.user_agent_prefix,
            max_retries: self.max_retries.unwrap_or(0),
            retry_interval: self.retry_interval.unwrap_or(DEFAULT_RETRY_INTERVAL),
            timeout: self.timeout,
        })
    }
}
