//! # Data Product Exchange Rust SDK
//!
//! A Rust client for the Data Product Exchange API: catalog initialization,
//! data products, and the lifecycle of data product versions (create, list,
//! read, patch, deliver, delete).
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ServiceConfig`] and [`ServiceConfigBuilder`]
//! - Environment-driven configuration via [`ServiceConfig::from_env`]
//! - No-auth, bearer token and basic authentication via [`Authenticator`]
//! - Async HTTP transport with retries for 429 and 5xx responses and per-call deadlines
//! - One async method per API operation on [`DataProductExchange`]
//! - Cursor pagination via [`rest::Pager`]
//! - JSON Patch generation via [`rest::patch`]
//!
//! ## Quick Start
//!
//! ```rust
//! use data_product_exchange::{Authenticator, BearerToken, DataProductExchange, ServiceConfig};
//!
//! let config = ServiceConfig::builder()
//!     .authenticator(Authenticator::bearer(BearerToken::new("your-token").unwrap()))
//!     .max_retries(3)
//!     .build()
//!     .unwrap();
//!
//! let service = DataProductExchange::new(config).unwrap();
//! assert_eq!(service.config().max_retries(), 3);
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use data_product_exchange::rest::resources::v1::{
//!     ContainerReference, CreateDataProductVersionOptions, DataProductVersion,
//!     UpdateDataProductVersionOptions,
//! };
//!
//! let options = CreateDataProductVersionOptions::new(ContainerReference::catalog("cat-1"))
//!     .name("Sales by region")
//!     .header("X-Correlation-Id", "abc");
//! let created = service.create_data_product_version(&options).await?;
//! let id = created.result().and_then(|v| v.id.clone()).unwrap_or_default();
//!
//! let changes = DataProductVersion {
//!     description: Some("Quarterly figures".to_string()),
//!     ..Default::default()
//! };
//! service
//!     .update_data_product_version(&UpdateDataProductVersionOptions::new(id, changes.as_patch()?))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly to [`DataProductExchange::new`]
//! - **Fail-fast validation**: required options are checked before any request is sent
//! - **Thread-safe**: the client is `Clone + Send + Sync` and shares one connection pool
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Authenticator;
pub use config::{BearerToken, ServiceConfig, ServiceConfigBuilder, ServiceUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, SDK_NAME,
    SDK_VERSION,
};

// Re-export service types
pub use rest::{
    DataProductExchange, DataProductVersionsPager, DataProductsPager, DetailedResponse,
    JsonPatchOperation, JsonPatchOperationOp, ServiceError,
};
