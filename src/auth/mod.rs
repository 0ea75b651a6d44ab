//! Authentication types for the Data Product Exchange SDK.
//!
//! The SDK supports three authentication schemes, selected through
//! [`Authenticator`]:
//!
//! - **No authentication**: for local or proxied deployments
//! - **Bearer token**: a pre-obtained access token
//! - **Basic**: username and password
//!
//! Token acquisition (IAM or OAuth exchanges) is outside the SDK; obtain a
//! token separately and pass it as a [`BearerToken`](crate::BearerToken).
//!
//! # Example
//!
//! ```rust
//! use data_product_exchange::{Authenticator, BearerToken, ServiceConfig};
//!
//! let config = ServiceConfig::builder()
//!     .authenticator(Authenticator::bearer(BearerToken::new("token").unwrap()))
//!     .build()
//!     .unwrap();
//! ```

mod authenticator;

pub use authenticator::Authenticator;
