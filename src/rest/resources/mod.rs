//! Version-specific models of the Data Product Exchange API.
//!
//! ```text
//! resources/
//!   mod.rs    <- This file (re-exports latest version)
//!   v1/
//!     mod.rs  <- Version-specific models and options
//! ```
//!
//! The latest version is re-exported at this module level:
//!
//! ```rust,ignore
//! use data_product_exchange::rest::resources::DataProductVersion;
//!
//! // Or explicitly:
//! use data_product_exchange::rest::resources::v1::DataProductVersion;
//! ```

pub mod v1;

pub use v1::*;
