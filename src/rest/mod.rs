//! Data Product Exchange API client.
//!
//! This module provides:
//!
//! - **[`DataProductExchange`]**: one async method per API operation
//! - **[`DetailedResponse<T>`]**: decoded result plus status code and headers
//! - **[`Pager`]**: cursor pagination over the list operations
//! - **[`patch`]**: JSON Patch generation for partial updates
//! - **[`ServiceError`]**: error type of every operation
//! - **[`resources`]**: version-specific models and options
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::rest::{DataProductExchange, DataProductsPager};
//! use data_product_exchange::rest::resources::v1::{
//!     ContainerReference, CreateDataProductVersionOptions, ListDataProductsOptions,
//! };
//!
//! let service = DataProductExchange::from_env()?;
//!
//! // Create a draft version
//! let options = CreateDataProductVersionOptions::new(ContainerReference::catalog("cat-1"))
//!     .name("My Data Product");
//! let created = service.create_data_product_version(&options).await?;
//! assert_eq!(created.status_code(), 201);
//!
//! // Page through all data products
//! let mut pager = DataProductsPager::new(&service, ListDataProductsOptions::new().limit(10))?;
//! let all = pager.get_all().await?;
//! ```

mod errors;
mod pager;
pub mod patch;
mod path;
pub mod resources;
mod response;
mod service;

pub use errors::ServiceError;
pub use pager::{DataProductVersionsPager, DataProductsPager, Page, PagedOptions, Pager};
pub use patch::{JsonPatchOperation, JsonPatchOperationOp};
pub use path::{build_path, ResourcePath};
pub use response::DetailedResponse;
pub use service::DataProductExchange;
