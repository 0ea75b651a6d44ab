//! Path building infrastructure for service operations.
//!
//! Every operation of the service is described by a constant
//! [`ResourcePath`]: the HTTP method, the operation ID reported in the
//! `X-SDK-Analytics` header, and a URL template with `{name}` placeholders.
//!
//! # Example
//!
//! ```rust
//! use data_product_exchange::rest::{build_path, ResourcePath};
//! use data_product_exchange::HttpMethod;
//! use std::collections::HashMap;
//!
//! const DELIVER: ResourcePath = ResourcePath::new(
//!     HttpMethod::Post,
//!     "DeliverDataProductVersion",
//!     "data_product_versions/{id}/deliver",
//! );
//!
//! let mut params = HashMap::new();
//! params.insert("id", "v1");
//! assert_eq!(build_path(DELIVER.template, &params), "data_product_versions/v1/deliver");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::HttpMethod;

/// A path configuration for a single service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation ID (e.g., `GetDataProduct`).
    pub operation: &'static str,
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            template,
        }
    }

    /// Returns the value of the `X-SDK-Analytics` header for this operation.
    #[must_use]
    pub fn analytics_header(&self) -> String {
        format!(
            "service_name=data_product_exchange;service_version=V1;operation_id={}",
            self.operation
        )
    }
}

/// Builds a URL path from a template by interpolating parameters.
///
/// Values are percent-encoded as a single path segment. Placeholders that
/// are not in the map remain unchanged.
///
/// # Example
///
/// ```rust
/// use data_product_exchange::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("id", "a/b c");
///
/// assert_eq!(build_path("data_products/{id}", &params), "data_products/a%2Fb%20c");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, params: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in params {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

/// Operation paths of the v1 API.
pub(crate) mod v1 {
    use super::ResourcePath;
    use crate::clients::HttpMethod;

    pub const GET_INITIALIZE_STATUS: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        "GetInitializeStatus",
        "configuration/initialize/status",
    );
    pub const INITIALIZE: ResourcePath =
        ResourcePath::new(HttpMethod::Post, "Initialize", "configuration/initialize");
    pub const GET_DATA_PRODUCT: ResourcePath =
        ResourcePath::new(HttpMethod::Get, "GetDataProduct", "data_products/{id}");
    pub const LIST_DATA_PRODUCTS: ResourcePath =
        ResourcePath::new(HttpMethod::Get, "ListDataProducts", "data_products");
    pub const LIST_DATA_PRODUCT_VERSIONS: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        "ListDataProductVersions",
        "data_product_versions",
    );
    pub const CREATE_DATA_PRODUCT_VERSION: ResourcePath = ResourcePath::new(
        HttpMethod::Post,
        "CreateDataProductVersion",
        "data_product_versions",
    );
    pub const GET_DATA_PRODUCT_VERSION: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        "GetDataProductVersion",
        "data_product_versions/{id}",
    );
    pub const UPDATE_DATA_PRODUCT_VERSION: ResourcePath = ResourcePath::new(
        HttpMethod::Patch,
        "UpdateDataProductVersion",
        "data_product_versions/{id}",
    );
    pub const DELETE_DATA_PRODUCT_VERSION: ResourcePath = ResourcePath::new(
        HttpMethod::Delete,
        "DeleteDataProductVersion",
        "data_product_versions/{id}",
    );
    pub const DELIVER_DATA_PRODUCT_VERSION: ResourcePath = ResourcePath::new(
        HttpMethod::Post,
        "DeliverDataProductVersion",
        "data_product_versions/{id}/deliver",
    );
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};
