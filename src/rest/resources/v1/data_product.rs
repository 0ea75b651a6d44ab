//! Data product resources.
//!
//! A data product groups the versions that are published for it. Data
//! products are created implicitly when their first version is created.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::common::{ContainerReference, FirstPage, NextPage};
use crate::rest::errors::{require_non_empty, ServiceError};

/// A data product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProduct {
    /// Data product identifier.
    pub id: String,

    /// The catalog the data product lives in.
    pub container: ContainerReference,

    /// Data product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A reference to a data product release.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductReleaseIdentity {
    /// Release identifier.
    pub id: String,
}

/// Identifies a data product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductIdentity {
    /// Data product identifier.
    pub id: String,

    /// The release of the data product, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<DataProductReleaseIdentity>,
}

impl DataProductIdentity {
    /// Creates an identity for the data product with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            release: None,
        }
    }
}

/// A page of data products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductCollection {
    /// The page size that was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Link to the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<FirstPage>,

    /// Link to the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,

    /// The data products on this page.
    #[serde(default)]
    pub data_products: Vec<DataProduct>,
}

/// Options for the `GetDataProduct` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDataProductOptions {
    /// Data product ID. Required.
    pub id: String,

    /// Additional request headers.
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    pub timeout: Option<Duration>,
}

impl GetDataProductOptions {
    /// Creates options for the data product with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the deadline for the call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Checks that the ID is set.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if `id` is empty.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("GetDataProduct", "id", &self.id)
    }
}

/// Options for the `ListDataProducts` operation.
///
/// Serializes to the query string.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ListDataProductsOptions {
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Cursor of the page to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Additional request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl ListDataProductsOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page cursor.
    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the deadline for the call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_product_collection_deserialization() {
        let collection: DataProductCollection = serde_json::from_value(json!({
            "limit": 2,
            "first": {"href": "https://example.com/data_products?limit=2"},
            "next": {"href": "https://example.com/data_products?limit=2&start=g1", "start": "g1"},
            "data_products": [
                {"id": "dp-1", "container": {"id": "cat-1", "type": "catalog"}, "name": "Sample"},
                {"id": "dp-2", "container": {"id": "cat-1"}}
            ]
        }))
        .unwrap();

        assert_eq!(collection.limit, Some(2));
        assert_eq!(collection.next.unwrap().start, "g1");
        assert_eq!(collection.data_products.len(), 2);
        assert_eq!(collection.data_products[0].name.as_deref(), Some("Sample"));
        assert!(collection.data_products[1].name.is_none());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let collection: DataProductCollection =
            serde_json::from_value(json!({"limit": 2, "data_products": []})).unwrap();
        assert!(collection.next.is_none());
    }

    #[test]
    fn test_get_data_product_options_validation() {
        assert!(GetDataProductOptions::new("dp-1").validate().is_ok());
        assert!(matches!(
            GetDataProductOptions::new("").validate(),
            Err(ServiceError::MissingRequiredParameter {
                operation: "GetDataProduct",
                field: "id"
            })
        ));
    }

    #[test]
    fn test_list_options_omit_headers_and_unset_fields() {
        let options = ListDataProductsOptions::new()
            .limit(10)
            .header("X-Test", "1")
            .timeout(Duration::from_secs(1));
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({"limit": 10}));
    }
}
