//! Data product version resources.
//!
//! A data product version is a versioned snapshot of a data product. A
//! version starts as a `draft`, becomes `available` when published and
//! `retired` when withdrawn. Only drafts can be deleted.
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::rest::resources::v1::{
//!     ContainerReference, CreateDataProductVersionOptions, DataProductVersion,
//!     UpdateDataProductVersionOptions,
//! };
//!
//! // Create a draft
//! let options = CreateDataProductVersionOptions::new(ContainerReference::catalog("cat-1"))
//!     .name("Sales by region");
//! let draft = service.create_data_product_version(&options).await?.into_result();
//!
//! // Update it with a JSON Patch built from a partial version
//! let changes = DataProductVersion {
//!     description: Some("Quarterly figures".to_string()),
//!     ..Default::default()
//! };
//! let options = UpdateDataProductVersionOptions::new("version-id", changes.as_patch()?);
//! service.update_data_product_version(&options).await?;
//! ```

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    AssetPartReference, AssetReference, ContainerReference, DeliveryMethod, Domain, FirstPage,
    NextPage, UseCase,
};
use super::data_product::DataProductIdentity;
use crate::rest::errors::{require_non_empty, ServiceError};
use crate::rest::patch::{as_patch, JsonPatchOperation};

/// The lifecycle state of a data product version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataProductVersionState {
    /// Editable; not visible to consumers.
    Draft,
    /// Published.
    Available,
    /// Withdrawn.
    Retired,
}

impl DataProductVersionState {
    /// Returns `true` if the version is a draft.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

/// The kind of content a data product version offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataProductVersionType {
    /// Data.
    Data,
    /// Code.
    Code,
}

/// A deliverable part of a data product version.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductPart {
    /// The asset represented by this part.
    pub asset: AssetPartReference,

    /// The revision number of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,

    /// When the part was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Delivery methods applicable to the part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_methods: Option<Vec<DeliveryMethod>>,
}

/// A data product version.
///
/// Field order is significant: [`as_patch`](Self::as_patch) emits one
/// operation per set field, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductVersion {
    /// The data product version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The state of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DataProductVersionState>,

    /// The data product this is a version of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product: Option<DataProductIdentity>,

    /// The name of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The description of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The identifier of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The asset backing the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetReference>,

    /// Tags on the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Business use cases related to the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<UseCase>>,

    /// The business domain of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,

    /// The kinds of content offered.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub version_type: Option<Vec<DataProductVersionType>>,

    /// The outgoing parts of this data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts_out: Option<Vec<DataProductPart>>,

    /// The user who published the version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_by: Option<String>,

    /// When the version was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The user who created the version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// When the version was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DataProductVersion {
    /// Converts the set fields into JSON Patch `add` operations.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Serialize`] if the version cannot be serialized.
    pub fn as_patch(&self) -> Result<Vec<JsonPatchOperation>, ServiceError> {
        as_patch(self)
    }
}

/// A data product version as listed in a collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductVersionSummary {
    /// The data product version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The state of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DataProductVersionState>,

    /// The data product this is a version of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product: Option<DataProductIdentity>,

    /// The name of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The description of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The identifier of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The asset backing the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetReference>,
}

/// A page of data product versions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataProductVersionCollection {
    /// The page size that was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Link to the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<FirstPage>,

    /// Link to the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,

    /// The data product versions on this page.
    #[serde(default)]
    pub data_product_versions: Vec<DataProductVersionSummary>,
}

/// Options for the `ListDataProductVersions` operation.
///
/// Serializes to the query string.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ListDataProductVersionsOptions {
    /// Only versions in this catalog.
    #[serde(rename = "asset.container.id", skip_serializing_if = "Option::is_none")]
    pub asset_container_id: Option<String>,

    /// Only versions of this data product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product: Option<String>,

    /// Only versions in this state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DataProductVersionState>,

    /// Only versions with this version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

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

impl ListDataProductVersionsOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by catalog.
    #[must_use]
    pub fn asset_container_id(mut self, asset_container_id: impl Into<String>) -> Self {
        self.asset_container_id = Some(asset_container_id.into());
        self
    }

    /// Filters by data product.
    #[must_use]
    pub fn data_product(mut self, data_product: impl Into<String>) -> Self {
        self.data_product = Some(data_product.into());
        self
    }

    /// Filters by state.
    #[must_use]
    pub const fn state(mut self, state: DataProductVersionState) -> Self {
        self.state = Some(state);
        self
    }

    /// Filters by version number.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
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

/// Options for the `CreateDataProductVersion` operation.
///
/// Serializes to the request body; unset fields are omitted.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CreateDataProductVersionOptions {
    /// The catalog to create the version in. Required.
    pub container: ContainerReference,

    /// The data product version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The initial state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DataProductVersionState>,

    /// The data product to add a version to. A new data product is created when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product: Option<DataProductIdentity>,

    /// The name of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The description of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags on the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Business use cases related to the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<UseCase>>,

    /// The business domain of the data product version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,

    /// The kinds of content offered.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub version_type: Option<Vec<DataProductVersionType>>,

    /// The outgoing parts of the version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts_out: Option<Vec<DataProductPart>>,

    /// Additional request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl CreateDataProductVersionOptions {
    /// Creates options for a version in the given catalog.
    #[must_use]
    pub fn new(container: ContainerReference) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    /// Sets the version number.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the initial state.
    #[must_use]
    pub const fn state(mut self, state: DataProductVersionState) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets the data product to add a version to.
    #[must_use]
    pub fn data_product(mut self, data_product: DataProductIdentity) -> Self {
        self.data_product = Some(data_product);
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets the use cases.
    #[must_use]
    pub fn use_cases(mut self, use_cases: Vec<UseCase>) -> Self {
        self.use_cases = Some(use_cases);
        self
    }

    /// Sets the domain.
    #[must_use]
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the content types.
    #[must_use]
    pub fn version_type(mut self, version_type: Vec<DataProductVersionType>) -> Self {
        self.version_type = Some(version_type);
        self
    }

    /// Sets the outgoing parts.
    #[must_use]
    pub fn parts_out(mut self, parts_out: Vec<DataProductPart>) -> Self {
        self.parts_out = Some(parts_out);
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

    /// Checks that the container is set.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if the container ID is empty.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("CreateDataProductVersion", "container", &self.container.id)
    }
}

/// Options for the `GetDataProductVersion` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDataProductVersionOptions {
    /// Data product version ID. Required.
    pub id: String,

    /// Additional request headers.
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    pub timeout: Option<Duration>,
}

impl GetDataProductVersionOptions {
    /// Creates options for the version with the given ID.
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
        require_non_empty("GetDataProductVersion", "id", &self.id)
    }
}

/// Options for the `UpdateDataProductVersion` operation.
///
/// The patch instructions are sent as the request body verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDataProductVersionOptions {
    /// Data product version ID. Required.
    pub id: String,

    /// The RFC 6902 patch to apply. Required, non-empty.
    pub json_patch_instructions: Vec<JsonPatchOperation>,

    /// Additional request headers.
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    pub timeout: Option<Duration>,
}

impl UpdateDataProductVersionOptions {
    /// Creates options applying `json_patch_instructions` to the version with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>, json_patch_instructions: Vec<JsonPatchOperation>) -> Self {
        Self {
            id: id.into(),
            json_patch_instructions,
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

    /// Checks that the ID and the patch are set.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if `id` or the patch is empty.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("UpdateDataProductVersion", "id", &self.id)?;
        if self.json_patch_instructions.is_empty() {
            return Err(ServiceError::MissingRequiredParameter {
                operation: "UpdateDataProductVersion",
                field: "jsonPatchInstructions",
            });
        }
        Ok(())
    }
}

/// Options for the `DeleteDataProductVersion` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDataProductVersionOptions {
    /// Data product version ID. Required.
    pub id: String,

    /// Additional request headers.
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    pub timeout: Option<Duration>,
}

impl DeleteDataProductVersionOptions {
    /// Creates options for the version with the given ID.
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
        require_non_empty("DeleteDataProductVersion", "id", &self.id)
    }
}
