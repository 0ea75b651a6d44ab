//! Reference types shared by several v1 resources.
//!
//! These are not resources themselves; they appear nested inside data
//! products, versions, initialization status and error bodies.

use serde::{Deserialize, Serialize};

/// The type of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    /// A catalog.
    Catalog,
}

/// Identifies a catalog container.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContainerReference {
    /// Container identifier.
    pub id: String,

    /// Container type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerType>,
}

impl ContainerReference {
    /// Creates a reference to the container with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            container_type: None,
        }
    }

    /// Creates a reference to the catalog with the given ID.
    #[must_use]
    pub fn catalog(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            container_type: Some(ContainerType::Catalog),
        }
    }
}

/// A reference to an asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AssetReference {
    /// The unique identifier of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The container the asset lives in.
    pub container: ContainerReference,
}

/// A reference to the asset of a data product part.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AssetPartReference {
    /// The unique identifier of the asset.
    pub id: String,

    /// The container the asset lives in.
    pub container: ContainerReference,

    /// The type of the asset.
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// A delivery method applicable to a data product part.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryMethod {
    /// The ID of the delivery method.
    pub id: String,

    /// The container the delivery method lives in.
    pub container: ContainerReference,
}

/// The business domain of a data product version.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Domain {
    /// The ID of the domain.
    pub id: String,

    /// The display name of the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The container the domain lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerReference>,
}

/// A business use case of a data product version.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UseCase {
    /// The ID of the use case.
    pub id: String,

    /// The display name of the use case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The container the use case lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerReference>,
}

/// The element an error refers to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ErrorTargetModel {
    /// The kind of target (`field`, `parameter` or `header`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,

    /// The name of the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A structured error entry.
///
/// Used in error response bodies (`{"errors": [...]}`) and in
/// [`InitializeResource::errors`](super::InitializeResource::errors).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ErrorModel {
    /// A machine readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The element the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ErrorTargetModel>,

    /// A human readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// A link to more information about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Link to the first page of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FirstPage {
    /// Link to the first page of results.
    pub href: String,
}

/// Link to the next page of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NextPage {
    /// Link to the next page of results.
    pub href: String,

    /// Opaque cursor for the next page.
    pub start: String,
}
