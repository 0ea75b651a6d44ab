//! Models and operation options of the v1 Data Product Exchange API.
//!
//! Models decode responses; every optional field is an `Option` and is
//! omitted (never `null`) when serialized. Options structs describe one call
//! each: the fields that become path, query or body parameters, plus
//! per-call `headers` and `timeout`.

mod common;
mod data_product;
mod data_product_version;
mod delivery;
mod initialize;

pub use common::{
    AssetPartReference, AssetReference, ContainerReference, ContainerType, DeliveryMethod,
    Domain, ErrorModel, ErrorTargetModel, FirstPage, NextPage, UseCase,
};
pub use data_product::{
    DataProduct, DataProductCollection, DataProductIdentity, DataProductReleaseIdentity,
    GetDataProductOptions, ListDataProductsOptions,
};
pub use data_product_version::{
    CreateDataProductVersionOptions, DataProductPart, DataProductVersion,
    DataProductVersionCollection, DataProductVersionState, DataProductVersionSummary,
    DataProductVersionType, DeleteDataProductVersionOptions, GetDataProductVersionOptions,
    ListDataProductVersionsOptions, UpdateDataProductVersionOptions,
};
pub use delivery::{
    DeliverDataProductVersionOptions, DeliveryResource, DeliveryStatus, ItemReference,
    OrderReference,
};
pub use initialize::{
    GetInitializeStatusOptions, InitializeOptions, InitializeResource, InitializeStatus,
    InitializedOption,
};
