//! Catalog initialization resources.
//!
//! Initialization sets up the default resources of a catalog (delivery
//! methods, sample data products, domains). It runs asynchronously on the
//! server; [`InitializeResource`] reports its progress.
//!
//! # Example
//!
//! ```rust,ignore
//! use data_product_exchange::rest::resources::v1::{ContainerReference, InitializeOptions};
//!
//! let options = InitializeOptions::new()
//!     .container(ContainerReference::catalog("cat-1"))
//!     .include(vec!["delivery_methods".to_string()]);
//! let response = service.initialize(&options).await?;
//! assert_eq!(response.status_code(), 202);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ContainerReference, ErrorModel};

/// The status of a catalog initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitializeStatus {
    /// Initialization has not been requested.
    NotStarted,
    /// Initialization is running.
    InProgress,
    /// Initialization finished successfully.
    Succeeded,
    /// Initialization failed; see [`InitializeResource::errors`].
    Failed,
}

impl InitializeStatus {
    /// Returns `true` once initialization has stopped running.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// An option that was initialized, with its version.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InitializedOption {
    /// The name of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The version of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// The state of a catalog initialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InitializeResource {
    /// The catalog being initialized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerReference>,

    /// Link to monitor the status of the initialize operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Status of the initialize operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InitializeStatus>,

    /// The ID to use when tracing the operation in service logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    /// Errors encountered during initialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorModel>>,

    /// When the last initialization started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_started_at: Option<DateTime<Utc>>,

    /// When the last initialization finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_finished_at: Option<DateTime<Utc>>,

    /// The options that were initialized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialized_options: Option<Vec<InitializedOption>>,
}

/// Options for the `GetInitializeStatus` operation.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetInitializeStatusOptions {
    /// The catalog to report on. The default catalog is used when unset.
    #[serde(rename = "container.id", skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,

    /// Additional request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl GetInitializeStatusOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog to report on.
    #[must_use]
    pub fn container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = Some(container_id.into());
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

/// Options for the `Initialize` operation.
///
/// Serializes to the request body.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct InitializeOptions {
    /// The catalog to initialize. The default catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerReference>,

    /// The resources to initialize (e.g., `delivery_methods`, `data_product_samples`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Additional request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl InitializeOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog to initialize.
    #[must_use]
    pub fn container(mut self, container: ContainerReference) -> Self {
        self.container = Some(container);
        self
    }

    /// Sets the resources to initialize.
    #[must_use]
    pub fn include(mut self, include: Vec<String>) -> Self {
        self.include = Some(include);
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
