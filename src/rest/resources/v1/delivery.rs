//! Delivery of data product versions.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rest::errors::{require_non_empty, ServiceError};

/// The status of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Delivery has not started.
    NotStarted,
    /// The request was received.
    Received,
    /// The data was delivered.
    Delivered,
    /// Delivery finished successfully.
    Succeeded,
    /// Delivery failed.
    Failed,
}

/// The state of a delivery request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryResource {
    /// Status of the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,

    /// Link to monitor the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// An item of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemReference {
    /// The ID of the item.
    pub id: String,
}

/// The order a delivery belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderReference {
    /// The ID of the order.
    pub id: String,

    /// The items of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemReference>>,
}

/// Options for the `DeliverDataProductVersion` operation.
///
/// Serializes to the request body (`{}` when no order is given).
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DeliverDataProductVersionOptions {
    /// Data product version ID. Required.
    #[serde(skip)]
    pub id: String,

    /// The order the delivery belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderReference>,

    /// Additional request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,

    /// Deadline for the call.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl DeliverDataProductVersionOptions {
    /// Creates options delivering the version with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the order.
    #[must_use]
    pub fn order(mut self, order: OrderReference) -> Self {
        self.order = Some(order);
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

    /// Checks that the ID is set.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingRequiredParameter`] if `id` is empty.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("DeliverDataProductVersion", "id", &self.id)
    }
}
