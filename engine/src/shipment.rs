//! Shipment record types.

use crate::schema::{self, DESTINATION, ESTIMATED_DELIVERY, STATUS, TRACKING_NUMBER};
use crate::{error::Result, ShipmentId, Timestamp, TrackingNumber};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status values the client offers. The store accepts any non-empty status.
pub const RECOGNIZED_STATUSES: [&str; 4] = ["Pending", "In Transit", "Delayed", "Delivered"];

/// A stored shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Store-generated identifier
    pub id: ShipmentId,
    /// External lookup key, not guaranteed unique
    pub tracking_number: TrackingNumber,
    pub destination: String,
    pub status: String,
    pub estimated_delivery: NaiveDate,
    /// When the store accepted the record
    pub created_at: Timestamp,
}

impl Shipment {
    /// Build a stored shipment from validated input.
    pub fn new(id: ShipmentId, input: NewShipment, created_at: Timestamp) -> Self {
        Self {
            id,
            tracking_number: input.tracking_number,
            destination: input.destination,
            status: input.status,
            estimated_delivery: input.estimated_delivery,
            created_at,
        }
    }

    /// Apply a partial update in place. `id` and `created_at` never change.
    pub fn apply(&mut self, update: &ShipmentUpdate) {
        if let Some(tracking_number) = &update.tracking_number {
            self.tracking_number.clone_from(tracking_number);
        }
        if let Some(destination) = &update.destination {
            self.destination.clone_from(destination);
        }
        if let Some(status) = &update.status {
            self.status.clone_from(status);
        }
        if let Some(estimated_delivery) = update.estimated_delivery {
            self.estimated_delivery = estimated_delivery;
        }
    }

    /// Whether the status is one of [`RECOGNIZED_STATUSES`].
    pub fn has_recognized_status(&self) -> bool {
        RECOGNIZED_STATUSES.contains(&self.status.as_str())
    }
}

/// Validated input for creating a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShipment {
    pub tracking_number: TrackingNumber,
    pub destination: String,
    pub status: String,
    pub estimated_delivery: NaiveDate,
}

impl NewShipment {
    pub fn new(
        tracking_number: impl Into<TrackingNumber>,
        destination: impl Into<String>,
        status: impl Into<String>,
        estimated_delivery: NaiveDate,
    ) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            destination: destination.into(),
            status: status.into(),
            estimated_delivery,
        }
    }

    /// Validate a create request body.
    ///
    /// Fields are checked in schema order and the first failure is returned.
    /// Keys outside the schema, including `id` and `createdAt`, are ignored.
    pub fn from_json(payload: &serde_json::Value) -> Result<Self> {
        let obj = schema::as_object(payload)?;

        Ok(Self {
            tracking_number: TRACKING_NUMBER.require_text(obj)?,
            destination: DESTINATION.require_text(obj)?,
            status: STATUS.require_text(obj)?,
            estimated_delivery: ESTIMATED_DELIVERY.require_date(obj)?,
        })
    }
}

/// A partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<TrackingNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
}

impl ShipmentUpdate {
    /// Validate an update request body.
    ///
    /// Every schema field is optional, but a field that is present must be
    /// valid and may not be `null`.
    pub fn from_json(payload: &serde_json::Value) -> Result<Self> {
        let obj = schema::as_object(payload)?;

        Ok(Self {
            tracking_number: TRACKING_NUMBER.optional_text(obj)?,
            destination: DESTINATION.optional_text(obj)?,
            status: STATUS.optional_text(obj)?,
            estimated_delivery: ESTIMATED_DELIVERY.optional_date(obj)?,
        })
    }

    /// Builder-style status change.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// True when applying this update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// JSON names of the fields this update sets, in schema order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let set = [
            self.tracking_number.is_some(),
            self.destination.is_some(),
            self.status.is_some(),
            self.estimated_delivery.is_some(),
        ];

        schema::SHIPMENT_FIELDS
            .iter()
            .zip(set)
            .filter_map(|(field, is_set)| is_set.then_some(field.name))
            .collect()
    }
}
