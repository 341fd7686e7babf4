//! # Shiptrack Engine
//!
//! Shipment record model and validation for the Shiptrack record keeper.
//!
//! This crate owns everything about a shipment that does not depend on how
//! it is stored or served: the record type, the field schema that turns raw
//! JSON request bodies into typed inputs, partial updates, and an in-memory
//! [`ShipmentBook`] that implements the lookup rules every store follows.
//!
//! ## Design Principles
//!
//! - **No IO**: identifiers and timestamps are passed in by the caller
//! - **Schema first**: every caller-supplied field goes through [`schema`]
//! - **Free-form status**: [`RECOGNIZED_STATUSES`] is advisory, never enforced
//!
//! ## Core Concepts
//!
//! ### Shipments
//!
//! A [`Shipment`] has:
//! - A store-generated id and creation timestamp (never caller supplied)
//! - A tracking number used as the external lookup key (not unique)
//! - A destination, a status and an estimated delivery date
//!
//! ### Inputs
//!
//! - [`NewShipment`] - all four caller fields, validated for creation
//! - [`ShipmentUpdate`] - any subset of the caller fields
//!
//! ## Quick Start
//!
//! ```rust
//! use shiptrack_engine::{NewShipment, Shipment, ShipmentBook, ShipmentUpdate};
//! use chrono::{TimeZone, Utc};
//! use serde_json::json;
//! use uuid::Uuid;
//!
//! // 1. Validate a request body
//! let new = NewShipment::from_json(&json!({
//!     "trackingNumber": "TRK1",
//!     "destination": "Paris",
//!     "status": "Pending",
//!     "estimatedDelivery": "2024-01-01",
//! }))
//! .unwrap();
//!
//! // 2. Store it
//! let mut book = ShipmentBook::new();
//! let created_at = Utc.with_ymd_and_hms(2023, 12, 1, 9, 0, 0).unwrap();
//! book.insert(Shipment::new(Uuid::new_v4(), new, created_at));
//!
//! // 3. Update by tracking number
//! let update = ShipmentUpdate::from_json(&json!({"status": "Delivered"})).unwrap();
//! let updated = book.update("TRK1", &update).unwrap();
//! assert_eq!(updated.status, "Delivered");
//! ```

pub mod book;
pub mod error;
pub mod schema;
pub mod shipment;

// Re-export main types at crate root
pub use book::ShipmentBook;
pub use error::Error;
pub use schema::{FieldDef, FieldType, SHIPMENT_FIELDS};
pub use shipment::{NewShipment, Shipment, ShipmentUpdate, RECOGNIZED_STATUSES};

/// Type aliases for clarity
pub type ShipmentId = uuid::Uuid;
pub type TrackingNumber = String;
pub type Timestamp = chrono::DateTime<chrono::Utc>;
