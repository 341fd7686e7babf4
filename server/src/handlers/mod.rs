//! Request handlers for shipment operations.

mod shipments;

pub use shipments::*;
