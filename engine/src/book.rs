//! ShipmentBook - the in-memory shipment collection.
//!
//! Shipments are kept in insertion order. Lookups by tracking number act on
//! the first (oldest) match, since tracking numbers are not unique.

use crate::{Shipment, ShipmentUpdate};

/// An ordered in-memory collection of shipments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentBook {
    shipments: Vec<Shipment>,
}

impl ShipmentBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self {
            shipments: Vec::new(),
        }
    }

    /// Append a shipment.
    pub fn insert(&mut self, shipment: Shipment) {
        self.shipments.push(shipment);
    }

    /// All shipments, most recently created first.
    ///
    /// Shipments created at the same instant come back in reverse insertion
    /// order.
    pub fn list(&self) -> Vec<&Shipment> {
        let mut shipments: Vec<&Shipment> = self.shipments.iter().rev().collect();
        // Stable sort keeps the reversed insertion order for ties.
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    /// First shipment with the given tracking number.
    pub fn find(&self, tracking_number: &str) -> Option<&Shipment> {
        self.shipments
            .iter()
            .find(|s| s.tracking_number == tracking_number)
    }

    /// Apply an update to the first matching shipment.
    pub fn update(&mut self, tracking_number: &str, update: &ShipmentUpdate) -> Option<&Shipment> {
        let shipment = self
            .shipments
            .iter_mut()
            .find(|s| s.tracking_number == tracking_number)?;
        shipment.apply(update);
        Some(&*shipment)
    }

    /// Remove the first matching shipment and return it.
    pub fn remove(&mut self, tracking_number: &str) -> Option<Shipment> {
        let index = self
            .shipments
            .iter()
            .position(|s| s.tracking_number == tracking_number)?;
        Some(self.shipments.remove(index))
    }

    /// Number of shipments.
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    /// Check if the book holds no shipments.
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}
