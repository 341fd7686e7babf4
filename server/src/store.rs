//! Shipment store abstraction.
//!
//! Handlers talk to storage only through [`ShipmentStore`], so the backend is
//! chosen once at startup and injected through the application state.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use shiptrack_engine::{NewShipment, Shipment, ShipmentBook, ShipmentId, ShipmentUpdate, Timestamp};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence for shipment records.
///
/// Tracking numbers are not unique. `find`, `update` and `delete` act on the
/// oldest record carrying the tracking number.
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    /// Insert a new shipment with a fresh id and creation time.
    async fn create(&self, input: NewShipment) -> StoreResult<Shipment>;

    /// All shipments, most recently created first.
    async fn list(&self) -> StoreResult<Vec<Shipment>>;

    /// First shipment with the tracking number.
    async fn find(&self, tracking_number: &str) -> StoreResult<Option<Shipment>>;

    /// Apply an update to the first match and return the updated record.
    async fn update(
        &self,
        tracking_number: &str,
        update: ShipmentUpdate,
    ) -> StoreResult<Option<Shipment>>;

    /// Remove the first match and return the removed record.
    async fn delete(&self, tracking_number: &str) -> StoreResult<Option<Shipment>>;
}

/// Identity assigned to a shipment on creation.
///
/// Timestamps are truncated to milliseconds so every backend reports the
/// same value it stored.
pub fn new_identity() -> (ShipmentId, Timestamp) {
    (Uuid::new_v4(), Utc::now().trunc_subsecs(3))
}

/// In-process store backed by a [`ShipmentBook`].
#[derive(Debug, Default)]
pub struct MemoryShipmentStore {
    book: RwLock<ShipmentBook>,
}

impl MemoryShipmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store ready to be shared.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl ShipmentStore for MemoryShipmentStore {
    async fn create(&self, input: NewShipment) -> StoreResult<Shipment> {
        let (id, created_at) = new_identity();
        let shipment = Shipment::new(id, input, created_at);
        self.book.write().await.insert(shipment.clone());
        Ok(shipment)
    }

    async fn list(&self) -> StoreResult<Vec<Shipment>> {
        let book = self.book.read().await;
        Ok(book.list().into_iter().cloned().collect())
    }

    async fn find(&self, tracking_number: &str) -> StoreResult<Option<Shipment>> {
        Ok(self.book.read().await.find(tracking_number).cloned())
    }

    async fn update(
        &self,
        tracking_number: &str,
        update: ShipmentUpdate,
    ) -> StoreResult<Option<Shipment>> {
        let mut book = self.book.write().await;
        Ok(book.update(tracking_number, &update).cloned())
    }

    async fn delete(&self, tracking_number: &str) -> StoreResult<Option<Shipment>> {
        Ok(self.book.write().await.remove(tracking_number))
    }
}
