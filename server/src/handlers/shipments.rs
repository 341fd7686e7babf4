//! Shipment handlers - validate input and drive the store.

use crate::error::{AppError, Result};
use crate::store::ShipmentStore;
use shiptrack_engine::{NewShipment, Shipment, ShipmentUpdate};

/// Message returned when no shipment carries the tracking number.
pub const SHIPMENT_NOT_FOUND: &str = "Shipment not found";

/// Validate a create body and store the new shipment.
pub async fn create_shipment(
    store: &dyn ShipmentStore,
    body: &serde_json::Value,
) -> Result<Shipment> {
    let input = NewShipment::from_json(body)?;
    let shipment = store.create(input).await?;

    tracing::debug!(
        tracking_number = %shipment.tracking_number,
        id = %shipment.id,
        "Created shipment"
    );
    note_unrecognized_status(&shipment);

    Ok(shipment)
}

/// All shipments, newest first.
pub async fn list_shipments(store: &dyn ShipmentStore) -> Result<Vec<Shipment>> {
    Ok(store.list().await?)
}

/// Look up the first shipment with the tracking number.
pub async fn get_shipment(store: &dyn ShipmentStore, tracking_number: &str) -> Result<Shipment> {
    store
        .find(tracking_number)
        .await?
        .ok_or_else(|| AppError::NotFound(SHIPMENT_NOT_FOUND.to_string()))
}

/// Validate an update body and apply it to the first matching shipment.
///
/// The body is validated before the lookup, so malformed input is rejected
/// even when the tracking number is unknown.
pub async fn update_shipment(
    store: &dyn ShipmentStore,
    tracking_number: &str,
    body: &serde_json::Value,
) -> Result<Shipment> {
    let update = ShipmentUpdate::from_json(body)?;
    let fields = update.changed_fields();

    let shipment = store
        .update(tracking_number, update)
        .await?
        .ok_or_else(|| AppError::NotFound(SHIPMENT_NOT_FOUND.to_string()))?;

    tracing::debug!(tracking_number, ?fields, "Updated shipment");
    note_unrecognized_status(&shipment);

    Ok(shipment)
}

/// Remove the first shipment with the tracking number.
pub async fn delete_shipment(
    store: &dyn ShipmentStore,
    tracking_number: &str,
) -> Result<Shipment> {
    let shipment = store
        .delete(tracking_number)
        .await?
        .ok_or_else(|| AppError::NotFound(SHIPMENT_NOT_FOUND.to_string()))?;

    tracing::debug!(tracking_number, id = %shipment.id, "Deleted shipment");

    Ok(shipment)
}

fn note_unrecognized_status(shipment: &Shipment) {
    if !shipment.has_recognized_status() {
        tracing::debug!(
            tracking_number = %shipment.tracking_number,
            status = %shipment.status,
            "Shipment has an unrecognized status"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryShipmentStore;
    use serde_json::json;

    fn trk1() -> serde_json::Value {
        json!({
            "trackingNumber": "TRK1",
            "destination": "Paris",
            "status": "Pending",
            "estimatedDelivery": "2024-01-01",
        })
    }

    #[tokio::test]
    async fn create_then_get() {
        let store = MemoryShipmentStore::new();

        let created = create_shipment(&store, &trk1()).await.unwrap();
        let fetched = get_shipment(&store, "TRK1").await.unwrap();

        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn invalid_create_persists_nothing() {
        let store = MemoryShipmentStore::new();

        let result = create_shipment(&store, &json!({"trackingNumber": "TRK1"})).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(list_shipments(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_update_checked_before_lookup() {
        let store = MemoryShipmentStore::new();

        let result = update_shipment(&store, "NOPE", &json!({"estimatedDelivery": "soon"})).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = update_shipment(&store, "NOPE", &json!({"status": "Delivered"})).await;
        assert!(matches!(result, Err(AppError::NotFound(m)) if m == SHIPMENT_NOT_FOUND));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = MemoryShipmentStore::new();
        create_shipment(&store, &trk1()).await.unwrap();

        delete_shipment(&store, "TRK1").await.unwrap();

        assert!(matches!(
            get_shipment(&store, "TRK1").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_shipment(&store, "TRK1").await,
            Err(AppError::NotFound(_))
        ));
    }
}
