//! Integration tests for the PostgreSQL store.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL environment variable before running; they are skipped
//! otherwise.

use chrono::NaiveDate;
use shiptrack_engine::{NewShipment, ShipmentUpdate};
use shiptrack_server::db::{self, PgShipmentStore};
use shiptrack_server::store::ShipmentStore;
use uuid::Uuid;

async fn connect() -> Option<PgShipmentStore> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let pool = db::create_pool(&url, 2).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    Some(PgShipmentStore::new(pool))
}

/// Tracking number no other test run will collide with.
fn unique_tracking_number() -> String {
    format!("TEST-{}", Uuid::new_v4())
}

fn input(tracking_number: &str) -> NewShipment {
    NewShipment::new(
        tracking_number,
        "Paris",
        "Pending",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

#[tokio::test]
async fn postgres_lifecycle() {
    let Some(store) = connect().await else { return };
    let tracking_number = unique_tracking_number();

    let created = store.create(input(&tracking_number)).await.unwrap();
    assert_eq!(created.tracking_number, tracking_number);
    assert_eq!(
        created.estimated_delivery,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );

    let found = store.find(&tracking_number).await.unwrap().unwrap();
    assert_eq!(found, created);

    let updated = store
        .update(
            &tracking_number,
            ShipmentUpdate::default().with_status("Delivered"),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "Delivered");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.destination, "Paris");

    let deleted = store.delete(&tracking_number).await.unwrap().unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(store.find(&tracking_number).await.unwrap().is_none());
    assert!(store.delete(&tracking_number).await.unwrap().is_none());
}

#[tokio::test]
async fn postgres_list_and_duplicates() {
    let Some(store) = connect().await else { return };
    let tracking_number = unique_tracking_number();

    let first = store.create(input(&tracking_number)).await.unwrap();
    let second = store.create(input(&tracking_number)).await.unwrap();

    let listed: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.tracking_number == tracking_number)
        .collect();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    let found = store.find(&tracking_number).await.unwrap().unwrap();
    assert_eq!(found.id, first.id);

    sqlx::query("DELETE FROM shipments WHERE tracking_number = $1")
        .bind(&tracking_number)
        .execute(store.pool())
        .await
        .unwrap();
}

#[tokio::test]
async fn postgres_nul_tracking_number_is_a_miss() {
    let Some(store) = connect().await else { return };
    let tracking_number = "TRK\0 1";

    assert!(store.find(tracking_number).await.unwrap().is_none());
    assert!(store
        .update(tracking_number, ShipmentUpdate::default().with_status("Delivered"))
        .await
        .unwrap()
        .is_none());
    assert!(store.delete(tracking_number).await.unwrap().is_none());
}
