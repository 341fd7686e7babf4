//! Database operations for the shipments table.

use crate::db::Pool;
use crate::store::{new_identity, ShipmentStore, StoreResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use shiptrack_engine::{NewShipment, Shipment, ShipmentUpdate};
use sqlx::Row;
use uuid::Uuid;

/// A stored shipment row from the database.
#[derive(Debug)]
pub struct ShipmentRow {
    pub id: Uuid,
    pub tracking_number: String,
    pub destination: String,
    pub status: String,
    pub estimated_delivery: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ShipmentRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ShipmentRow {
            id: row.try_get("id")?,
            tracking_number: row.try_get("tracking_number")?,
            destination: row.try_get("destination")?,
            status: row.try_get("status")?,
            estimated_delivery: row.try_get("estimated_delivery")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<ShipmentRow> for Shipment {
    fn from(row: ShipmentRow) -> Self {
        Shipment {
            id: row.id,
            tracking_number: row.tracking_number,
            destination: row.destination,
            status: row.status,
            estimated_delivery: row.estimated_delivery,
            created_at: row.created_at,
        }
    }
}

/// Shipment store backed by PostgreSQL.
///
/// The first match for a tracking number is the row with the lowest `seq`,
/// i.e. the one inserted first.
#[derive(Debug, Clone)]
pub struct PgShipmentStore {
    pool: Pool,
}

impl PgShipmentStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

/// Postgres text cannot hold NUL, so no stored row matches such a key.
fn unmatchable(tracking_number: &str) -> bool {
    tracking_number.contains('\0')
}

#[async_trait]
impl ShipmentStore for PgShipmentStore {
    async fn create(&self, input: NewShipment) -> StoreResult<Shipment> {
        let (id, created_at) = new_identity();

        let row = sqlx::query_as::<_, ShipmentRow>(
            r#"
            INSERT INTO shipments (
                id, tracking_number, destination, status, estimated_delivery, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tracking_number, destination, status, estimated_delivery, created_at
            "#,
        )
        .bind(id)
        .bind(&input.tracking_number)
        .bind(&input.destination)
        .bind(&input.status)
        .bind(input.estimated_delivery)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> StoreResult<Vec<Shipment>> {
        let rows = sqlx::query_as::<_, ShipmentRow>(
            r#"
            SELECT id, tracking_number, destination, status, estimated_delivery, created_at
            FROM shipments
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Shipment::from).collect())
    }

    async fn find(&self, tracking_number: &str) -> StoreResult<Option<Shipment>> {
        if unmatchable(tracking_number) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, ShipmentRow>(
            r#"
            SELECT id, tracking_number, destination, status, estimated_delivery, created_at
            FROM shipments
            WHERE tracking_number = $1
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(tracking_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Shipment::from))
    }

    async fn update(
        &self,
        tracking_number: &str,
        update: ShipmentUpdate,
    ) -> StoreResult<Option<Shipment>> {
        if unmatchable(tracking_number) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, ShipmentRow>(
            r#"
            UPDATE shipments SET
                tracking_number = COALESCE($2, tracking_number),
                destination = COALESCE($3, destination),
                status = COALESCE($4, status),
                estimated_delivery = COALESCE($5, estimated_delivery)
            WHERE seq = (
                SELECT seq FROM shipments
                WHERE tracking_number = $1
                ORDER BY seq ASC
                LIMIT 1
            )
            RETURNING id, tracking_number, destination, status, estimated_delivery, created_at
            "#,
        )
        .bind(tracking_number)
        .bind(update.tracking_number)
        .bind(update.destination)
        .bind(update.status)
        .bind(update.estimated_delivery)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Shipment::from))
    }

    async fn delete(&self, tracking_number: &str) -> StoreResult<Option<Shipment>> {
        if unmatchable(tracking_number) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, ShipmentRow>(
            r#"
            DELETE FROM shipments
            WHERE seq = (
                SELECT seq FROM shipments
                WHERE tracking_number = $1
                ORDER BY seq ASC
                LIMIT 1
            )
            RETURNING id, tracking_number, destination, status, estimated_delivery, created_at
            "#,
        )
        .bind(tracking_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Shipment::from))
    }
}
