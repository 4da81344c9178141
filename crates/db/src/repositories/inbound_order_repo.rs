//! Repository for the `inbound_orders` table.

use depot_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::inbound_order::{InboundOrder, NewInboundOrder};

const COLUMNS: &str =
    "id, warehouse_id, section_id, operator_id, order_date, created_at, updated_at";

/// Provides persistence for inbound order headers. Batches live in
/// [`ItemBatchRepo`](super::ItemBatchRepo).
pub struct InboundOrderRepo;

impl InboundOrderRepo {
    /// Insert an order header inside the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &NewInboundOrder,
    ) -> Result<InboundOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO inbound_orders (warehouse_id, section_id, operator_id, order_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InboundOrder>(&query)
            .bind(input.warehouse_id)
            .bind(input.section_id)
            .bind(input.operator_id)
            .bind(input.order_date)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<InboundOrder>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM inbound_orders WHERE id = $1");
        sqlx::query_as::<_, InboundOrder>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Bump `updated_at` after the order's batches were rewritten.
    pub async fn touch(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE inbound_orders SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
