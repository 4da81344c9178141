//! Repository for the `outbound_orders` and `outbound_items` tables.

use depot_core::types::{Date, DbId};
use sqlx::{PgConnection, PgExecutor};

use crate::models::outbound_order::{NewOutboundItem, OutboundItem, OutboundOrder};

const COLUMNS: &str = "id, order_date, created_at, updated_at";

const ITEM_COLUMNS: &str =
    "id, outbound_order_id, item_batch_id, product_id, quantity, created_at";

/// Provides persistence for outbound orders and their lot picks.
pub struct OutboundOrderRepo;

impl OutboundOrderRepo {
    pub async fn create(
        conn: &mut PgConnection,
        order_date: Date,
    ) -> Result<OutboundOrder, sqlx::Error> {
        let query =
            format!("INSERT INTO outbound_orders (order_date) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, OutboundOrder>(&query)
            .bind(order_date)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<OutboundOrder>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM outbound_orders WHERE id = $1");
        sqlx::query_as::<_, OutboundOrder>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Lock an order header so concurrent rewrites of its picks serialize.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<OutboundOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outbound_orders WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, OutboundOrder>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Record one pick.
    pub async fn add_item(
        conn: &mut PgConnection,
        input: &NewOutboundItem,
    ) -> Result<OutboundItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO outbound_items (outbound_order_id, item_batch_id, product_id, quantity)
             VALUES ($1, $2, $3, $4)
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, OutboundItem>(&query)
            .bind(input.outbound_order_id)
            .bind(input.item_batch_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .fetch_one(conn)
            .await
    }

    pub async fn list_items<'e, E>(
        executor: E,
        outbound_order_id: DbId,
    ) -> Result<Vec<OutboundItem>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM outbound_items WHERE outbound_order_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, OutboundItem>(&query)
            .bind(outbound_order_id)
            .fetch_all(executor)
            .await
    }

    /// Delete every pick of an order, returning the removed rows so the
    /// caller can put the stock back.
    pub async fn delete_items(
        conn: &mut PgConnection,
        outbound_order_id: DbId,
    ) -> Result<Vec<OutboundItem>, sqlx::Error> {
        let query = format!(
            "DELETE FROM outbound_items WHERE outbound_order_id = $1 RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, OutboundItem>(&query)
            .bind(outbound_order_id)
            .fetch_all(conn)
            .await
    }

    /// Bump `updated_at` after the order's picks were rewritten.
    pub async fn touch(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE outbound_orders SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
