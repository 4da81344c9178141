//! Repository for the `item_batches` table (lots).

use depot_core::types::{Date, DbId, Volume};
use sqlx::{PgConnection, PgExecutor};

use crate::models::inbound_order::{ItemBatch, ItemBatchInput};

const COLUMNS: &str = "id, inbound_order_id, product_id, product_quantity, volume, due_date, \
    created_at, updated_at";

/// Provides persistence for lots and their available quantities.
pub struct ItemBatchRepo;

impl ItemBatchRepo {
    /// Insert one lot per input line for an inbound order.
    ///
    /// Returns the created rows in input order.
    pub async fn create_many(
        conn: &mut PgConnection,
        inbound_order_id: DbId,
        lines: &[ItemBatchInput],
    ) -> Result<Vec<ItemBatch>, sqlx::Error> {
        let product_ids: Vec<DbId> = lines.iter().map(|l| l.product_id).collect();
        let quantities: Vec<i32> = lines.iter().map(|l| l.quantity).collect();
        let volumes: Vec<Volume> = lines.iter().map(|l| l.volume).collect();
        let due_dates: Vec<Date> = lines.iter().map(|l| l.due_date).collect();

        let query = format!(
            "INSERT INTO item_batches
                (inbound_order_id, product_id, product_quantity, volume, due_date)
             SELECT $1, t.product_id, t.quantity, t.volume, t.due_date
             FROM UNNEST($2::bigint[], $3::int[], $4::bigint[], $5::date[])
                 WITH ORDINALITY AS t(product_id, quantity, volume, due_date, ord)
             ORDER BY t.ord
             RETURNING {COLUMNS}"
        );
        let mut batches = sqlx::query_as::<_, ItemBatch>(&query)
            .bind(inbound_order_id)
            .bind(&product_ids)
            .bind(&quantities)
            .bind(&volumes)
            .bind(&due_dates)
            .fetch_all(conn)
            .await?;
        // BIGSERIAL ids follow insertion order.
        batches.sort_by_key(|b| b.id);
        Ok(batches)
    }

    /// List the lots of an inbound order by id.
    pub async fn list_by_order<'e, E>(
        executor: E,
        inbound_order_id: DbId,
    ) -> Result<Vec<ItemBatch>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM item_batches WHERE inbound_order_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ItemBatch>(&query)
            .bind(inbound_order_id)
            .fetch_all(executor)
            .await
    }

    /// Delete every lot of an inbound order. Returns the number removed.
    pub async fn delete_by_order(
        conn: &mut PgConnection,
        inbound_order_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM item_batches WHERE inbound_order_id = $1")
            .bind(inbound_order_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Whether any lot of the order has been picked by an outbound order.
    pub async fn has_picks_for_order(
        conn: &mut PgConnection,
        inbound_order_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM outbound_items oi
                 JOIN item_batches ib ON ib.id = oi.item_batch_id
                 WHERE ib.inbound_order_id = $1
             )",
        )
        .bind(inbound_order_id)
        .fetch_one(conn)
        .await?;
        Ok(row.0)
    }

    /// Lock and return every lot of the given products plus the listed lots.
    ///
    /// All rows are locked by one statement in ascending id order, so
    /// transactions touching overlapping products wait on each other instead
    /// of deadlocking. The locks are held until the transaction ends.
    pub async fn lock_for_picking(
        conn: &mut PgConnection,
        product_ids: &[DbId],
        lot_ids: &[DbId],
    ) -> Result<Vec<ItemBatch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_batches
             WHERE product_id = ANY($1) OR id = ANY($2)
             ORDER BY id
             FOR UPDATE"
        );
        sqlx::query_as::<_, ItemBatch>(&query)
            .bind(product_ids)
            .bind(lot_ids)
            .fetch_all(conn)
            .await
    }

    /// Lock the lots of an inbound order, in id order.
    pub async fn lock_by_order(
        conn: &mut PgConnection,
        inbound_order_id: DbId,
    ) -> Result<Vec<ItemBatch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM item_batches
             WHERE inbound_order_id = $1
             ORDER BY id
             FOR UPDATE"
        );
        sqlx::query_as::<_, ItemBatch>(&query)
            .bind(inbound_order_id)
            .fetch_all(conn)
            .await
    }

    /// Add `delta` (negative to take stock) to a lot's available quantity.
    ///
    /// The `product_quantity >= 0` check constraint rejects over-picking.
    pub async fn adjust_quantity(
        conn: &mut PgConnection,
        id: DbId,
        delta: i32,
    ) -> Result<ItemBatch, sqlx::Error> {
        let query = format!(
            "UPDATE item_batches SET product_quantity = product_quantity + $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemBatch>(&query)
            .bind(id)
            .bind(delta)
            .fetch_one(conn)
            .await
    }
}
