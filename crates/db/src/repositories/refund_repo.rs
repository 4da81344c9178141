//! Repository for the `refunds` table.

use depot_core::refund::RefundReason;
use depot_core::types::{Date, DbId};
use sqlx::{PgConnection, PgExecutor};

use crate::models::outbound_order::Refund;

const COLUMNS: &str = "id, outbound_order_id, reason_id, refund_date, created_at";

/// Provides persistence for outbound order refunds.
pub struct RefundRepo;

impl RefundRepo {
    pub async fn create(
        conn: &mut PgConnection,
        outbound_order_id: DbId,
        reason: RefundReason,
        refund_date: Date,
    ) -> Result<Refund, sqlx::Error> {
        let query = format!(
            "INSERT INTO refunds (outbound_order_id, reason_id, refund_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Refund>(&query)
            .bind(outbound_order_id)
            .bind(reason.id())
            .bind(refund_date)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_order<'e, E>(
        executor: E,
        outbound_order_id: DbId,
    ) -> Result<Option<Refund>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM refunds WHERE outbound_order_id = $1");
        sqlx::query_as::<_, Refund>(&query)
            .bind(outbound_order_id)
            .fetch_optional(executor)
            .await
    }
}
