//! Repository for the `sections` table and section usage.

use depot_core::types::{DbId, Volume};
use sqlx::{PgConnection, PgPool};

use crate::models::warehouse::{CreateSection, Section, SectionUsage};

const COLUMNS: &str = "id, warehouse_id, name, category_id, capacity, created_at, updated_at";

/// Column list for the `sections` table aliased as `s` (used in JOIN queries).
const S_COLUMNS: &str =
    "s.id, s.warehouse_id, s.name, s.category_id, s.capacity, s.created_at, s.updated_at";

/// Provides CRUD operations and capacity accounting for sections.
pub struct SectionRepo;

impl SectionRepo {
    pub async fn create(
        pool: &PgPool,
        warehouse_id: DbId,
        input: &CreateSection,
    ) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (warehouse_id, name, category_id, capacity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(warehouse_id)
            .bind(&input.name)
            .bind(input.category.id())
            .bind(input.capacity)
            .fetch_one(pool)
            .await
    }

    /// Fetch a section and hold its row lock until the transaction ends.
    ///
    /// Every inbound write to the section takes this lock first, so capacity
    /// checks never run against a stale total.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Total volume of all batches stored in a section.
    ///
    /// Batches of `excluding_order` are left out of the sum; pass the order
    /// being rewritten when its batches are about to be replaced.
    pub async fn used_volume(
        conn: &mut PgConnection,
        section_id: DbId,
        excluding_order: Option<DbId>,
    ) -> Result<Volume, sqlx::Error> {
        let row: (Volume,) = sqlx::query_as(
            "SELECT COALESCE(SUM(ib.volume), 0)::BIGINT
             FROM item_batches ib
             JOIN inbound_orders io ON io.id = ib.inbound_order_id
             WHERE io.section_id = $1
               AND ($2::BIGINT IS NULL OR io.id <> $2)",
        )
        .bind(section_id)
        .bind(excluding_order)
        .fetch_one(conn)
        .await?;
        Ok(row.0)
    }

    /// List a warehouse's sections with their used volume.
    pub async fn list_by_warehouse(
        pool: &PgPool,
        warehouse_id: DbId,
    ) -> Result<Vec<SectionUsage>, sqlx::Error> {
        let query = format!(
            "SELECT {S_COLUMNS}, COALESCE(u.used, 0)::BIGINT AS used_volume
             FROM sections s
             LEFT JOIN (
                 SELECT io.section_id, SUM(ib.volume) AS used
                 FROM item_batches ib
                 JOIN inbound_orders io ON io.id = ib.inbound_order_id
                 GROUP BY io.section_id
             ) u ON u.section_id = s.id
             WHERE s.warehouse_id = $1
             ORDER BY s.id"
        );
        sqlx::query_as::<_, SectionUsage>(&query)
            .bind(warehouse_id)
            .fetch_all(pool)
            .await
    }
}
