//! Repository for the `warehouse_operators` table.

use depot_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::warehouse::{CreateWarehouseOperator, WarehouseOperator};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for warehouse operators.
pub struct WarehouseOperatorRepo;

impl WarehouseOperatorRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateWarehouseOperator,
    ) -> Result<WarehouseOperator, sqlx::Error> {
        let query = format!("INSERT INTO warehouse_operators (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, WarehouseOperator>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<WarehouseOperator>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM warehouse_operators WHERE id = $1");
        sqlx::query_as::<_, WarehouseOperator>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
