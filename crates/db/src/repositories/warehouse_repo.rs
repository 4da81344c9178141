//! Repository for the `warehouses` table.

use depot_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::warehouse::{CreateWarehouse, Warehouse};

const COLUMNS: &str = "id, name, operator_id, created_at, updated_at";

/// Provides CRUD operations for warehouses.
pub struct WarehouseRepo;

impl WarehouseRepo {
    /// Insert a new warehouse. The operator must exist (`fk_warehouses_operator`).
    pub async fn create(pool: &PgPool, input: &CreateWarehouse) -> Result<Warehouse, sqlx::Error> {
        let query = format!(
            "INSERT INTO warehouses (name, operator_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(&input.name)
            .bind(input.operator_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Warehouse>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM warehouses WHERE id = $1");
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
