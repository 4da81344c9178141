//! PostgreSQL persistence for the depot backend.
//!
//! Row models and DTOs live in [`models`]; zero-sized repositories with
//! async CRUD methods live in [`repositories`].

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Whether the lookup tables the domain enums map onto are fully seeded.
pub async fn schema_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM storage_categories) = $1
            AND (SELECT COUNT(*) FROM refund_reasons) = $2",
    )
    .bind(depot_core::storage::StorageCategory::ALL.len() as i64)
    .bind(depot_core::refund::RefundReason::ALL.len() as i64)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
