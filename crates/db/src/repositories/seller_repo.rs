//! Repository for the `sellers` table.

use depot_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::seller::{CreateSeller, Seller};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, address, house_number, zip_code, \
    is_active, created_at, updated_at";

/// Column list for the `sellers` table aliased as `s` (used in JOIN queries).
const S_COLUMNS: &str = "s.id, s.first_name, s.last_name, s.email, s.address, s.house_number, \
    s.zip_code, s.is_active, s.created_at, s.updated_at";

/// Provides CRUD operations for sellers.
pub struct SellerRepo;

impl SellerRepo {
    /// Insert a new seller, returning the created row. Sellers start active.
    pub async fn create(pool: &PgPool, input: &CreateSeller) -> Result<Seller, sqlx::Error> {
        let query = format!(
            "INSERT INTO sellers (first_name, last_name, email, address, house_number, zip_code)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Seller>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.address)
            .bind(input.house_number)
            .bind(&input.zip_code)
            .fetch_one(pool)
            .await
    }

    /// Find a seller by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sellers WHERE id = $1");
        sqlx::query_as::<_, Seller>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the seller owning a product.
    pub async fn find_by_product_id<'e, E>(
        executor: E,
        product_id: DbId,
    ) -> Result<Option<Seller>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {S_COLUMNS} FROM sellers s
             JOIN products p ON p.seller_id = s.id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, Seller>(&query)
            .bind(product_id)
            .fetch_optional(executor)
            .await
    }

    /// Activate or deactivate a seller. Returns `None` if no row matched.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!(
            "UPDATE sellers SET is_active = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Seller>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }
}
