//! Repository for the `products` table and product lot locations.

use depot_core::catalog::LotOrder;
use depot_core::storage::CategoryId;
use depot_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::product::{CreateProduct, LotLocation, Product};

const COLUMNS: &str = "id, seller_id, name, price_cents, category_id, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product. The seller must exist (`fk_products_seller`).
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (seller_id, name, price_cents, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.seller_id)
            .bind(&input.name)
            .bind(input.price_cents)
            .bind(input.category.id())
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Product>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List products by id, optionally restricted to one storage category.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<CategoryId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE ($1::SMALLINT IS NULL OR category_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every lot of a product with the section and warehouse holding it.
    pub async fn list_lot_locations(
        pool: &PgPool,
        product_id: DbId,
        order: LotOrder,
    ) -> Result<Vec<LotLocation>, sqlx::Error> {
        let query = format!(
            "SELECT ib.id AS item_batch_id, io.section_id, io.warehouse_id,
                    ib.product_quantity, ib.due_date
             FROM item_batches ib
             JOIN inbound_orders io ON io.id = ib.inbound_order_id
             WHERE ib.product_id = $1
             ORDER BY {}",
            order.order_by()
        );
        sqlx::query_as::<_, LotLocation>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
