//! Product entity model, DTOs and lot-location projections.

use depot_core::error::CoreError;
use depot_core::storage::{CategoryId, StorageCategory};
use depot_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub seller_id: DbId,
    pub name: String,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// Fixed at creation.
    #[serde(rename = "category", serialize_with = "super::serialize_category_id")]
    pub category_id: CategoryId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    pub fn category(&self) -> Result<StorageCategory, CoreError> {
        StorageCategory::from_id(self.category_id)
    }
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    pub seller_id: DbId,
    #[validate(length(min = 1, max = 200, message = "Must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "Must not be negative"))]
    pub price_cents: i64,
    pub category: StorageCategory,
}

/// One lot of a product and where it is stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LotLocation {
    pub item_batch_id: DbId,
    pub section_id: DbId,
    pub warehouse_id: DbId,
    pub product_quantity: i32,
    pub due_date: Date,
}

/// Where a product's lots are stored.
///
/// `section_id` / `warehouse_id` come from the first lot in the requested
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct ProductLocation {
    pub product_id: DbId,
    pub section_id: DbId,
    pub warehouse_id: DbId,
    pub lots: Vec<LotLocation>,
}
