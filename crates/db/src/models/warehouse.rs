//! Warehouse topology: operators, warehouses and sections.

use depot_core::error::CoreError;
use depot_core::inbound::{SectionState, WarehouseRef};
use depot_core::storage::{CategoryId, StorageCategory};
use depot_core::types::{DbId, Timestamp, Volume};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `warehouse_operators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WarehouseOperator {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWarehouseOperator {
    #[validate(length(min = 1, max = 200, message = "Must be between 1 and 200 characters"))]
    pub name: String,
}

/// A row from the `warehouses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Warehouse {
    pub id: DbId,
    pub name: String,
    /// The single operator allowed to receive goods into this warehouse.
    pub operator_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Warehouse {
    pub fn placement_ref(&self) -> WarehouseRef {
        WarehouseRef {
            id: self.id,
            operator_id: self.operator_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWarehouse {
    #[validate(length(min = 1, max = 200, message = "Must be between 1 and 200 characters"))]
    pub name: String,
    pub operator_id: DbId,
}

/// A row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub warehouse_id: DbId,
    pub name: String,
    #[serde(rename = "category", serialize_with = "super::serialize_category_id")]
    pub category_id: CategoryId,
    /// Total storable volume.
    pub capacity: Volume,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Section {
    pub fn category(&self) -> Result<StorageCategory, CoreError> {
        StorageCategory::from_id(self.category_id)
    }

    /// Combine the row with the volume currently stored in it.
    pub fn state(&self, used_volume: Volume) -> Result<SectionState, CoreError> {
        Ok(SectionState {
            id: self.id,
            warehouse_id: self.warehouse_id,
            category: self.category()?,
            capacity: self.capacity,
            used_volume,
        })
    }
}

/// DTO for creating a section. The warehouse comes from the URL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSection {
    #[validate(length(min = 1, max = 200, message = "Must be between 1 and 200 characters"))]
    pub name: String,
    pub category: StorageCategory,
    #[validate(range(min = 1, message = "Must be a positive volume"))]
    pub capacity: Volume,
}

/// A section with its current usage, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SectionUsage {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub section: Section,
    pub used_volume: Volume,
}
