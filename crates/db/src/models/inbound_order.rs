//! Inbound orders and the item batches (lots) they place.

use depot_core::lot_selection::PickableLot;
use depot_core::types::{Date, DbId, Timestamp, Volume};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `inbound_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InboundOrder {
    pub id: DbId,
    pub warehouse_id: DbId,
    pub section_id: DbId,
    pub operator_id: DbId,
    pub order_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `item_batches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemBatch {
    pub id: DbId,
    pub inbound_order_id: DbId,
    pub product_id: DbId,
    /// Units still available; decremented by outbound picks.
    pub product_quantity: i32,
    pub volume: Volume,
    pub due_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PickableLot for ItemBatch {
    fn lot_id(&self) -> DbId {
        self.id
    }

    fn due_date(&self) -> Date {
        self.due_date
    }

    fn available_quantity(&self) -> i32 {
        self.product_quantity
    }
}

/// One requested lot in an inbound order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemBatchInput {
    pub product_id: DbId,
    #[validate(range(min = 1, message = "Must be at least 1"))]
    pub quantity: i32,
    #[validate(range(min = 1, message = "Must be a positive volume"))]
    pub volume: Volume,
    pub due_date: Date,
}

/// DTO for creating an inbound order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInboundOrder {
    pub warehouse_id: DbId,
    pub section_id: DbId,
    pub operator_id: DbId,
    #[validate(length(min = 1, message = "At least one item batch is required"), nested)]
    pub item_batches: Vec<ItemBatchInput>,
}

/// DTO replacing the whole batch list of an inbound order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceItemBatches {
    #[validate(length(min = 1, message = "At least one item batch is required"), nested)]
    pub item_batches: Vec<ItemBatchInput>,
}

/// Insert payload for the `inbound_orders` table.
#[derive(Debug, Clone)]
pub struct NewInboundOrder {
    pub warehouse_id: DbId,
    pub section_id: DbId,
    pub operator_id: DbId,
    pub order_date: Date,
}

/// An inbound order together with its current batches.
#[derive(Debug, Clone, Serialize)]
pub struct InboundOrderWithBatches {
    #[serde(flatten)]
    pub order: InboundOrder,
    pub item_batches: Vec<ItemBatch>,
}
