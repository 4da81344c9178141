//! Outbound orders, the lot picks that serve them, and their refunds.

use depot_core::refund::{RefundReason, RefundReasonId};
use depot_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `outbound_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutboundOrder {
    pub id: DbId,
    pub order_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `outbound_items` table: `quantity` units taken from one lot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutboundItem {
    pub id: DbId,
    pub outbound_order_id: DbId,
    pub item_batch_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub created_at: Timestamp,
}

/// One requested pick line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PickLine {
    pub product_id: DbId,
    #[validate(range(min = 1, message = "Must be at least 1"))]
    pub quantity: i32,
}

/// DTO for creating an outbound order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOutboundOrder {
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<PickLine>,
}

/// DTO replacing every pick of an outbound order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceOutboundItems {
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<PickLine>,
}

/// Insert payload for the `outbound_items` table.
#[derive(Debug, Clone)]
pub struct NewOutboundItem {
    pub outbound_order_id: DbId,
    pub item_batch_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
}

/// An outbound order together with its picks.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundOrderWithItems {
    #[serde(flatten)]
    pub order: OutboundOrder,
    pub items: Vec<OutboundItem>,
}

/// A row from the `refunds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Refund {
    pub id: DbId,
    pub outbound_order_id: DbId,
    #[serde(rename = "reason", serialize_with = "super::serialize_reason_id")]
    pub reason_id: RefundReasonId,
    pub refund_date: Date,
    pub created_at: Timestamp,
}

/// DTO for refunding an outbound order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRefund {
    pub reason: RefundReason,
}

/// A refund together with the order it returned.
#[derive(Debug, Clone, Serialize)]
pub struct RefundWithOrder {
    #[serde(flatten)]
    pub refund: Refund,
    pub outbound_order: OutboundOrderWithItems,
}
