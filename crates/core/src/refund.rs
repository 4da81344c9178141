//! Refunds of outbound orders.
//!
//! A refund returns every unit an outbound order picked to the lot it came
//! from and records why. An order is refunded at most once, and a refunded
//! order's picks can no longer be rewritten.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Lookup id type for the `refund_reasons` table.
pub type RefundReasonId = i16;

/// Why an outbound order was returned. Discriminants match the seeded
/// `refund_reasons` rows.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundReason {
    Damaged = 1,
    Expired = 2,
    WrongProduct = 3,
    CustomerWithdrawal = 4,
}

impl RefundReason {
    pub const ALL: [RefundReason; 4] = [
        Self::Damaged,
        Self::Expired,
        Self::WrongProduct,
        Self::CustomerWithdrawal,
    ];

    pub fn id(self) -> RefundReasonId {
        self as RefundReasonId
    }

    pub fn from_id(id: RefundReasonId) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| CoreError::Internal(format!("Unknown refund reason id {id}")))
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Damaged => "DAMAGED",
            Self::Expired => "EXPIRED",
            Self::WrongProduct => "WRONG_PRODUCT",
            Self::CustomerWithdrawal => "CUSTOMER_WITHDRAWAL",
        }
    }
}

/// Reject a second refund of the same order.
pub fn verify_not_refunded(order_id: DbId, refunded: bool) -> Result<(), CoreError> {
    if refunded {
        return Err(CoreError::BusinessRule(format!(
            "Outbound order {order_id} has already been refunded"
        )));
    }
    Ok(())
}

/// Reject rewriting the picks of a refunded order.
pub fn verify_items_editable(order_id: DbId, refunded: bool) -> Result<(), CoreError> {
    if refunded {
        return Err(CoreError::BusinessRule(format!(
            "Outbound order {order_id} was refunded and its items can no longer change"
        )));
    }
    Ok(())
}
