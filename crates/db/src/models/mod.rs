//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs for inserts and replacements

pub mod inbound_order;
pub mod outbound_order;
pub mod product;
pub mod seller;
pub mod warehouse;

use depot_core::refund::{RefundReason, RefundReasonId};
use depot_core::storage::{CategoryId, StorageCategory};
use serde::Serializer;

/// Serialize a `category_id` column as its canonical category code.
pub(crate) fn serialize_category_id<S>(id: &CategoryId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let category = StorageCategory::from_id(*id).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(category.code())
}

/// Serialize a `reason_id` column as its refund reason code.
pub(crate) fn serialize_reason_id<S>(id: &RefundReasonId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let reason = RefundReason::from_id(*id).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(reason.code())
}
