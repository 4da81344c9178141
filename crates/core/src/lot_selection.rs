//! Outbound lot selection.
//!
//! A pick request names a product and a quantity and is served from exactly
//! one lot: among the product's lots that still have more than
//! [`MIN_SHELF_LIFE_DAYS`] of shelf life and hold at least the requested
//! quantity, the one with the earliest due date wins (lowest id on ties).
//!
//! Requests are never split across lots. If no single lot qualifies the pick
//! is rejected, even when several lots together would hold enough stock.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::{Date, DbId};

/// A lot must be due strictly more than this many days after the pick date.
pub const MIN_SHELF_LIFE_DAYS: i64 = 21;

/// The view of a lot the policy needs.
pub trait PickableLot {
    fn lot_id(&self) -> DbId;
    fn due_date(&self) -> Date;
    fn available_quantity(&self) -> i32;
}

/// Lots due on or before this date are too close to expiry to pick on `today`.
pub fn shelf_life_cutoff(today: Date) -> Date {
    today + Duration::days(MIN_SHELF_LIFE_DAYS)
}

/// Whether a single lot can serve `requested` units on `today`.
pub fn is_pickable<L: PickableLot + ?Sized>(lot: &L, requested: i32, today: Date) -> bool {
    lot.due_date() > shelf_life_cutoff(today) && lot.available_quantity() >= requested
}

/// Choose the lot to pick `requested` units from, or `None`.
pub fn select_lot<L: PickableLot>(lots: &[L], requested: i32, today: Date) -> Option<&L> {
    lots.iter()
        .filter(|lot| is_pickable(*lot, requested, today))
        .min_by_key(|lot| (lot.due_date(), lot.lot_id()))
}

/// Reject non-positive pick quantities before any lot is looked at.
pub fn validate_pick_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(format!(
            "Pick quantity must be positive, got {quantity}"
        )));
    }
    Ok(())
}

/// Error for a product whose lots cannot serve the request.
pub fn no_eligible_lot(product_id: DbId, requested: i32) -> CoreError {
    CoreError::BusinessRule(format!(
        "No single lot of product {product_id} holds {requested} units with more than \
         {MIN_SHELF_LIFE_DAYS} days of shelf life"
    ))
}
