//! Inbound placement rules.
//!
//! Predicates run over already-resolved entities and fail fast with
//! [`CoreError::BusinessRule`]. The API layer resolves every referenced row,
//! calls [`validate_creation`] (or [`validate_replacement`] for batch
//! updates), then looks up sellers and calls [`verify_sellers_active`] last.

use crate::error::CoreError;
use crate::storage::StorageCategory;
use crate::types::{DbId, Volume};

// ---------------------------------------------------------------------------
// Resolved views
// ---------------------------------------------------------------------------

/// The parts of a warehouse the placement rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarehouseRef {
    pub id: DbId,
    pub operator_id: DbId,
}

/// A section together with the volume already stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    pub id: DbId,
    pub warehouse_id: DbId,
    pub category: StorageCategory,
    pub capacity: Volume,
    pub used_volume: Volume,
}

impl SectionState {
    /// Volume still free in the section. Never negative.
    pub fn remaining_capacity(&self) -> Volume {
        (self.capacity - self.used_volume).max(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRef {
    pub id: DbId,
    pub category: StorageCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerRef {
    pub id: DbId,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Sum of requested batch volumes. Saturates instead of overflowing so an
/// absurd request still fails the capacity check.
pub fn total_volume<I>(volumes: I) -> Volume
where
    I: IntoIterator<Item = Volume>,
{
    volumes
        .into_iter()
        .fold(0, |acc: Volume, v| acc.saturating_add(v))
}

/// The acting operator must be the operator assigned to the warehouse.
pub fn verify_operator_in_warehouse(
    warehouse: &WarehouseRef,
    operator_id: DbId,
) -> Result<(), CoreError> {
    if warehouse.operator_id != operator_id {
        return Err(CoreError::BusinessRule(format!(
            "Operator {operator_id} is not assigned to warehouse {}",
            warehouse.id
        )));
    }
    Ok(())
}

/// The section must belong to the warehouse named in the order.
pub fn verify_section_in_warehouse(
    section: &SectionState,
    warehouse_id: DbId,
) -> Result<(), CoreError> {
    if section.warehouse_id != warehouse_id {
        return Err(CoreError::BusinessRule(format!(
            "Section {} is not part of warehouse {warehouse_id}",
            section.id
        )));
    }
    Ok(())
}

/// Every product must share the section's storage category.
///
/// Fails on the first mismatching product even if the others match.
pub fn verify_categories_match(
    products: &[ProductRef],
    section: &SectionState,
) -> Result<(), CoreError> {
    if let Some(product) = products.iter().find(|p| p.category != section.category) {
        return Err(CoreError::BusinessRule(format!(
            "Product {} has category {} which is not compatible with section {} ({})",
            product.id, product.category, section.id, section.category
        )));
    }
    Ok(())
}

/// The requested volume must fit in what is left of the section.
pub fn verify_capacity(section: &SectionState, requested: Volume) -> Result<(), CoreError> {
    let remaining = section.remaining_capacity();
    if requested > remaining {
        return Err(CoreError::BusinessRule(format!(
            "Batch volume {requested} exceeds the available capacity {remaining} of section {}",
            section.id
        )));
    }
    Ok(())
}

/// Every seller behind the requested products must be active.
pub fn verify_sellers_active(sellers: &[SellerRef]) -> Result<(), CoreError> {
    if let Some(seller) = sellers.iter().find(|s| !s.is_active) {
        return Err(CoreError::BusinessRule(format!(
            "Seller {} is inactive",
            seller.id
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Composite checks
// ---------------------------------------------------------------------------

/// Run the placement predicates for a new inbound order, in order:
/// operator, section ownership, categories, capacity.
///
/// The seller check is not included because it needs extra lookups; callers
/// run [`verify_sellers_active`] once this passes.
pub fn validate_creation(
    warehouse: &WarehouseRef,
    operator_id: DbId,
    section: &SectionState,
    products: &[ProductRef],
    volumes: &[Volume],
) -> Result<(), CoreError> {
    verify_operator_in_warehouse(warehouse, operator_id)?;
    verify_section_in_warehouse(section, warehouse.id)?;
    verify_categories_match(products, section)?;
    verify_capacity(section, total_volume(volumes.iter().copied()))
}

/// Run the predicates for replacing an order's batches.
///
/// Warehouse and operator were checked at creation and the section is fixed
/// per order, so only categories and capacity are re-validated. The caller
/// must exclude the order's current batches from `section.used_volume`.
pub fn validate_replacement(
    section: &SectionState,
    products: &[ProductRef],
    volumes: &[Volume],
) -> Result<(), CoreError> {
    verify_categories_match(products, section)?;
    verify_capacity(section, total_volume(volumes.iter().copied()))
}
