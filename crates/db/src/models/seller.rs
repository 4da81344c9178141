//! Seller entity model and DTOs.

use depot_core::types::{DbId, Timestamp};
use depot_core::validation::{ADDRESS, PERSON_NAME, SELLER_EMAIL, ZIP_CODE};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A seller row from the `sellers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Seller {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub house_number: i32,
    pub zip_code: String,
    /// Products of inactive sellers cannot enter the inbound flow.
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a seller. New sellers start active.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSeller {
    #[validate(regex(path = *PERSON_NAME, message = "Only letters and spaces are allowed"))]
    pub first_name: String,
    #[validate(regex(path = *PERSON_NAME, message = "Only letters and spaces are allowed"))]
    pub last_name: String,
    #[validate(regex(
        path = *SELLER_EMAIL,
        message = "Must be an address on a lowercase .com or .com.br domain"
    ))]
    pub email: String,
    #[validate(regex(path = *ADDRESS, message = "Only letters, digits and spaces are allowed"))]
    pub address: String,
    #[validate(range(min = 1, message = "Must be a positive number"))]
    pub house_number: i32,
    #[validate(regex(path = *ZIP_CODE, message = "Must be exactly 8 digits"))]
    pub zip_code: String,
}

/// DTO for activating or deactivating a seller.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSellerStatus {
    pub is_active: bool,
}
