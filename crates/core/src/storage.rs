//! Storage categories for products and warehouse sections.
//!
//! Each variant's discriminant matches the seed data order (1-based) in the
//! `storage_categories` lookup table. A product may only be placed in a
//! section of the same category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lookup id type matching SMALLINT/SMALLSERIAL in the database.
pub type CategoryId = i16;

/// Temperature regime a product needs and a section provides.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageCategory {
    #[serde(alias = "FRESCO")]
    Fresh = 1,
    #[serde(alias = "REFRIGERADO")]
    Refrigerated = 2,
    #[serde(alias = "CONGELADO")]
    Frozen = 3,
    #[serde(alias = "SECO")]
    Dry = 4,
}

impl StorageCategory {
    pub const ALL: [StorageCategory; 4] = [
        Self::Fresh,
        Self::Refrigerated,
        Self::Frozen,
        Self::Dry,
    ];

    /// Return the database lookup ID.
    pub fn id(self) -> CategoryId {
        self as CategoryId
    }

    /// Resolve a database lookup ID back into a category.
    pub fn from_id(id: CategoryId) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| CoreError::Internal(format!("Unknown storage category id {id}")))
    }

    /// Canonical wire code, e.g. `"FROZEN"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fresh => "FRESH",
            Self::Refrigerated => "REFRIGERATED",
            Self::Frozen => "FROZEN",
            Self::Dry => "DRY",
        }
    }
}

impl From<StorageCategory> for CategoryId {
    fn from(value: StorageCategory) -> Self {
        value as CategoryId
    }
}

impl fmt::Display for StorageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StorageCategory {
    type Err = CoreError;

    /// Parse a canonical or legacy category code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FRESH" | "FRESCO" => Ok(Self::Fresh),
            "REFRIGERATED" | "REFRIGERADO" => Ok(Self::Refrigerated),
            "FROZEN" | "CONGELADO" => Ok(Self::Frozen),
            "DRY" | "SECO" => Ok(Self::Dry),
            _ => Err(CoreError::Validation(format!(
                "Unknown storage category '{s}'. Expected one of FRESH, REFRIGERATED, FROZEN, DRY"
            ))),
        }
    }
}
