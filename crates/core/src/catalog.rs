//! Catalog rules: product lot listing order.

use std::str::FromStr;

use crate::error::CoreError;

/// Sort order for the lots of a product (`?order=` on the location endpoint).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LotOrder {
    /// `L`: by lot id.
    #[default]
    LotId,
    /// `Q`: by quantity, smallest first.
    Quantity,
    /// `V`: by due date, soonest first.
    DueDate,
}

impl LotOrder {
    /// SQL `ORDER BY` clause for the `item_batches` table aliased as `ib`.
    pub fn order_by(self) -> &'static str {
        match self {
            Self::LotId => "ib.id ASC",
            Self::Quantity => "ib.product_quantity ASC, ib.id ASC",
            Self::DueDate => "ib.due_date ASC, ib.id ASC",
        }
    }
}

impl FromStr for LotOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" => Ok(Self::LotId),
            "Q" | "q" => Ok(Self::Quantity),
            "V" | "v" => Ok(Self::DueDate),
            other => Err(CoreError::Validation(format!(
                "Invalid lot order '{other}'. Expected 'L', 'Q' or 'V'"
            ))),
        }
    }
}

/// Resolve an optional order code. Absent and unrecognized codes both list
/// by lot id.
pub fn parse_lot_order(code: Option<&str>) -> LotOrder {
    code.and_then(|c| c.parse().ok()).unwrap_or_default()
}
