//! Depot domain core.
//!
//! Pure domain types and rules shared by the database and API crates:
//! identifiers, the domain error type, storage categories, the inbound
//! placement predicates, the outbound lot-selection policy and refund
//! rules. Nothing in this crate touches the database.

pub mod catalog;
pub mod error;
pub mod inbound;
pub mod lot_selection;
pub mod pagination;
pub mod refund;
pub mod storage;
pub mod types;
pub mod validation;
