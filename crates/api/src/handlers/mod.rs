//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Request bodies are validated before any lookup runs; errors map to HTTP
//! responses through [`AppError`](crate::error::AppError).

pub mod inbound_order;
pub mod outbound_order;
pub mod product;
pub mod seller;
pub mod warehouse;
