//! Transactional order workflows.
//!
//! Each service owns a handle to the pool and runs one operation per
//! database transaction. Handlers validate the request DTO, then call in
//! with the reference date for the operation.

pub mod inbound_order;
pub mod outbound_order;

pub use inbound_order::InboundOrderService;
pub use outbound_order::OutboundOrderService;
