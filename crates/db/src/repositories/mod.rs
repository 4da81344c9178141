//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Plain
//! reads take `&PgPool`; steps of a multi-statement operation take
//! `&mut PgConnection` so the caller can run them inside one transaction.
//! Reads needed in both situations accept any `PgExecutor`.

pub mod inbound_order_repo;
pub mod item_batch_repo;
pub mod outbound_order_repo;
pub mod product_repo;
pub mod refund_repo;
pub mod section_repo;
pub mod seller_repo;
pub mod warehouse_operator_repo;
pub mod warehouse_repo;

pub use inbound_order_repo::InboundOrderRepo;
pub use item_batch_repo::ItemBatchRepo;
pub use outbound_order_repo::OutboundOrderRepo;
pub use product_repo::ProductRepo;
pub use refund_repo::RefundRepo;
pub use section_repo::SectionRepo;
pub use seller_repo::SellerRepo;
pub use warehouse_operator_repo::WarehouseOperatorRepo;
pub use warehouse_repo::WarehouseRepo;
