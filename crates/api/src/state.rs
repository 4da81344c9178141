use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{InboundOrderService, OutboundOrderService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: depot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub inbound: InboundOrderService,
    pub outbound: OutboundOrderService,
}

impl AppState {
    /// Wire the order services to `pool`.
    pub fn new(pool: depot_db::DbPool, config: ServerConfig) -> Self {
        Self {
            inbound: InboundOrderService::new(pool.clone()),
            outbound: OutboundOrderService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
