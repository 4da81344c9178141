//! Route definitions for the `/outbound-orders` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::outbound_order;
use crate::state::AppState;

/// Routes mounted at `/outbound-orders`.
///
/// ```text
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}/item-batches     -> replace_items
/// POST   /{id}/refund           -> refund
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(outbound_order::create))
        .route("/{id}", get(outbound_order::get_by_id))
        .route("/{id}/item-batches", put(outbound_order::replace_items))
        .route("/{id}/refund", post(outbound_order::refund))
}
