//! Route definitions for the `/inbound-orders` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::inbound_order;
use crate::state::AppState;

/// Routes mounted at `/inbound-orders`.
///
/// ```text
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}/item-batches     -> replace_batches
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(inbound_order::create))
        .route("/{id}", get(inbound_order::get_by_id))
        .route("/{id}/item-batches", put(inbound_order::replace_batches))
}
