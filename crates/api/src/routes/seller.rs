//! Route definitions for the `/sellers` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::seller;
use crate::state::AppState;

/// Routes mounted at `/sellers`.
///
/// ```text
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}/status     -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(seller::create))
        .route("/{id}", get(seller::get_by_id))
        .route("/{id}/status", put(seller::update_status))
}
