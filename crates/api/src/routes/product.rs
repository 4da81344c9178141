//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                  -> list (?category=&limit=&offset=)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// GET    /{id}/warehouse    -> locations (?order=L|Q|V)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/{id}", get(product::get_by_id))
        .route("/{id}/warehouse", get(product::locations))
}
