//! Route definitions for warehouse operators, warehouses and sections.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::warehouse;
use crate::state::AppState;

/// Routes mounted at `/warehouse-operators`.
///
/// ```text
/// POST   /    -> create_operator
/// ```
pub fn operator_router() -> Router<AppState> {
    Router::new().route("/", post(warehouse::create_operator))
}

/// Routes mounted at `/warehouses`.
///
/// ```text
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// GET    /{id}/sections     -> list_sections
/// POST   /{id}/sections     -> create_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(warehouse::create))
        .route("/{id}", get(warehouse::get_by_id))
        .route(
            "/{id}/sections",
            get(warehouse::list_sections).post(warehouse::create_section),
        )
}
