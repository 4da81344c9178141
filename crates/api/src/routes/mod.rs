pub mod health;
pub mod inbound_order;
pub mod outbound_order;
pub mod product;
pub mod seller;
pub mod warehouse;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sellers                                 register
/// /sellers/{id}                            get
/// /sellers/{id}/status                     activate / deactivate (PUT)
///
/// /products                                list, create
/// /products/{id}                           get
/// /products/{id}/warehouse                 lot locations
///
/// /warehouse-operators                     create
/// /warehouses                              create
/// /warehouses/{id}                         get
/// /warehouses/{id}/sections                list (with used volume), create
///
/// /inbound-orders                          create
/// /inbound-orders/{id}                     get (with batches)
/// /inbound-orders/{id}/item-batches        replace batches (PUT)
///
/// /outbound-orders                         create
/// /outbound-orders/{id}                    get (with picks)
/// /outbound-orders/{id}/item-batches       replace picks (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sellers", seller::router())
        .nest("/products", product::router())
        .nest("/warehouse-operators", warehouse::operator_router())
        .nest("/warehouses", warehouse::router())
        .nest("/inbound-orders", inbound_order::router())
        .nest("/outbound-orders", outbound_order::router())
}
