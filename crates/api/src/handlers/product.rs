//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::catalog::parse_lot_order;
use depot_core::error::CoreError;
use depot_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use depot_core::storage::StorageCategory;
use depot_core::types::DbId;
use depot_db::models::product::{CreateProduct, Product, ProductLocation};
use depot_db::repositories::{ProductRepo, SellerRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::query::{LotOrderParams, ProductListParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    input.validate()?;
    SellerRepo::find_by_id(&state.pool, input.seller_id)
        .await?
        .ok_or(CoreError::not_found("Seller", input.seller_id))?;

    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(
        product_id = product.id,
        seller_id = product.seller_id,
        category = %input.category,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// GET /api/v1/products?category=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let category = params
        .category
        .as_deref()
        .map(str::parse::<StorageCategory>)
        .transpose()?;
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let products =
        ProductRepo::list(&state.pool, category.map(StorageCategory::id), limit, offset).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Product", id))?;
    Ok(Json(DataResponse { data: product }))
}

/// GET /api/v1/products/{id}/warehouse?order=L|Q|V
///
/// Unrecognized order codes list by lot id.
/// Lists every lot of the product with the section and warehouse holding
/// it. The top-level section/warehouse are those of the first listed lot.
pub async fn locations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LotOrderParams>,
) -> AppResult<Json<DataResponse<ProductLocation>>> {
    let order = parse_lot_order(params.order.as_deref());

    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Product", id))?;

    let lots = ProductRepo::list_lot_locations(&state.pool, id, order).await?;
    let (section_id, warehouse_id) = lots
        .first()
        .map(|lot| (lot.section_id, lot.warehouse_id))
        .ok_or(CoreError::not_found("Stored lots of product", id))?;

    let location = ProductLocation {
        product_id: id,
        section_id,
        warehouse_id,
        lots,
    };
    Ok(Json(DataResponse { data: location }))
}
