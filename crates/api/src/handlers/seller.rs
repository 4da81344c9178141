//! Handlers for the `/sellers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::error::CoreError;
use depot_core::types::DbId;
use depot_db::models::seller::{CreateSeller, Seller, UpdateSellerStatus};
use depot_db::repositories::SellerRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/sellers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeller>,
) -> AppResult<(StatusCode, Json<DataResponse<Seller>>)> {
    input.validate()?;
    let seller = SellerRepo::create(&state.pool, &input).await?;
    tracing::info!(seller_id = seller.id, "Seller registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: seller })))
}

/// GET /api/v1/sellers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Seller>>> {
    let seller = SellerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Seller", id))?;
    Ok(Json(DataResponse { data: seller }))
}

/// PUT /api/v1/sellers/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSellerStatus>,
) -> AppResult<Json<DataResponse<Seller>>> {
    let seller = SellerRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or(CoreError::not_found("Seller", id))?;
    tracing::info!(seller_id = id, is_active = seller.is_active, "Seller status changed");
    Ok(Json(DataResponse { data: seller }))
}
