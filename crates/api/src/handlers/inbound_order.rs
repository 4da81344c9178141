//! Handlers for the `/inbound-orders` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::types::{self, DbId};
use depot_db::models::inbound_order::{
    CreateInboundOrder, InboundOrderWithBatches, ItemBatch, ReplaceItemBatches,
};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/inbound-orders
///
/// Responds with the created batches.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInboundOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<ItemBatch>>>)> {
    input.validate()?;
    let batches = state.inbound.create(&input, types::today()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: batches })))
}

/// GET /api/v1/inbound-orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<InboundOrderWithBatches>>> {
    let order = state.inbound.get(id).await?;
    Ok(Json(DataResponse { data: order }))
}

/// PUT /api/v1/inbound-orders/{id}/item-batches
///
/// Replaces the whole batch list; batches missing from the body are removed.
pub async fn replace_batches(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceItemBatches>,
) -> AppResult<Json<DataResponse<Vec<ItemBatch>>>> {
    input.validate()?;
    let batches = state.inbound.replace_batches(id, &input.item_batches).await?;
    Ok(Json(DataResponse { data: batches }))
}
