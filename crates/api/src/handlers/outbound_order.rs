//! Handlers for the `/outbound-orders` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::types::{self, DbId};
use depot_db::models::outbound_order::{
    CreateOutboundOrder, CreateRefund, OutboundOrderWithItems, RefundWithOrder,
    ReplaceOutboundItems,
};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/outbound-orders
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOutboundOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<OutboundOrderWithItems>>)> {
    input.validate()?;
    let order = state.outbound.create(&input.items, types::today()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/outbound-orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OutboundOrderWithItems>>> {
    let order = state.outbound.get(id).await?;
    Ok(Json(DataResponse { data: order }))
}

/// PUT /api/v1/outbound-orders/{id}/item-batches
pub async fn replace_items(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceOutboundItems>,
) -> AppResult<Json<DataResponse<OutboundOrderWithItems>>> {
    input.validate()?;
    let order = state
        .outbound
        .replace_items(id, &input.items, types::today())
        .await?;
    Ok(Json(DataResponse { data: order }))
}

/// POST /api/v1/outbound-orders/{id}/refund
///
/// Returns every picked unit to its lot and records the reason.
pub async fn refund(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRefund>,
) -> AppResult<(StatusCode, Json<DataResponse<RefundWithOrder>>)> {
    let refund = state
        .outbound
        .refund(id, input.reason, types::today())
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: refund })))
}
