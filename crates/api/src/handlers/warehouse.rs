//! Handlers for warehouse operators, warehouses and their sections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::error::CoreError;
use depot_core::types::DbId;
use depot_db::models::warehouse::{
    CreateSection, CreateWarehouse, CreateWarehouseOperator, Section, SectionUsage, Warehouse,
    WarehouseOperator,
};
use depot_db::repositories::{SectionRepo, WarehouseOperatorRepo, WarehouseRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/warehouse-operators
pub async fn create_operator(
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouseOperator>,
) -> AppResult<(StatusCode, Json<DataResponse<WarehouseOperator>>)> {
    input.validate()?;
    let operator = WarehouseOperatorRepo::create(&state.pool, &input).await?;
    tracing::info!(operator_id = operator.id, "Warehouse operator created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: operator })))
}

/// POST /api/v1/warehouses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouse>,
) -> AppResult<(StatusCode, Json<DataResponse<Warehouse>>)> {
    input.validate()?;
    WarehouseOperatorRepo::find_by_id(&state.pool, input.operator_id)
        .await?
        .ok_or(CoreError::not_found("WarehouseOperator", input.operator_id))?;

    let warehouse = WarehouseRepo::create(&state.pool, &input).await?;
    tracing::info!(
        warehouse_id = warehouse.id,
        operator_id = warehouse.operator_id,
        "Warehouse created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: warehouse })))
}

/// GET /api/v1/warehouses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Warehouse>>> {
    let warehouse = find_warehouse(&state, id).await?;
    Ok(Json(DataResponse { data: warehouse }))
}

/// POST /api/v1/warehouses/{id}/sections
pub async fn create_section(
    State(state): State<AppState>,
    Path(warehouse_id): Path<DbId>,
    Json(input): Json<CreateSection>,
) -> AppResult<(StatusCode, Json<DataResponse<Section>>)> {
    input.validate()?;
    find_warehouse(&state, warehouse_id).await?;

    let section = SectionRepo::create(&state.pool, warehouse_id, &input).await?;
    tracing::info!(
        section_id = section.id,
        warehouse_id,
        category = %input.category,
        capacity = section.capacity,
        "Section created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// GET /api/v1/warehouses/{id}/sections
pub async fn list_sections(
    State(state): State<AppState>,
    Path(warehouse_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SectionUsage>>>> {
    find_warehouse(&state, warehouse_id).await?;
    let sections = SectionRepo::list_by_warehouse(&state.pool, warehouse_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

async fn find_warehouse(state: &AppState, id: DbId) -> AppResult<Warehouse> {
    let warehouse = WarehouseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Warehouse", id))?;
    Ok(warehouse)
}
