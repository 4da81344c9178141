//! `GET /health`: whether this depot instance can serve orders.
//!
//! Mounted at the root, outside `/api/v1`. Always answers 200; callers read
//! `status` to tell a reachable database with an unmigrated schema from a
//! database that is down.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    /// `ok`, `degraded` (schema not seeded) or `down` (database unreachable).
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Storage-category and refund-reason lookups hold every known code.
    pub schema_ready: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match depot_db::schema_ready(&state.pool).await {
        Ok(schema_ready) => DatabaseHealth {
            reachable: true,
            schema_ready,
        },
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not query the database");
            DatabaseHealth {
                reachable: depot_db::health_check(&state.pool).await.is_ok(),
                schema_ready: false,
            }
        }
    };

    let status = match (database.reachable, database.schema_ready) {
        (true, true) => "ok",
        (true, false) => "degraded",
        (false, _) => "down",
    };

    Json(HealthResponse {
        service: "depot",
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
