use crate::app::server::AppState;
use crate::core::sanitizer::clean_response;
use crate::domain::model::AggregateResponse;
use crate::utils::error::Result;
use axum::{extract::State, Json};
use serde::Serialize;

pub const UNSHIPPED_STATUS: &str = "Unshipped";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /api/orders/unshipped`: every unshipped order, cleaned.
pub async fn get_unshipped_orders(
    State(state): State<AppState>,
) -> Result<Json<AggregateResponse>> {
    let response = state
        .paginator
        .fetch_all(UNSHIPPED_STATUS, state.max_pages)
        .await?;

    Ok(Json(clean_response(response)))
}
