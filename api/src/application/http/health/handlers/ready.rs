use axum::extract::State;
use rostra_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::{ApiResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the database.",
    responses(
        (status = 200, body = ApiResponse<DatabaseHealthStatus>),
        (status = 503, body = ApiErrorResponse, description = "Database unreachable"),
    )
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status, "Service is ready"))
}
