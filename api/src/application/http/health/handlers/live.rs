use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::{ApiResponse, Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveStatus {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = ApiResponse<LiveStatus>))
)]
pub async fn live() -> Response<LiveStatus> {
    Response::OK(
        LiveStatus {
            status: "UP".to_string(),
        },
        "Service is alive",
    )
}
