use axum::extract::{Path, State};
use rostra_core::domain::{
    common::entities::paged_list::PagedList,
    department::{entities::Position, ports::DepartmentService, value_objects::GetPositionsInput},
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        query_extractor::QueryParamsExtractor,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::{ApiResponse, Response},
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/{department_id}/positions",
    tag = "department",
    summary = "List the positions of a department",
    params(
        ("department_id" = Uuid, Path, description = "Department id"),
        ("search" = Option<String>, Query, description = "Contains-match on the name"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("rows" = Option<i64>, Query, description = "Page size, 10 by default"),
        ("limit" = Option<i64>, Query, description = "Page size starting at page 1, -1 returns every row"),
    ),
    responses(
        (status = 200, body = ApiResponse<PagedList<Position>>),
        (status = 404, body = ApiErrorResponse, description = "Department not found"),
    ),
    security(("bearer" = []))
)]
pub async fn get_positions(
    Path(department_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PagedList<Position>>, ApiError> {
    let input = GetPositionsInput {
        department_id,
        search: query_params.param("search").map(str::to_string),
        filter: query_params.filter,
    };

    let positions = state
        .service
        .get_positions(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(positions, "Positions retrieved successfully"))
}
