use axum::extract::State;
use rostra_core::domain::{
    common::entities::paged_list::PagedList,
    department::{entities::Department, ports::DepartmentService, value_objects::GetDepartmentsInput},
};

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
    path = "",
    tag = "department",
    summary = "List departments",
    description = "Paged department list. Accepts the generic filter parameters.",
    params(
        ("search" = Option<String>, Query, description = "Contains-match on the name"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("rows" = Option<i64>, Query, description = "Page size, 10 by default"),
        ("limit" = Option<i64>, Query, description = "Page size starting at page 1, -1 returns every row"),
    ),
    responses(
        (status = 200, body = ApiResponse<PagedList<Department>>),
        (status = 400, body = ApiErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn get_departments(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PagedList<Department>>, ApiError> {
    let input = GetDepartmentsInput {
        search: query_params.param("search").map(str::to_string),
        filter: query_params.filter,
    };

    let departments = state
        .service
        .get_departments(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(departments, "Departments retrieved successfully"))
}
