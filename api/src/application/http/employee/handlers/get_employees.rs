use axum::extract::State;
use rostra_core::domain::{
    common::entities::paged_list::PagedList,
    employee::{
        entities::Employee,
        ports::EmployeeService,
        value_objects::{EmployeeSortKey, EmployeeStatus, GetEmployeesInput},
    },
    query::OrderDirection,
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
    path = "",
    tag = "employee",
    summary = "List employees",
    description = "Paged employee list. Accepts the generic `filters[..]`, `searchFilters[..]`, `rangedFilters[i][..]`, `orderKey`, `orderRule`, `page` and `rows` parameters plus the shortcuts below.",
    params(
        ("search" = Option<String>, Query, description = "Contains-match on fullName, nik or phone"),
        ("status" = Option<String>, Query, description = "`active` or `inactive`"),
        ("positionId" = Option<Uuid>, Query, description = "Position of the employee"),
        ("sortBy" = Option<String>, Query, description = "`fullName`, `nik`, `createdAt` or `updatedAt`"),
        ("sortOrder" = Option<String>, Query, description = "`asc` or `desc`"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("rows" = Option<i64>, Query, description = "Page size, 10 by default"),
        ("limit" = Option<i64>, Query, description = "Page size starting at page 1, -1 returns every row"),
    ),
    responses(
        (status = 200, body = ApiResponse<PagedList<Employee>>),
        (status = 400, body = ApiErrorResponse, description = "Malformed or unknown filter"),
        (status = 401, body = ApiErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn get_employees(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PagedList<Employee>>, ApiError> {
    let input = GetEmployeesInput {
        search: query_params.param("search").map(str::to_string),
        status: query_params.parse_param::<EmployeeStatus>("status")?,
        position_id: query_params.parse_param::<Uuid>("positionId")?,
        sort_by: query_params.parse_param::<EmployeeSortKey>("sortBy")?,
        sort_order: query_params.parse_param::<OrderDirection>("sortOrder")?,
        filter: query_params.filter,
    };

    let employees = state
        .service
        .get_employees(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(employees, "Employees retrieved successfully"))
}
