use axum::extract::{Path, State};
use rostra_core::domain::employee::{entities::Employee, ports::EmployeeService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::{ApiResponse, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "employee",
    summary = "Get an employee",
    params(("id" = Uuid, Path, description = "Employee id")),
    responses(
        (status = 200, body = ApiResponse<Employee>),
        (status = 400, body = ApiErrorResponse, description = "Employee not found"),
    ),
    security(("bearer" = []))
)]
pub async fn get_employee(
    Path(employee_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Employee>, ApiError> {
    let employee = state
        .service
        .get_employee(identity, employee_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(employee, "Employee retrieved successfully"))
}
