use axum::extract::{Path, State};
use rostra_core::domain::employee::{
    entities::Employee, ports::EmployeeService, value_objects::UpdateEmployeeInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        employee::validators::UpdateEmployeeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::{ApiResponse, Response},
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "employee",
    summary = "Update an employee",
    description = "Partially updates the employee and its linked user account. Requires the ADMIN role.",
    params(("id" = Uuid, Path, description = "Employee id")),
    request_body = UpdateEmployeeValidator,
    responses(
        (status = 200, body = ApiResponse<Employee>, description = "Employee updated successfully"),
        (status = 400, body = ApiErrorResponse, description = "Employee or position not found, or NIK, username or email already exists"),
        (status = 403, body = ApiErrorResponse),
    ),
    security(("bearer" = []))
)]
pub async fn update_employee(
    Path(employee_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateEmployeeValidator>,
) -> Result<Response<Employee>, ApiError> {
    let employee = state
        .service
        .update_employee(
            identity,
            UpdateEmployeeInput {
                employee_id,
                employee: payload.employee.map(Into::into).unwrap_or_default(),
                user: payload.user.map(Into::into).unwrap_or_default(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(employee, "Employee updated successfully"))
}
