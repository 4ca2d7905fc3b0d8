use axum::extract::State;
use rostra_core::domain::employee::{
    entities::Employee, ports::EmployeeService, value_objects::CreateEmployeeInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        employee::validators::CreateEmployeeValidator,
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
    post,
    path = "",
    tag = "employee",
    summary = "Create an employee",
    description = "Creates the employee together with its USER account. Requires the ADMIN role.",
    request_body = CreateEmployeeValidator,
    responses(
        (status = 201, body = ApiResponse<Employee>, description = "Employee created successfully"),
        (status = 400, body = ApiErrorResponse, description = "Position not found, or NIK, username or email already exists"),
        (status = 403, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse, description = "Invalid payload"),
    ),
    security(("bearer" = []))
)]
pub async fn create_employee(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateEmployeeValidator>,
) -> Result<Response<Employee>, ApiError> {
    let employee = state
        .service
        .create_employee(
            identity,
            CreateEmployeeInput {
                employee: payload.employee.into(),
                user: payload.user.into(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(employee, "Employee created successfully"))
}
