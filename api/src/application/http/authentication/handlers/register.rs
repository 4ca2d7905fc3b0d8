use axum::extract::State;
use rostra_core::domain::{
    authentication::{ports::AuthService, value_objects::RegisterInput},
    user::entities::User,
};

use crate::application::http::{
    authentication::validators::RegisterValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::{ApiResponse, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register a new user",
    description = "Creates a USER account. The email and username must not be in use.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = ApiResponse<User>, description = "User registered successfully"),
        (status = 400, body = ApiErrorResponse, description = "Email or username already in use"),
        (status = 422, body = ApiErrorResponse, description = "Invalid payload"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .register(RegisterInput {
            email: payload.email,
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user, "User registered successfully"))
}
