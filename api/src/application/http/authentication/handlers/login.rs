use axum::extract::State;
use rostra_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthenticateOutput, LoginInput},
};

use crate::application::http::{
    authentication::validators::LoginValidator,
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
    path = "/login",
    tag = "auth",
    summary = "Login a user",
    description = "Exchanges an email and password for an access token.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = ApiResponse<AuthenticateOutput>, description = "User logged in successfully"),
        (status = 400, body = ApiErrorResponse, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<AuthenticateOutput>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(output, "Login successful"))
}
