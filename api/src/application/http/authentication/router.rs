use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    register::{__path_register, register},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(register, login))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/auth/register"), post(register))
        .route(&format!("{root_path}/auth/login"), post(login))
}
