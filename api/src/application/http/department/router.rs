use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_departments::{__path_get_departments, get_departments},
    get_positions::{__path_get_positions, get_positions},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_departments, get_positions))]
pub struct DepartmentApiDoc;

pub fn department_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/departments"), get(get_departments))
        .route(
            &format!("{root_path}/departments/{{department_id}}/positions"),
            get(get_positions),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
