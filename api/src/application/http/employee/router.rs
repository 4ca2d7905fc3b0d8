use axum::{
    Router, middleware,
    routing::get,
};
use utoipa::OpenApi;

use super::handlers::{
    create_employee::{__path_create_employee, create_employee},
    delete_employee::{__path_delete_employee, delete_employee},
    get_employee::{__path_get_employee, get_employee},
    get_employees::{__path_get_employees, get_employees},
    update_employee::{__path_update_employee, update_employee},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_employees,
    get_employee,
    create_employee,
    update_employee,
    delete_employee
))]
pub struct EmployeeApiDoc;

pub fn employee_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/employees"),
            get(get_employees).post(create_employee),
        )
        .route(
            &format!("{root_path}/employees/{{id}}"),
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
