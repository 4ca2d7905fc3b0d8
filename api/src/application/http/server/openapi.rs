use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, department::router::DepartmentApiDoc,
    employee::router::EmployeeApiDoc, health::router::HealthApiDoc,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rostra API",
        description = "Employees, departments and positions of an organization"
    ),
    modifiers(&BearerSecurity),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/employees", api = EmployeeApiDoc),
        (path = "/departments", api = DepartmentApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
