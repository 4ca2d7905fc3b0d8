use crate::domain::{
    authentication::ports::TokenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    department::ports::{DepartmentRepository, PositionRepository},
    employee::ports::EmployeeRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    user::ports::UserRepository,
};

impl<U, E, D, P, H, T, HC> HealthCheckService for Service<U, E, D, P, H, T, HC>
where
    U: UserRepository,
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
