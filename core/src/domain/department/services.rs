use crate::domain::{
    authentication::{ports::TokenRepository, value_objects::Identity},
    common::{
        entities::{app_errors::CoreError, paged_list::PagedList},
        policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    department::{
        entities::{Department, Position},
        ports::{DepartmentPolicy, DepartmentRepository, DepartmentService, PositionRepository},
        value_objects::{GetDepartmentsInput, GetPositionsInput},
    },
    employee::ports::EmployeeRepository,
    health::ports::HealthCheckRepository,
    user::ports::UserRepository,
};

impl<U, E, D, P, H, T, HC> DepartmentService for Service<U, E, D, P, H, T, HC>
where
    U: UserRepository,
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn get_departments(
        &self,
        identity: Identity,
        input: GetDepartmentsInput,
    ) -> Result<PagedList<Department>, CoreError> {
        ensure_policy(
            self.policy.can_view_department(identity).await,
            "insufficient permissions",
        )?;

        self.department_repository
            .find_all(input.to_predicate())
            .await
    }

    async fn get_positions(
        &self,
        identity: Identity,
        input: GetPositionsInput,
    ) -> Result<PagedList<Position>, CoreError> {
        ensure_policy(
            self.policy.can_view_department(identity).await,
            "insufficient permissions",
        )?;

        self.department_repository
            .get_by_id(input.department_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.position_repository.find_all(input.to_predicate()).await
    }
}
