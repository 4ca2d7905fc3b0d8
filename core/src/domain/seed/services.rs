use tracing::{debug, info};

use crate::domain::{
    authentication::ports::TokenRepository,
    common::{AdminConfig, entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    department::{
        entities::{Department, Position},
        ports::{DepartmentRepository, PositionRepository},
    },
    employee::ports::EmployeeRepository,
    health::ports::HealthCheckRepository,
    seed::{
        ports::SeedService,
        value_objects::{DepartmentSeed, SeedReport},
    },
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};

impl<U, E, D, P, H, T, HC> SeedService for Service<U, E, D, P, H, T, HC>
where
    U: UserRepository,
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn ensure_admin(&self, admin: AdminConfig) -> Result<bool, CoreError> {
        if self.user_repository.count_by_role(Role::Admin).await? != 0 {
            debug!("admin already seeded");
            return Ok(false);
        }

        let password_hash = self.hasher_repository.hash_password(&admin.password).await?;
        let user = User::new(admin.email, admin.username, password_hash, Role::Admin);
        self.user_repository.create_user(user).await?;
        info!("admin seeded");

        Ok(true)
    }

    async fn seed_departments(
        &self,
        departments: Vec<DepartmentSeed>,
    ) -> Result<SeedReport, CoreError> {
        let mut report = SeedReport::default();

        for seed in departments {
            let department = match self
                .department_repository
                .get_by_name(seed.name.clone())
                .await?
            {
                Some(department) => department,
                None => {
                    let department = self
                        .department_repository
                        .create(Department::new(seed.name.clone()))
                        .await?;
                    report.departments_created += 1;
                    info!(name = %seed.name, "created department");
                    department
                }
            };

            for name in seed.positions {
                let existing = self
                    .position_repository
                    .get_by_name(department.id, name.clone())
                    .await?;
                if existing.is_some() {
                    continue;
                }

                self.position_repository
                    .create(Position::new(name, department.id))
                    .await?;
                report.positions_created += 1;
            }
        }

        info!(
            departments = report.departments_created,
            positions = report.positions_created,
            "department seeding completed"
        );

        Ok(report)
    }
}
