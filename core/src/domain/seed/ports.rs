use crate::domain::{
    common::{AdminConfig, entities::app_errors::CoreError},
    seed::value_objects::{DepartmentSeed, SeedReport},
};

pub trait SeedService: Send + Sync {
    /// Creates the admin account unless an `ADMIN` user already exists.
    /// Returns whether an account was created.
    fn ensure_admin(
        &self,
        admin: AdminConfig,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Creates the departments and positions that do not exist yet, matched by name.
    fn seed_departments(
        &self,
        departments: Vec<DepartmentSeed>,
    ) -> impl Future<Output = Result<SeedReport, CoreError>> + Send;
}
