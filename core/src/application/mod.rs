use std::{path::Path, sync::Arc};

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::domain::{
    common::{RostraConfig, policies::RostraPolicy, services::Service},
    seed::{
        ports::SeedService,
        value_objects::{DepartmentSeedFile, SeedReport},
    },
};
use crate::infrastructure::{
    crypto::argon2_hasher::Argon2HasherRepository,
    db::postgres::{Postgres, PostgresConfig},
    department::repositories::{PostgresDepartmentRepository, PostgresPositionRepository},
    employee::repositories::PostgresEmployeeRepository,
    health::PostgresHealthCheckRepository,
    jwt::JwtTokenRepository,
    user::repository::PostgresUserRepository,
};

pub type RostraService = Service<
    PostgresUserRepository,
    PostgresEmployeeRepository,
    PostgresDepartmentRepository,
    PostgresPositionRepository,
    Argon2HasherRepository,
    JwtTokenRepository,
    PostgresHealthCheckRepository,
>;

/// Wires the Postgres adapters around an existing connection.
pub fn build_service(db: Arc<DatabaseConnection>, config: &RostraConfig) -> RostraService {
    Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresEmployeeRepository::new(db.clone()),
        PostgresDepartmentRepository::new(db.clone()),
        PostgresPositionRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtTokenRepository::new(&config.jwt.secret, config.jwt.expiration),
        PostgresHealthCheckRepository::new(db),
        RostraPolicy,
    )
}

/// Connects to the database and builds the service on top of it.
pub async fn create_service(config: &RostraConfig) -> Result<(Postgres, RostraService), anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    })
    .await?;

    let service = build_service(postgres.get_db(), config);

    Ok((postgres, service))
}

/// Ensures the admin account exists and, when `departments_file` is given,
/// seeds the departments and positions it lists.
pub async fn seed<S: SeedService>(
    service: &S,
    config: &RostraConfig,
    departments_file: Option<&Path>,
) -> Result<Option<SeedReport>, anyhow::Error> {
    if service.ensure_admin(config.admin.clone()).await? {
        info!("created admin account {}", config.admin.email);
    }

    let Some(path) = departments_file else {
        return Ok(None);
    };

    let content = tokio::fs::read_to_string(path).await?;
    let file: DepartmentSeedFile = serde_json::from_str(&content)?;
    let report = service.seed_departments(file.departments).await?;

    info!(
        "seeded {} departments and {} positions from {}",
        report.departments_created,
        report.positions_created,
        path.display()
    );

    Ok(Some(report))
}
