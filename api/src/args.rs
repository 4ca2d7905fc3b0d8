use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rostra_core::domain::common::{AdminConfig, DatabaseConfig, JwtConfig, RostraConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "rostra", version, about = "Employee, department and position management API")]
pub struct Args {
    #[arg(long, env = "ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub jwt: JwtArgs,

    #[command(flatten)]
    pub admin: AdminArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
    Test,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Comma separated; ignored in development, where any origin is accepted.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Prefix of every route, e.g. `/api/v1`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub url: String,

    #[arg(long = "database-max-connections", env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct JwtArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub secret: String,

    /// Access token lifetime in seconds.
    #[arg(long = "jwt-expiration", env = "JWT_EXPIRATION", default_value_t = 86400)]
    pub expiration: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AdminArgs {
    #[arg(long = "admin-email", env = "ADMIN_EMAIL", default_value = "admin@rostra.local")]
    pub email: String,

    #[arg(long = "admin-username", env = "ADMIN_USERNAME", default_value = "admin")]
    pub username: String,

    #[arg(long = "admin-password", env = "ADMIN_PASSWORD")]
    pub password: String,

    /// JSON file listing the departments and positions to create at startup.
    #[arg(long = "seed-departments-file", env = "SEED_DEPARTMENTS_FILE")]
    pub seed_departments_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
}

impl From<Args> for RostraConfig {
    fn from(args: Args) -> Self {
        RostraConfig {
            database: DatabaseConfig {
                url: args.db.url,
                max_connections: args.db.max_connections,
            },
            jwt: JwtConfig {
                secret: args.jwt.secret,
                expiration: args.jwt.expiration,
            },
            admin: AdminConfig {
                email: args.admin.email,
                username: args.admin.username,
                password: args.admin.password,
            },
        }
    }
}
