use std::{sync::Arc, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: Arc<DatabaseConnection>,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("connected to database");

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }

    /// Closes the pool once every repository holding it has been dropped.
    pub async fn close(self) -> Result<(), anyhow::Error> {
        match Arc::into_inner(self.db) {
            Some(db) => {
                db.close().await?;
                info!("database connection closed");
            }
            None => warn!("database connection still shared, leaving it to be dropped"),
        }
        Ok(())
    }
}
