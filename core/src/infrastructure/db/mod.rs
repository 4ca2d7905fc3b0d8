pub mod postgres;

use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// Maps a failed write, surfacing unique constraint violations as conflicts.
pub(crate) fn map_write_error(action: &str, e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            error!("Failed to {}: unique constraint violation: {}", action, detail);
            CoreError::AlreadyExists("Resource already exists".to_string())
        }
        _ => {
            error!("Failed to {}: {}", action, e);
            CoreError::InternalServerError
        }
    }
}
