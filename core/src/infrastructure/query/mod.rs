//! Translation of [`QueryPredicate`]s into sea-orm selects.

pub mod field_map;
pub mod translator;

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, Select};
use tracing::error;

use crate::domain::{
    common::entities::{app_errors::CoreError, paged_list::PagedList},
    query::QueryPredicate,
};

pub use field_map::{FieldKind, FieldMap};
pub use translator::{apply_predicate, page_window};

/// Counts the rows matching `predicate`, then loads the requested page.
pub async fn fetch_page<E, T>(
    db: &DatabaseConnection,
    select: Select<E>,
    predicate: &QueryPredicate,
    fields: &FieldMap,
) -> Result<PagedList<T>, CoreError>
where
    E: EntityTrait,
    E::Model: Sync,
    T: From<E::Model>,
{
    let query = apply_predicate(select, predicate, fields)?;
    let (limit, offset) = page_window(predicate)?;

    let total_data = query.clone().count(db).await.map_err(|e| {
        error!("Failed to count {} rows: {}", E::default().table_name(), e);
        CoreError::InternalServerError
    })?;

    let models = query.limit(limit).offset(offset).all(db).await.map_err(|e| {
        error!("Failed to fetch {} rows: {}", E::default().table_name(), e);
        CoreError::InternalServerError
    })?;

    let entries = models.into_iter().map(T::from).collect::<Vec<T>>();
    let total_data = i64::try_from(total_data).unwrap_or(i64::MAX);

    if predicate.is_unlimited() {
        return Ok(PagedList::unlimited(entries, total_data));
    }

    Ok(PagedList::new(
        entries,
        predicate.limit,
        predicate.offset,
        total_data,
    ))
}
