use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a filtered listing together with the totals of the whole result set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub entries: Vec<T>,
    pub page: i64,
    pub data_per_page: i64,
    pub total_pages: i64,
    pub total_data: i64,
}

impl<T> PagedList<T> {
    pub fn new(entries: Vec<T>, limit: i64, offset: i64, total_data: i64) -> Self {
        let (page, total_pages) = if limit > 0 {
            (offset / limit + 1, (total_data + limit - 1) / limit)
        } else {
            (1, 1)
        };

        Self {
            entries,
            page,
            data_per_page: limit,
            total_pages,
            total_data,
        }
    }

    /// A single page holding every row of the result set.
    pub fn unlimited(entries: Vec<T>, total_data: i64) -> Self {
        Self {
            entries,
            page: 1,
            data_per_page: total_data,
            total_pages: 1,
            total_data,
        }
    }
}
