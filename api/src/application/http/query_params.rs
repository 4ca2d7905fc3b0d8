use std::collections::BTreeMap;
use std::str::FromStr;

use rostra_core::domain::query::{
    FilterRequest, FilterValue, OrderDirection, QueryPredicate, Scalar,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParamsError {
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),

    #[error("limit must be a positive integer or -1")]
    InvalidLimit,

    #[error("{0}")]
    InvalidOrderRule(String),

    #[error("rangedFilters[{0}] requires key, start and end")]
    IncompleteRange(String),

    #[error("unsupported query parameter '{0}'")]
    Malformed(String),

    #[error("invalid value for '{name}': {reason}")]
    InvalidParam { name: String, reason: String },
}

#[derive(Debug, Default)]
struct PartialRange {
    key: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

/// A list request: the generic [`FilterRequest`] plus every parameter that is
/// not part of the bracket syntax (endpoint shortcuts such as `search`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub filter: FilterRequest,
    pub extra: Vec<(String, String)>,
}

impl QueryParams {
    /// First non-empty value of a shortcut parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.as_str())
    }

    pub fn parse_param<T>(&self, name: &str) -> Result<Option<T>, QueryParamsError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        self.param(name)
            .map(|value| {
                value.parse::<T>().map_err(|e| QueryParamsError::InvalidParam {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// Parses decoded query pairs. Handles:
    /// - `filters[field]=v` and repeated `filters[field][]=v`
    /// - `searchFilters[field]=v`
    /// - `rangedFilters[i][key|start|end]=v`
    /// - `orderKey`, `orderRule`, `page`, `rows`
    /// - `limit`: page size starting at page 1, `-1` returns every row
    ///
    /// Empty values stand for null.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, QueryParamsError> {
        let mut filter = FilterRequest::new();
        let mut ranges: BTreeMap<usize, PartialRange> = BTreeMap::new();
        let mut extra = Vec::new();
        let mut limit = None;

        for (key, value) in pairs {
            if let Some(rest) = key.strip_prefix("filters[") {
                let (field, tail) = split_bracket(rest, &key)?;
                match tail {
                    "" => set_filter(&mut filter, field, scalar(value).map(FilterValue::One)),
                    "[]" => push_filter_element(&mut filter, field, scalar(value)),
                    _ => return Err(QueryParamsError::Malformed(key.clone())),
                }
            } else if let Some(rest) = key.strip_prefix("searchFilters[") {
                let (field, tail) = split_bracket(rest, &key)?;
                if !tail.is_empty() {
                    return Err(QueryParamsError::Malformed(key.clone()));
                }
                filter.push_search(field, scalar(value));
            } else if let Some(rest) = key.strip_prefix("rangedFilters[") {
                let (index, tail) = split_bracket(rest, &key)?;
                let index: usize = index
                    .parse()
                    .map_err(|_| QueryParamsError::Malformed(key.clone()))?;
                let part = tail
                    .strip_prefix('[')
                    .and_then(|t| t.strip_suffix(']'))
                    .ok_or_else(|| QueryParamsError::Malformed(key.clone()))?;

                let entry = ranges.entry(index).or_default();
                let value = (!value.is_empty()).then_some(value);
                match part {
                    "key" => entry.key = value,
                    "start" => entry.start = value,
                    "end" => entry.end = value,
                    _ => return Err(QueryParamsError::Malformed(key.clone())),
                }
            } else {
                match key.as_str() {
                    "orderKey" => filter.order_key = (!value.is_empty()).then_some(value),
                    "orderRule" if !value.is_empty() => {
                        filter.order_rule = Some(
                            value
                                .parse::<OrderDirection>()
                                .map_err(QueryParamsError::InvalidOrderRule)?,
                        )
                    }
                    "page" if !value.is_empty() => filter.page = Some(positive("page", &value)?),
                    "rows" if !value.is_empty() => filter.rows = Some(positive("rows", &value)?),
                    "limit" if !value.is_empty() => limit = Some(page_size(&value)?),
                    "orderRule" | "page" | "rows" | "limit" => {}
                    _ => extra.push((key, value)),
                }
            }
        }

        if let Some(limit) = limit {
            filter.rows = Some(limit);
            filter.page.get_or_insert(1);
        }

        for (index, range) in ranges {
            match (range.key, range.start, range.end) {
                (Some(key), Some(start), Some(end)) => {
                    filter.push_range(key, Scalar::Text(start), Scalar::Text(end))
                }
                _ => return Err(QueryParamsError::IncompleteRange(index.to_string())),
            }
        }

        Ok(Self { filter, extra })
    }
}

fn scalar(value: String) -> Option<Scalar> {
    (!value.is_empty()).then_some(Scalar::Text(value))
}

/// Splits `field]tail` into `field` and `tail`.
fn split_bracket<'a>(rest: &'a str, key: &str) -> Result<(&'a str, &'a str), QueryParamsError> {
    match rest.split_once(']') {
        Some((field, tail)) if !field.is_empty() => Ok((field, tail)),
        _ => Err(QueryParamsError::Malformed(key.to_string())),
    }
}

fn positive(name: &'static str, value: &str) -> Result<i64, QueryParamsError> {
    match value.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(QueryParamsError::NotPositive(name)),
    }
}

fn page_size(value: &str) -> Result<i64, QueryParamsError> {
    match value.parse::<i64>() {
        Ok(n) if n >= 1 || n == QueryPredicate::UNLIMITED => Ok(n),
        _ => Err(QueryParamsError::InvalidLimit),
    }
}

fn set_filter(filter: &mut FilterRequest, field: &str, value: Option<FilterValue>) {
    match filter.filters.iter_mut().find(|(key, _)| key == field) {
        Some(entry) => entry.1 = value,
        None => filter.push_filter(field, value),
    }
}

fn push_filter_element(filter: &mut FilterRequest, field: &str, element: Option<Scalar>) {
    match filter.filters.iter_mut().find(|(key, _)| key == field) {
        Some((_, Some(FilterValue::Many(values)))) => values.push(element),
        Some(entry) => entry.1 = Some(FilterValue::Many(vec![element])),
        None => filter.push_filter(field, Some(FilterValue::Many(vec![element]))),
    }
}
