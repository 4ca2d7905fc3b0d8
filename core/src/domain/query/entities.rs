use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single untyped value supplied by a client.
///
/// Query-string input always arrives as `Text`; the other variants exist for
/// callers that build requests programmatically or from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Value of an exact-match filter: one scalar or a list of candidates.
/// List elements may be null; they are dropped when the predicate is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FilterValue {
    One(Scalar),
    Many(Vec<Option<Scalar>>),
}

impl From<Scalar> for FilterValue {
    fn from(value: Scalar) -> Self {
        FilterValue::One(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::One(value.into())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::One(value.into())
    }
}

impl From<Vec<Option<Scalar>>> for FilterValue {
    fn from(values: Vec<Option<Scalar>>) -> Self {
        FilterValue::Many(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::Many(values.into_iter().map(|v| Some(v.into())).collect())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for OrderDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            other => Err(format!("invalid order rule '{other}', expected 'asc' or 'desc'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RangedFilter {
    pub key: String,
    pub start: Scalar,
    pub end: Scalar,
}

/// Client-side description of a list query.
///
/// `filters` and `search_filters` keep insertion order; a `None` value is a
/// placeholder for "nothing selected" and contributes no condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterRequest {
    pub filters: Vec<(String, Option<FilterValue>)>,
    pub search_filters: Vec<(String, Option<Scalar>)>,
    pub ranged_filters: Vec<RangedFilter>,
    pub order_key: Option<String>,
    pub order_rule: Option<OrderDirection>,
    pub page: Option<i64>,
    pub rows: Option<i64>,
}

impl FilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_filter(&mut self, key: impl Into<String>, value: Option<FilterValue>) {
        self.filters.push((key.into(), value));
    }

    pub fn push_search(&mut self, key: impl Into<String>, value: Option<Scalar>) {
        self.search_filters.push((key.into(), value));
    }

    pub fn push_range(&mut self, key: impl Into<String>, start: Scalar, end: Scalar) {
        self.ranged_filters.push(RangedFilter {
            key: key.into(),
            start,
            end,
        });
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.push_filter(key, Some(value.into()));
        self
    }

    pub fn with_search(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.push_search(key, Some(value.into()));
        self
    }

    pub fn with_range(
        mut self,
        key: impl Into<String>,
        start: impl Into<Scalar>,
        end: impl Into<Scalar>,
    ) -> Self {
        self.push_range(key, start.into(), end.into());
        self
    }

    pub fn with_order(mut self, key: impl Into<String>, rule: Option<OrderDirection>) -> Self {
        self.order_key = Some(key.into());
        self.order_rule = rule;
        self
    }

    pub fn with_page(mut self, page: i64, rows: Option<i64>) -> Self {
        self.page = Some(page);
        self.rows = rows;
        self
    }
}
