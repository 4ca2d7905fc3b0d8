use chrono::{DateTime, Utc};

use super::entities::{OrderDirection, Scalar};

/// Bound of a ranged condition. Bounds recognised as ISO-8601 dates are parsed,
/// anything else is kept as supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeBound {
    Date(DateTime<Utc>),
    Value(Scalar),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals { field: String, value: Scalar },
    OneOf { field: String, values: Vec<Scalar> },
    Contains {
        field: String,
        value: String,
        ignore_case: bool,
    },
    Range {
        field: String,
        gte: RangeBound,
        lte: RangeBound,
    },
    Or(Vec<Condition>),
    Nested {
        relation: String,
        condition: Box<Condition>,
    },
}

impl Condition {
    pub fn equals(field: impl Into<String>, value: Scalar) -> Self {
        Condition::Equals {
            field: field.into(),
            value,
        }
    }

    /// Case-sensitive substring match.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Contains {
            field: field.into(),
            value: value.into(),
            ignore_case: false,
        }
    }

    pub fn contains_ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Contains {
            field: field.into(),
            value: value.into(),
            ignore_case: true,
        }
    }

    pub fn nested(relation: impl Into<String>, condition: Condition) -> Self {
        Condition::Nested {
            relation: relation.into(),
            condition: Box::new(condition),
        }
    }

    /// Rewrites OR groups whose members are all equalities on the same field
    /// (optionally under the same relation) into a single `OneOf`.
    pub fn normalize(self) -> Self {
        match self {
            Condition::Or(children) => {
                let children: Vec<Condition> =
                    children.into_iter().map(Condition::normalize).collect();
                collapse_equalities(&children).unwrap_or(Condition::Or(children))
            }
            Condition::Nested {
                relation,
                condition,
            } => Condition::nested(relation, condition.normalize()),
            other => other,
        }
    }
}

fn collapse_equalities(children: &[Condition]) -> Option<Condition> {
    let first = children.first()?;

    match first {
        Condition::Equals { field, .. } => {
            let mut values = Vec::with_capacity(children.len());
            for child in children {
                match child {
                    Condition::Equals { field: f, value } if f == field => {
                        values.push(value.clone())
                    }
                    _ => return None,
                }
            }
            Some(Condition::OneOf {
                field: field.clone(),
                values,
            })
        }
        Condition::Nested { relation, .. } => {
            let mut inner = Vec::with_capacity(children.len());
            for child in children {
                match child {
                    Condition::Nested {
                        relation: r,
                        condition,
                    } if r == relation => inner.push((**condition).clone()),
                    _ => return None,
                }
            }
            collapse_equalities(&inner).map(|c| Condition::nested(relation.clone(), c))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: OrderDirection,
}

/// Storage-agnostic result of a [`FilterRequest`](super::FilterRequest):
/// `conditions` are ANDed together.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPredicate {
    pub conditions: Vec<Condition>,
    pub order_by: Option<OrderBy>,
    pub limit: i64,
    pub offset: i64,
}

impl QueryPredicate {
    /// Page size that loads every matching row.
    pub const UNLIMITED: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        self.limit == Self::UNLIMITED
    }

    /// Adds a condition that every row must satisfy, e.g. a parent scope.
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}
