use chrono::{DateTime, NaiveDate};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    Condition as SqlCondition, EntityTrait, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, Select, Value,
};
use uuid::Uuid;

use super::field_map::{Field, FieldKind, FieldMap};
use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{Condition, OrderDirection, QueryPredicate, RangeBound, Scalar},
};

/// Applies the conditions and ordering of `predicate` to `select`.
/// Paging is left to the caller so the same query can be counted first.
pub fn apply_predicate<E: EntityTrait>(
    select: Select<E>,
    predicate: &QueryPredicate,
    fields: &FieldMap,
) -> Result<Select<E>, CoreError> {
    let mut translator = Translator {
        root: fields,
        joins: Vec::new(),
    };

    let mut filter = SqlCondition::all();
    for condition in &predicate.conditions {
        filter = filter.add(translator.condition(&condition.clone().normalize(), fields, false)?);
    }

    let (field, order) = match &predicate.order_by {
        Some(order_by) => (
            translator.resolve_path(&order_by.field)?,
            match order_by.direction {
                OrderDirection::Asc => Order::Asc,
                OrderDirection::Desc => Order::Desc,
            },
        ),
        None => (fields.get("createdAt")?, Order::Desc),
    };

    let mut select = if predicate.conditions.is_empty() {
        select
    } else {
        select.filter(filter)
    };
    for relation in &translator.joins {
        let (_, relation) = fields.get_relation(relation)?;
        select = select.join(JoinType::LeftJoin, (relation.join)());
    }

    Ok(select.order_by(SimpleExpr::from(field.expr()), order))
}

/// Converts the page window into SQL `LIMIT`/`OFFSET` values. An unlimited
/// predicate has no `LIMIT` and starts at the first row.
pub fn page_window(predicate: &QueryPredicate) -> Result<(Option<u64>, u64), CoreError> {
    if predicate.is_unlimited() {
        return Ok((None, 0));
    }

    let limit = u64::try_from(predicate.limit)
        .map_err(|_| CoreError::InvalidFilter("rows must not be negative".to_string()))?;
    let offset = u64::try_from(predicate.offset)
        .map_err(|_| CoreError::InvalidFilter("page must be positive".to_string()))?;

    Ok((Some(limit), offset))
}

struct Translator<'a> {
    root: &'a FieldMap,
    joins: Vec<&'static str>,
}

impl<'a> Translator<'a> {
    fn join(&mut self, relation: &str) -> Result<&'a FieldMap, CoreError> {
        let (name, relation) = self.root.get_relation(relation)?;
        if !self.joins.contains(&name) {
            self.joins.push(name);
        }
        Ok(&relation.fields)
    }

    fn resolve_path(&mut self, path: &str) -> Result<Field, CoreError> {
        match path.split_once('.') {
            Some((relation, column)) => self.join(relation)?.get(column),
            None => self.root.get(path),
        }
    }

    fn condition(
        &mut self,
        condition: &Condition,
        fields: &'a FieldMap,
        nested: bool,
    ) -> Result<SqlCondition, CoreError> {
        let expr = match condition {
            Condition::Equals { field, value } => {
                let column = fields.get(field)?;
                column.expr().eq(coerce(&column, field, value)?)
            }
            Condition::OneOf { field, values } => {
                let column = fields.get(field)?;
                let values = values
                    .iter()
                    .map(|value| coerce(&column, field, value))
                    .collect::<Result<Vec<Value>, CoreError>>()?;
                column.expr().is_in(values)
            }
            Condition::Contains {
                field,
                value,
                ignore_case,
            } => {
                let column = fields.get(field)?;
                if column.kind != FieldKind::Text {
                    return Err(CoreError::InvalidFilter(format!(
                        "field '{field}' does not support search"
                    )));
                }
                if *ignore_case {
                    Expr::expr(Func::lower(column.expr())).like(
                        LikeExpr::new(like_pattern(&value.to_lowercase())).escape('\\'),
                    )
                } else {
                    column
                        .expr()
                        .like(LikeExpr::new(like_pattern(value)).escape('\\'))
                }
            }
            Condition::Range { field, gte, lte } => {
                let column = fields.get(field)?;
                return Ok(SqlCondition::all()
                    .add(column.expr().gte(coerce_bound(&column, field, gte)?))
                    .add(column.expr().lte(coerce_bound(&column, field, lte)?)));
            }
            Condition::Or(children) => {
                let mut any = SqlCondition::any();
                for child in children {
                    any = any.add(self.condition(child, fields, nested)?);
                }
                return Ok(any);
            }
            Condition::Nested {
                relation,
                condition,
            } => {
                if nested {
                    return Err(CoreError::InvalidField(relation.clone()));
                }
                let related = self.join(relation)?;
                return self.condition(condition, related, true);
            }
        };

        Ok(SqlCondition::all().add(expr))
    }
}

/// `%value%` with LIKE wildcards escaped.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn invalid_value(field: &str, value: &impl std::fmt::Display) -> CoreError {
    CoreError::InvalidFilter(format!("invalid value '{value}' for field '{field}'"))
}

fn parse_datetime(text: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok().or_else(|| {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().fixed_offset())
    })
}

fn coerce(column: &Field, field: &str, value: &Scalar) -> Result<Value, CoreError> {
    let coerced = match (column.kind, value) {
        (FieldKind::Text, value) => Some(Value::from(value.to_string())),
        (FieldKind::Integer, Scalar::Int(i)) => Some(Value::from(*i)),
        (FieldKind::Integer, Scalar::Text(text)) => text.parse::<i64>().ok().map(Value::from),
        (FieldKind::Boolean, Scalar::Bool(b)) => Some(Value::from(*b)),
        (FieldKind::Boolean, Scalar::Text(text)) => match text.as_str() {
            "true" => Some(Value::from(true)),
            "false" => Some(Value::from(false)),
            _ => None,
        },
        (FieldKind::Uuid, Scalar::Text(text)) => Uuid::parse_str(text).ok().map(Value::from),
        (FieldKind::Date, Scalar::Text(text)) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(Value::from),
        (FieldKind::DateTime, Scalar::Text(text)) => parse_datetime(text).map(Value::from),
        _ => None,
    };

    coerced.ok_or_else(|| invalid_value(field, value))
}

fn coerce_bound(column: &Field, field: &str, bound: &RangeBound) -> Result<Value, CoreError> {
    match (column.kind, bound) {
        (FieldKind::DateTime, RangeBound::Date(date)) => Ok(Value::from(date.fixed_offset())),
        (FieldKind::Date, RangeBound::Date(date)) => Ok(Value::from(date.date_naive())),
        (_, RangeBound::Date(date)) => Err(invalid_value(field, &date.to_rfc3339())),
        (_, RangeBound::Value(value)) => coerce(column, field, value),
    }
}
