use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use super::entities::{FilterRequest, FilterValue, OrderDirection, RangedFilter, Scalar};
use super::predicate::{Condition, OrderBy, QueryPredicate, RangeBound};

pub const DEFAULT_ROWS: i64 = 10;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?Z|\d{4}-\d{2}-\d{2})$")
        .expect("static date pattern")
});

/// Wraps `condition` under `relation` when `key` is of the form `relation.column`.
/// Only the first `.` is significant.
fn scoped(key: &str, make: impl FnOnce(&str) -> Condition) -> Condition {
    match key.split_once('.') {
        Some((relation, column)) => Condition::nested(relation, make(column)),
        None => make(key),
    }
}

/// Exact-match conditions. Arrays always become an OR group, even with a
/// single element; scalars become a bare equality.
pub fn build_where_conditions(filters: &[(String, Option<FilterValue>)]) -> Vec<Condition> {
    let mut conditions = Vec::new();

    for (key, value) in filters {
        let Some(value) = value else { continue };

        match value {
            FilterValue::One(scalar) => {
                conditions.push(scoped(key, |field| Condition::equals(field, scalar.clone())));
            }
            FilterValue::Many(values) => {
                let alternatives: Vec<Condition> = values
                    .iter()
                    .flatten()
                    .map(|scalar| scoped(key, |field| Condition::equals(field, scalar.clone())))
                    .collect();

                if !alternatives.is_empty() {
                    conditions.push(Condition::Or(alternatives));
                }
            }
        }
    }

    conditions
}

/// Contains conditions. Several non-null search fields are combined into one
/// OR group; a single one is emitted as is.
pub fn build_search_conditions(search_filters: &[(String, Option<Scalar>)]) -> Vec<Condition> {
    let searches: Vec<Condition> = search_filters
        .iter()
        .filter_map(|(key, value)| {
            let text = value.as_ref()?.to_string();
            Some(scoped(key, |field| Condition::contains(field, text)))
        })
        .collect();

    match searches.len() {
        0 => Vec::new(),
        1 => searches,
        _ => vec![Condition::Or(searches)],
    }
}

fn parse_date(value: &Scalar) -> Option<DateTime<Utc>> {
    let text = value.as_text()?;
    if !ISO_DATE.is_match(text) {
        return None;
    }

    if text.len() == 10 {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
    } else {
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Inclusive range conditions, one per entry. Bounds are converted to dates
/// only when both of them are ISO-8601 dates. Inverted ranges are kept.
pub fn build_ranged_conditions(ranged_filters: &[RangedFilter]) -> Vec<Condition> {
    ranged_filters
        .iter()
        .map(|range| {
            let (gte, lte) = match (parse_date(&range.start), parse_date(&range.end)) {
                (Some(start), Some(end)) => (RangeBound::Date(start), RangeBound::Date(end)),
                _ => (
                    RangeBound::Value(range.start.clone()),
                    RangeBound::Value(range.end.clone()),
                ),
            };

            Condition::Range {
                field: range.key.clone(),
                gte,
                lte,
            }
        })
        .collect()
}

pub fn build_order_by(order_key: Option<&str>, order_rule: Option<OrderDirection>) -> Option<OrderBy> {
    order_key.map(|field| OrderBy {
        field: field.to_string(),
        direction: order_rule.unwrap_or_default(),
    })
}

/// Returns `(limit, offset)`. Zero counts as absent; other values are not
/// clamped, rejecting negative pages is left to the caller.
pub fn build_pagination(page: Option<i64>, rows: Option<i64>) -> (i64, i64) {
    let page = page.filter(|&page| page != 0);
    let rows = rows.filter(|&rows| rows != 0);

    match page {
        Some(page) => {
            let limit = rows.unwrap_or(DEFAULT_ROWS);
            (limit, page.saturating_sub(1).saturating_mul(limit))
        }
        None => (DEFAULT_ROWS, 0),
    }
}

pub fn build_query_predicate(request: &FilterRequest) -> QueryPredicate {
    let mut conditions = build_where_conditions(&request.filters);
    conditions.extend(build_search_conditions(&request.search_filters));
    conditions.extend(build_ranged_conditions(&request.ranged_filters));

    let (limit, offset) = build_pagination(request.page, request.rows);

    QueryPredicate {
        conditions,
        order_by: build_order_by(request.order_key.as_deref(), request.order_rule),
        limit,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_where_ignores_null_values() {
        let filters = vec![
            ("status".to_string(), None),
            ("positionId".to_string(), None),
        ];

        assert!(build_where_conditions(&filters).is_empty());
    }

    #[test]
    fn test_where_scalar_is_bare_equality() {
        let request = FilterRequest::new().with_filter("status", "active");

        assert_eq!(
            build_where_conditions(&request.filters),
            vec![Condition::equals("status", "active".into())]
        );
    }

    #[test]
    fn test_where_single_element_array_is_wrapped_in_or() {
        let request = FilterRequest::new().with_filter("status", vec!["active"]);

        let conditions = build_where_conditions(&request.filters);
        assert_eq!(
            conditions,
            vec![Condition::Or(vec![Condition::equals(
                "status",
                "active".into()
            )])]
        );
        assert_ne!(
            conditions,
            build_where_conditions(&FilterRequest::new().with_filter("status", "active").filters)
        );
    }

    #[test]
    fn test_where_array_becomes_or_of_equalities() {
        let request = FilterRequest::new().with_filter("status", vec!["active", "inactive"]);

        assert_eq!(
            build_where_conditions(&request.filters),
            vec![Condition::Or(vec![
                Condition::equals("status", "active".into()),
                Condition::equals("status", "inactive".into()),
            ])]
        );
    }

    #[test]
    fn test_where_array_drops_null_elements() {
        let filters = vec![(
            "status".to_string(),
            Some(FilterValue::Many(vec![None, Some("active".into()), None])),
        )];

        assert_eq!(
            build_where_conditions(&filters),
            vec![Condition::Or(vec![Condition::equals(
                "status",
                "active".into()
            )])]
        );
    }

    #[test]
    fn test_where_array_of_only_nulls_contributes_nothing() {
        let filters = vec![
            ("status".to_string(), Some(FilterValue::Many(vec![None, None]))),
            ("tags".to_string(), Some(FilterValue::Many(vec![]))),
        ];

        assert!(build_where_conditions(&filters).is_empty());
    }

    #[test]
    fn test_where_dotted_key_nests_under_relation() {
        let request = FilterRequest::new().with_filter("user.email", "a@b.com");

        assert_eq!(
            build_where_conditions(&request.filters),
            vec![Condition::nested(
                "user",
                Condition::equals("email", "a@b.com".into())
            )]
        );
    }

    #[test]
    fn test_where_dotted_array_nests_each_alternative() {
        let request =
            FilterRequest::new().with_filter("position.name", vec!["Manager", "Staff"]);

        assert_eq!(
            build_where_conditions(&request.filters),
            vec![Condition::Or(vec![
                Condition::nested("position", Condition::equals("name", "Manager".into())),
                Condition::nested("position", Condition::equals("name", "Staff".into())),
            ])]
        );
    }

    #[test]
    fn test_where_splits_at_first_dot_only() {
        let request = FilterRequest::new().with_filter("a.b.c", "x");

        assert_eq!(
            build_where_conditions(&request.filters),
            vec![Condition::nested("a", Condition::equals("b.c", "x".into()))]
        );
    }

    #[test]
    fn test_where_keeps_insertion_order() {
        let request = FilterRequest::new()
            .with_filter("nik", "EMP-1")
            .with_filter("isActive", true)
            .with_filter("fullName", "Budi");

        let fields: Vec<String> = build_where_conditions(&request.filters)
            .into_iter()
            .map(|c| match c {
                Condition::Equals { field, .. } => field,
                other => panic!("unexpected condition {other:?}"),
            })
            .collect();

        assert_eq!(fields, vec!["nik", "isActive", "fullName"]);
    }

    #[test]
    fn test_search_single_field_is_not_wrapped() {
        let request = FilterRequest::new()
            .with_search("fullName", "budi")
            .tap_search_null("nik");

        assert_eq!(
            build_search_conditions(&request.search_filters),
            vec![Condition::contains("fullName", "budi")]
        );
    }

    #[test]
    fn test_search_several_fields_become_one_or_group() {
        let request = FilterRequest::new()
            .with_search("fullName", "budi")
            .with_search("nik", "budi")
            .with_search("position.name", "budi");

        assert_eq!(
            build_search_conditions(&request.search_filters),
            vec![Condition::Or(vec![
                Condition::contains("fullName", "budi"),
                Condition::contains("nik", "budi"),
                Condition::nested("position", Condition::contains("name", "budi")),
            ])]
        );
    }

    #[test]
    fn test_search_all_null_contributes_nothing() {
        let request = FilterRequest::new()
            .tap_search_null("fullName")
            .tap_search_null("nik");

        assert!(build_search_conditions(&request.search_filters).is_empty());
    }

    #[test]
    fn test_search_stringifies_non_text_values() {
        let request = FilterRequest::new().with_search("phone", 812i64);

        assert_eq!(
            build_search_conditions(&request.search_filters),
            vec![Condition::contains("phone", "812")]
        );
    }

    #[test]
    fn test_range_with_dates_parses_both_bounds() {
        let request = FilterRequest::new().with_range("createdAt", "2025-01-01", "2025-01-31");

        assert_eq!(
            build_ranged_conditions(&request.ranged_filters),
            vec![Condition::Range {
                field: "createdAt".to_string(),
                gte: RangeBound::Date(date(2025, 1, 1)),
                lte: RangeBound::Date(date(2025, 1, 31)),
            }]
        );
    }

    #[test]
    fn test_range_with_timestamps_parses_both_bounds() {
        let request = FilterRequest::new().with_range(
            "updatedAt",
            "2025-01-01T08:30:00Z",
            "2025-01-02T17:00:00.250Z",
        );

        let expected_end = Utc.with_ymd_and_hms(2025, 1, 2, 17, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);

        assert_eq!(
            build_ranged_conditions(&request.ranged_filters),
            vec![Condition::Range {
                field: "updatedAt".to_string(),
                gte: RangeBound::Date(Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap()),
                lte: RangeBound::Date(expected_end),
            }]
        );
    }

    #[test]
    fn test_range_with_numbers_passes_through() {
        let request = FilterRequest::new().with_range("age", 10i64, 20i64);

        assert_eq!(
            build_ranged_conditions(&request.ranged_filters),
            vec![Condition::Range {
                field: "age".to_string(),
                gte: RangeBound::Value(Scalar::Int(10)),
                lte: RangeBound::Value(Scalar::Int(20)),
            }]
        );
    }

    #[test]
    fn test_range_with_one_date_keeps_both_raw() {
        let request = FilterRequest::new().with_range("createdAt", "2025-01-01", "tomorrow");

        assert_eq!(
            build_ranged_conditions(&request.ranged_filters),
            vec![Condition::Range {
                field: "createdAt".to_string(),
                gte: RangeBound::Value("2025-01-01".into()),
                lte: RangeBound::Value("tomorrow".into()),
            }]
        );
    }

    #[test]
    fn test_range_timestamp_without_zulu_is_not_a_date() {
        let request =
            FilterRequest::new().with_range("createdAt", "2025-01-01T00:00:00", "2025-01-02");

        assert!(matches!(
            build_ranged_conditions(&request.ranged_filters)[0],
            Condition::Range {
                gte: RangeBound::Value(_),
                lte: RangeBound::Value(_),
                ..
            }
        ));
    }

    #[test]
    fn test_range_inverted_bounds_are_kept() {
        let request = FilterRequest::new().with_range("createdAt", "2025-02-01", "2025-01-01");

        assert_eq!(
            build_ranged_conditions(&request.ranged_filters),
            vec![Condition::Range {
                field: "createdAt".to_string(),
                gte: RangeBound::Date(date(2025, 2, 1)),
                lte: RangeBound::Date(date(2025, 1, 1)),
            }]
        );
    }

    #[test]
    fn test_pagination_with_page_and_rows() {
        assert_eq!(build_pagination(Some(2), Some(5)), (5, 5));
    }

    #[test]
    fn test_pagination_with_page_only() {
        assert_eq!(build_pagination(Some(2), None), (10, 10));
    }

    #[test]
    fn test_pagination_defaults_to_first_page() {
        assert_eq!(build_pagination(None, None), (10, 0));
        assert_eq!(build_pagination(None, Some(50)), (10, 0));
    }

    #[test]
    fn test_pagination_does_not_clamp() {
        assert_eq!(build_pagination(Some(-1), Some(5)), (5, -10));
        assert_eq!(build_pagination(Some(1), Some(-3)), (-3, 0));
    }

    #[test]
    fn test_pagination_treats_zero_as_absent() {
        assert_eq!(build_pagination(Some(0), Some(5)), (10, 0));
        assert_eq!(build_pagination(Some(2), Some(0)), (10, 10));
        assert_eq!(build_pagination(Some(0), Some(0)), (10, 0));
    }

    #[test]
    fn test_order_defaults_to_ascending() {
        assert_eq!(
            build_order_by(Some("fullName"), None),
            Some(OrderBy {
                field: "fullName".to_string(),
                direction: OrderDirection::Asc,
            })
        );
        assert_eq!(build_order_by(None, Some(OrderDirection::Desc)), None);
    }

    #[test]
    fn test_predicate_concatenates_in_fixed_order() {
        let request = FilterRequest::new()
            .with_range("createdAt", "2025-01-01", "2025-01-31")
            .with_search("fullName", "budi")
            .with_filter("isActive", true)
            .with_order("fullName", Some(OrderDirection::Desc))
            .with_page(3, Some(20));

        let predicate = build_query_predicate(&request);

        assert_eq!(
            predicate,
            QueryPredicate {
                conditions: vec![
                    Condition::equals("isActive", Scalar::Bool(true)),
                    Condition::contains("fullName", "budi"),
                    Condition::Range {
                        field: "createdAt".to_string(),
                        gte: RangeBound::Date(date(2025, 1, 1)),
                        lte: RangeBound::Date(date(2025, 1, 31)),
                    },
                ],
                order_by: Some(OrderBy {
                    field: "fullName".to_string(),
                    direction: OrderDirection::Desc,
                }),
                limit: 20,
                offset: 40,
            }
        );
    }

    #[test]
    fn test_empty_request_yields_defaults() {
        let predicate = build_query_predicate(&FilterRequest::new());

        assert!(predicate.conditions.is_empty());
        assert_eq!(predicate.order_by, None);
        assert_eq!((predicate.limit, predicate.offset), (10, 0));
    }

    #[test]
    fn test_builder_is_idempotent() {
        let request = FilterRequest::new()
            .with_filter("status", vec!["active", "inactive"])
            .with_search("fullName", "budi")
            .with_search("nik", "budi")
            .with_range("createdAt", "2025-01-01", "2025-01-31")
            .with_page(2, None);

        assert_eq!(
            build_query_predicate(&request),
            build_query_predicate(&request)
        );
    }

    trait TapSearchNull {
        fn tap_search_null(self, key: &str) -> Self;
    }

    impl TapSearchNull for FilterRequest {
        fn tap_search_null(mut self, key: &str) -> Self {
            self.push_search(key, None);
            self
        }
    }
}
