use uuid::Uuid;

use crate::domain::query::{
    Condition, FilterRequest, QueryPredicate, Scalar, build_query_predicate,
};

#[derive(Debug, Clone, Default)]
pub struct GetDepartmentsInput {
    pub filter: FilterRequest,
    /// Contains-match on the department name.
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetPositionsInput {
    pub department_id: Uuid,
    pub filter: FilterRequest,
    pub search: Option<String>,
}

fn with_name_search(predicate: QueryPredicate, search: Option<&str>) -> QueryPredicate {
    match search.map(str::trim) {
        Some(search) if !search.is_empty() => predicate.and(Condition::contains_ignore_case("name", search)),
        _ => predicate,
    }
}

impl GetDepartmentsInput {
    pub fn to_predicate(&self) -> QueryPredicate {
        with_name_search(build_query_predicate(&self.filter), self.search.as_deref())
    }
}

impl GetPositionsInput {
    /// Scoped to the department in addition to the client filter.
    pub fn to_predicate(&self) -> QueryPredicate {
        let predicate = build_query_predicate(&self.filter).and(Condition::equals(
            "departmentId",
            Scalar::Text(self.department_id.to_string()),
        ));

        with_name_search(predicate, self.search.as_deref())
    }
}
