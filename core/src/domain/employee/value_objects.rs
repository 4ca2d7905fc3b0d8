use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::query::{
    Condition, FilterRequest, OrderBy, OrderDirection, QueryPredicate, Scalar,
    build_query_predicate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeSortKey {
    FullName,
    Nik,
    CreatedAt,
    UpdatedAt,
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(format!(
                "invalid status '{other}', expected 'active' or 'inactive'"
            )),
        }
    }
}

impl FromStr for EmployeeSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(EmployeeSortKey::FullName),
            "nik" => Ok(EmployeeSortKey::Nik),
            "createdAt" => Ok(EmployeeSortKey::CreatedAt),
            "updatedAt" => Ok(EmployeeSortKey::UpdatedAt),
            other => Err(format!(
                "invalid sortBy '{other}', expected one of fullName, nik, createdAt, updatedAt"
            )),
        }
    }
}

impl EmployeeSortKey {
    pub fn as_field(&self) -> &'static str {
        match self {
            EmployeeSortKey::FullName => "fullName",
            EmployeeSortKey::Nik => "nik",
            EmployeeSortKey::CreatedAt => "createdAt",
            EmployeeSortKey::UpdatedAt => "updatedAt",
        }
    }
}

/// Listing request: the generic filter plus the employee shortcuts.
#[derive(Debug, Clone, Default)]
pub struct GetEmployeesInput {
    pub filter: FilterRequest,
    pub search: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub position_id: Option<Uuid>,
    pub sort_by: Option<EmployeeSortKey>,
    pub sort_order: Option<OrderDirection>,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub nik: String,
    pub full_name: String,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub position_id: Uuid,
    pub avatar_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateEmployeeInput {
    pub employee: NewEmployee,
    pub user: NewUserAccount,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub nik: Option<String>,
    pub full_name: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub position_id: Option<Uuid>,
    pub avatar_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UserAccountPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserAccountPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEmployeeInput {
    pub employee_id: Uuid,
    pub employee: EmployeePatch,
    pub user: UserAccountPatch,
}

impl GetEmployeesInput {
    /// Builds the generic predicate and narrows it with the employee shortcuts.
    /// `sort_by` takes precedence over the generic `orderKey`.
    pub fn to_predicate(&self) -> QueryPredicate {
        let mut predicate = build_query_predicate(&self.filter);

        if let Some(status) = self.status {
            predicate = predicate.and(Condition::equals(
                "isActive",
                Scalar::Bool(status == EmployeeStatus::Active),
            ));
        }

        if let Some(position_id) = self.position_id {
            predicate = predicate.and(Condition::equals(
                "positionId",
                Scalar::Text(position_id.to_string()),
            ));
        }

        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            predicate = predicate.and(Condition::Or(
                ["fullName", "nik", "phone"]
                    .into_iter()
                    .map(|field| Condition::contains_ignore_case(field, search))
                    .collect(),
            ));
        }

        if let Some(sort_by) = self.sort_by {
            predicate.order_by = Some(OrderBy {
                field: sort_by.as_field().to_string(),
                direction: self.sort_order.unwrap_or_default(),
            });
        }

        predicate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_are_appended_after_generic_conditions() {
        let position_id = Uuid::new_v4();
        let input = GetEmployeesInput {
            filter: FilterRequest::new().with_filter("nik", "EMP-1"),
            status: Some(EmployeeStatus::Inactive),
            position_id: Some(position_id),
            ..Default::default()
        };

        assert_eq!(
            input.to_predicate().conditions,
            vec![
                Condition::equals("nik", "EMP-1".into()),
                Condition::equals("isActive", Scalar::Bool(false)),
                Condition::equals("positionId", Scalar::Text(position_id.to_string())),
            ]
        );
    }

    #[test]
    fn test_search_spans_name_nik_and_phone() {
        let input = GetEmployeesInput {
            search: Some(" budi ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            input.to_predicate().conditions,
            vec![Condition::Or(vec![
                Condition::contains_ignore_case("fullName", "budi"),
                Condition::contains_ignore_case("nik", "budi"),
                Condition::contains_ignore_case("phone", "budi"),
            ])]
        );
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let input = GetEmployeesInput {
            search: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(input.to_predicate().conditions.is_empty());
    }

    #[test]
    fn test_sort_by_overrides_order_key() {
        let input = GetEmployeesInput {
            filter: FilterRequest::new().with_order("nik", Some(OrderDirection::Asc)),
            sort_by: Some(EmployeeSortKey::UpdatedAt),
            sort_order: Some(OrderDirection::Desc),
            ..Default::default()
        };

        assert_eq!(
            input.to_predicate().order_by,
            Some(OrderBy {
                field: "updatedAt".to_string(),
                direction: OrderDirection::Desc,
            })
        );
    }
}
