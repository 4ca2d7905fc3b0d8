use chrono::NaiveDate;
use rostra_core::domain::employee::value_objects::{
    EmployeePatch, NewEmployee, NewUserAccount, UserAccountPatch,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFieldsValidator {
    #[validate(length(min = 1, message = "nik is required"))]
    #[schema(example = "EMP-2025-0001")]
    pub nik: String,

    #[validate(length(min = 1, message = "fullName is required"))]
    #[schema(example = "Budi Santoso")]
    pub full_name: String,

    #[serde(default)]
    pub place_of_birth: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1995-05-20")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    #[schema(example = "+62-812-3456-7890")]
    pub phone: Option<String>,

    pub position_id: Uuid,

    #[serde(default)]
    #[validate(url(message = "avatarUrl must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserAccountValidator {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeValidator {
    #[validate(nested)]
    pub employee: EmployeeFieldsValidator,

    #[validate(nested)]
    pub user: UserAccountValidator,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatchValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "nik must not be empty"))]
    pub nik: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "fullName must not be empty"))]
    pub full_name: Option<String>,

    #[serde(default)]
    pub place_of_birth: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1995-05-20")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub position_id: Option<Uuid>,

    #[serde(default)]
    #[validate(url(message = "avatarUrl must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserAccountPatchValidator {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployeeValidator {
    #[serde(default)]
    #[validate(nested)]
    pub employee: Option<EmployeePatchValidator>,

    #[serde(default)]
    #[validate(nested)]
    pub user: Option<UserAccountPatchValidator>,
}

impl From<EmployeeFieldsValidator> for NewEmployee {
    fn from(value: EmployeeFieldsValidator) -> Self {
        NewEmployee {
            nik: value.nik,
            full_name: value.full_name,
            place_of_birth: value.place_of_birth,
            date_of_birth: value.date_of_birth,
            address: value.address,
            phone: value.phone,
            position_id: value.position_id,
            avatar_url: value.avatar_url,
            is_active: value.is_active,
        }
    }
}

impl From<UserAccountValidator> for NewUserAccount {
    fn from(value: UserAccountValidator) -> Self {
        NewUserAccount {
            email: value.email,
            username: value.username,
            password: value.password,
        }
    }
}

impl From<EmployeePatchValidator> for EmployeePatch {
    fn from(value: EmployeePatchValidator) -> Self {
        EmployeePatch {
            nik: value.nik,
            full_name: value.full_name,
            place_of_birth: value.place_of_birth,
            date_of_birth: value.date_of_birth,
            address: value.address,
            phone: value.phone,
            position_id: value.position_id,
            avatar_url: value.avatar_url,
            is_active: value.is_active,
        }
    }
}

impl From<UserAccountPatchValidator> for UserAccountPatch {
    fn from(value: UserAccountPatchValidator) -> Self {
        UserAccountPatch {
            email: value.email,
            username: value.username,
            password: value.password,
        }
    }
}
