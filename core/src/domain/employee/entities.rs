use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    employee::value_objects::{EmployeePatch, NewEmployee},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub nik: String,
    pub full_name: String,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub position_id: Uuid,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(input: NewEmployee, user_id: Option<Uuid>) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            user_id,
            nik: input.nik,
            full_name: input.full_name,
            place_of_birth: input.place_of_birth,
            date_of_birth: input.date_of_birth,
            address: input.address,
            phone: input.phone,
            position_id: input.position_id,
            avatar_url: input.avatar_url,
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(nik) = patch.nik {
            self.nik = nik;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(place_of_birth) = patch.place_of_birth {
            self.place_of_birth = Some(place_of_birth);
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(position_id) = patch.position_id {
            self.position_id = position_id;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}
