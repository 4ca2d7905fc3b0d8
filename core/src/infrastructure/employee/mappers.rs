use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::employee::entities::Employee;
use crate::entity::employees::{ActiveModel as EmployeeActiveModel, Model as EmployeeModel};

impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee {
            id: model.id,
            user_id: model.user_id,
            nik: model.nik,
            full_name: model.full_name,
            place_of_birth: model.place_of_birth,
            date_of_birth: model.date_of_birth,
            address: model.address,
            phone: model.phone,
            position_id: model.position_id,
            avatar_url: model.avatar_url,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<Employee> for EmployeeActiveModel {
    fn from(employee: Employee) -> Self {
        EmployeeActiveModel {
            id: Set(employee.id),
            user_id: Set(employee.user_id),
            nik: Set(employee.nik),
            full_name: Set(employee.full_name),
            place_of_birth: Set(employee.place_of_birth),
            date_of_birth: Set(employee.date_of_birth),
            address: Set(employee.address),
            phone: Set(employee.phone),
            position_id: Set(employee.position_id),
            avatar_url: Set(employee.avatar_url),
            is_active: Set(employee.is_active),
            created_at: Set(employee.created_at.fixed_offset()),
            updated_at: Set(employee.updated_at.fixed_offset()),
        }
    }
}
