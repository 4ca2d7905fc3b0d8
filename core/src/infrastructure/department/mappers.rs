use chrono::Utc;

use crate::domain::department::entities::{Department, Position};
use crate::entity::departments::Model as DepartmentModel;
use crate::entity::positions::Model as PositionModel;

impl From<DepartmentModel> for Department {
    fn from(model: DepartmentModel) -> Self {
        Department {
            id: model.id,
            name: model.name,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<PositionModel> for Position {
    fn from(model: PositionModel) -> Self {
        Position {
            id: model.id,
            name: model.name,
            department_id: model.department_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
