use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    RelationTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::{app_errors::CoreError, paged_list::PagedList},
    department::{
        entities::{Department, Position},
        ports::{DepartmentRepository, PositionRepository},
    },
    query::QueryPredicate,
};
use crate::entity::departments::{
    ActiveModel as DepartmentActiveModel, Column as DepartmentColumn,
    Entity as DepartmentEntity,
};
use crate::entity::positions::{
    self, ActiveModel as PositionActiveModel, Column as PositionColumn, Entity as PositionEntity,
};
use crate::infrastructure::db::map_write_error;
use crate::infrastructure::query::{FieldKind, FieldMap, fetch_page};

pub(crate) fn department_fields() -> FieldMap {
    FieldMap::new("departments")
        .field("id", "id", FieldKind::Uuid)
        .field("name", "name", FieldKind::Text)
        .field("createdAt", "created_at", FieldKind::DateTime)
        .field("updatedAt", "updated_at", FieldKind::DateTime)
}

/// Position columns without relations, for use as a nested map.
pub(crate) fn position_columns() -> FieldMap {
    FieldMap::new("positions")
        .field("id", "id", FieldKind::Uuid)
        .field("name", "name", FieldKind::Text)
        .field("departmentId", "department_id", FieldKind::Uuid)
        .field("createdAt", "created_at", FieldKind::DateTime)
        .field("updatedAt", "updated_at", FieldKind::DateTime)
}

pub(crate) fn position_fields() -> FieldMap {
    position_columns().relation(
        "department",
        || positions::Relation::Departments.def(),
        department_fields(),
    )
}

#[derive(Debug, Clone)]
pub struct PostgresDepartmentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresDepartmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl DepartmentRepository for PostgresDepartmentRepository {
    async fn find_all(&self, predicate: QueryPredicate) -> Result<PagedList<Department>, CoreError> {
        fetch_page(
            &*self.db,
            DepartmentEntity::find(),
            &predicate,
            &department_fields(),
        )
        .await
    }

    async fn get_by_id(&self, department_id: Uuid) -> Result<Option<Department>, CoreError> {
        let department = DepartmentEntity::find_by_id(department_id)
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to get department by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Department::from);

        Ok(department)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Department>, CoreError> {
        let department = DepartmentEntity::find()
            .filter(DepartmentColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to get department by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Department::from);

        Ok(department)
    }

    async fn create(&self, department: Department) -> Result<Department, CoreError> {
        let created = DepartmentEntity::insert(DepartmentActiveModel {
            id: Set(department.id),
            name: Set(department.name),
            created_at: Set(department.created_at.fixed_offset()),
            updated_at: Set(department.updated_at.fixed_offset()),
        })
        .exec_with_returning(&*self.db)
        .await
        .map(Department::from)
        .map_err(|e| map_write_error("create department", e))?;

        Ok(created)
    }
}

#[derive(Debug, Clone)]
pub struct PostgresPositionRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresPositionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl PositionRepository for PostgresPositionRepository {
    async fn find_all(&self, predicate: QueryPredicate) -> Result<PagedList<Position>, CoreError> {
        fetch_page(&*self.db, PositionEntity::find(), &predicate, &position_fields()).await
    }

    async fn count_by_id(&self, position_id: Uuid) -> Result<u64, CoreError> {
        PositionEntity::find()
            .filter(PositionColumn::Id.eq(position_id))
            .count(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to count positions by id: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_name(
        &self,
        department_id: Uuid,
        name: String,
    ) -> Result<Option<Position>, CoreError> {
        let position = PositionEntity::find()
            .filter(PositionColumn::DepartmentId.eq(department_id))
            .filter(PositionColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to get position by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Position::from);

        Ok(position)
    }

    async fn create(&self, position: Position) -> Result<Position, CoreError> {
        let created = PositionEntity::insert(PositionActiveModel {
            id: Set(position.id),
            name: Set(position.name),
            department_id: Set(position.department_id),
            created_at: Set(position.created_at.fixed_offset()),
            updated_at: Set(position.updated_at.fixed_offset()),
        })
        .exec_with_returning(&*self.db)
        .await
        .map(Position::from)
        .map_err(|e| map_write_error("create position", e))?;

        Ok(created)
    }
}
