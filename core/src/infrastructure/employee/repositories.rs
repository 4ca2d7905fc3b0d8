use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    RelationTrait, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::{app_errors::CoreError, paged_list::PagedList},
    employee::{entities::Employee, ports::EmployeeRepository},
    query::QueryPredicate,
    user::entities::User,
};
use crate::entity::employees::{
    self, ActiveModel as EmployeeActiveModel, Column as EmployeeColumn, Entity as EmployeeEntity,
};
use crate::entity::users::Entity as UserEntity;
use crate::infrastructure::db::map_write_error;
use crate::infrastructure::department::repositories::position_columns;
use crate::infrastructure::query::{FieldKind, FieldMap, fetch_page};
use crate::infrastructure::user::repository::user_active_model;

fn user_columns() -> FieldMap {
    FieldMap::new("users")
        .field("id", "id", FieldKind::Uuid)
        .field("email", "email", FieldKind::Text)
        .field("username", "username", FieldKind::Text)
        .field("createdAt", "created_at", FieldKind::DateTime)
        .field("updatedAt", "updated_at", FieldKind::DateTime)
}

pub(crate) fn employee_fields() -> FieldMap {
    FieldMap::new("employees")
        .field("id", "id", FieldKind::Uuid)
        .field("userId", "user_id", FieldKind::Uuid)
        .field("nik", "nik", FieldKind::Text)
        .field("fullName", "full_name", FieldKind::Text)
        .field("placeOfBirth", "place_of_birth", FieldKind::Text)
        .field("dateOfBirth", "date_of_birth", FieldKind::Date)
        .field("address", "address", FieldKind::Text)
        .field("phone", "phone", FieldKind::Text)
        .field("positionId", "position_id", FieldKind::Uuid)
        .field("avatarUrl", "avatar_url", FieldKind::Text)
        .field("isActive", "is_active", FieldKind::Boolean)
        .field("createdAt", "created_at", FieldKind::DateTime)
        .field("updatedAt", "updated_at", FieldKind::DateTime)
        .relation(
            "position",
            || employees::Relation::Positions.def(),
            position_columns(),
        )
        .relation("user", || employees::Relation::Users.def(), user_columns())
}

#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn transaction_error(action: &str, e: DbErr) -> CoreError {
    error!("Failed to {} transaction: {}", action, e);
    CoreError::InternalServerError
}

impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_all(&self, predicate: QueryPredicate) -> Result<PagedList<Employee>, CoreError> {
        fetch_page(&*self.db, EmployeeEntity::find(), &predicate, &employee_fields()).await
    }

    async fn get_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>, CoreError> {
        let employee = EmployeeEntity::find_by_id(employee_id)
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to get employee by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Employee::from);

        Ok(employee)
    }

    async fn count_by_nik(
        &self,
        nik: String,
        exclude_employee_id: Option<Uuid>,
    ) -> Result<u64, CoreError> {
        let mut query = EmployeeEntity::find().filter(EmployeeColumn::Nik.eq(nik));
        if let Some(employee_id) = exclude_employee_id {
            query = query.filter(EmployeeColumn::Id.ne(employee_id));
        }

        query.count(&*self.db).await.map_err(|e| {
            error!("Failed to count employees by nik: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn create_with_user(&self, employee: Employee, user: User) -> Result<Employee, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| transaction_error("begin", e))?;

        UserEntity::insert(user_active_model(&user))
            .exec_without_returning(&txn)
            .await
            .map_err(|e| map_write_error("create employee user", e))?;

        let created = EmployeeEntity::insert(EmployeeActiveModel::from(employee))
            .exec_with_returning(&txn)
            .await
            .map(Employee::from)
            .map_err(|e| map_write_error("create employee", e))?;

        txn.commit()
            .await
            .map_err(|e| transaction_error("commit", e))?;

        Ok(created)
    }

    async fn update_with_user(
        &self,
        employee: Employee,
        user: Option<User>,
    ) -> Result<Employee, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| transaction_error("begin", e))?;

        if let Some(user) = user {
            UserEntity::update(user_active_model(&user))
                .exec(&txn)
                .await
                .map_err(|e| map_write_error("update employee user", e))?;
        }

        let updated = EmployeeEntity::update(EmployeeActiveModel::from(employee))
            .exec(&txn)
            .await
            .map(Employee::from)
            .map_err(|e| map_write_error("update employee", e))?;

        txn.commit()
            .await
            .map_err(|e| transaction_error("commit", e))?;

        Ok(updated)
    }

    async fn delete_with_user(&self, employee: Employee) -> Result<(), CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| transaction_error("begin", e))?;

        EmployeeEntity::delete_by_id(employee.id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete employee: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(user_id) = employee.user_id {
            UserEntity::delete_by_id(user_id)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to delete employee user: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| transaction_error("commit", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use super::*;

    fn employee_model(user_id: Option<Uuid>) -> employees::Model {
        let now = Utc::now().fixed_offset();
        employees::Model {
            id: Uuid::new_v4(),
            user_id,
            nik: "EMP-2025-0001".to_string(),
            full_name: "Budi Santoso".to_string(),
            place_of_birth: None,
            date_of_birth: None,
            address: None,
            phone: None,
            position_id: Uuid::new_v4(),
            avatar_url: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<employees::Model>::new()])
            .into_connection();

        let employee = PostgresEmployeeRepository::new(Arc::new(db))
            .get_by_id(Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(employee, None);
    }

    #[tokio::test]
    async fn test_count_by_nik() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(1)))])]])
            .into_connection();

        let count = PostgresEmployeeRepository::new(Arc::new(db))
            .count_by_nik("EMP-2025-0001".to_string(), Some(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_delete_with_user_removes_both_rows() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let employee = Employee::from(employee_model(Some(user_id)));
        PostgresEmployeeRepository::new(Arc::new(db))
            .delete_with_user(employee)
            .await
            .unwrap();
    }
}
