use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};
use crate::entity::sea_orm_active_enums::Role as RoleModel;
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::db::map_write_error;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn user_active_model(user: &User) -> UserActiveModel {
    UserActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        username: Set(user.username.clone()),
        password: Set(user.password.clone()),
        role: Set(user.role.into()),
        created_at: Set(user.created_at.fixed_offset()),
        updated_at: Set(user.updated_at.fixed_offset()),
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn count_by_email(
        &self,
        email: String,
        exclude_user_id: Option<Uuid>,
    ) -> Result<u64, CoreError> {
        let mut query = UserEntity::find().filter(UserColumn::Email.eq(email));
        if let Some(user_id) = exclude_user_id {
            query = query.filter(UserColumn::Id.ne(user_id));
        }

        query.count(&*self.db).await.map_err(|e| {
            error!("Failed to count users by email: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn count_by_username(
        &self,
        username: String,
        exclude_user_id: Option<Uuid>,
    ) -> Result<u64, CoreError> {
        let mut query = UserEntity::find().filter(UserColumn::Username.eq(username));
        if let Some(user_id) = exclude_user_id {
            query = query.filter(UserColumn::Id.ne(user_id));
        }

        query.count(&*self.db).await.map_err(|e| {
            error!("Failed to count users by username: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, CoreError> {
        UserEntity::find()
            .filter(UserColumn::Role.eq(RoleModel::from(role)))
            .count(&*self.db)
            .await
            .map_err(|e| {
                error!("Failed to count users by role: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created_user = UserEntity::insert(user_active_model(&user))
            .exec_with_returning(&*self.db)
            .await
            .map(User::from)
            .map_err(|e| map_write_error("create user", e))?;

        Ok(created_user)
    }
}
