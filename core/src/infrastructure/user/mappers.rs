use chrono::Utc;

use crate::domain::user::entities::{Role, User};
use crate::entity::sea_orm_active_enums::Role as RoleModel;
use crate::entity::users::Model as UserModel;

impl From<RoleModel> for Role {
    fn from(role: RoleModel) -> Self {
        match role {
            RoleModel::User => Role::User,
            RoleModel::Admin => Role::Admin,
        }
    }
}

impl From<Role> for RoleModel {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleModel::User,
            Role::Admin => RoleModel::Admin,
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            username: model.username,
            password: model.password,
            role: model.role.into(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
