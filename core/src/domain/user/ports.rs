use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::entities::{Role, User},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Counts users with `email`, ignoring `exclude_user_id` when given.
    fn count_by_email(
        &self,
        email: String,
        exclude_user_id: Option<Uuid>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn count_by_username(
        &self,
        username: String,
        exclude_user_id: Option<Uuid>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn count_by_role(&self, role: Role) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}
