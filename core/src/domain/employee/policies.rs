use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::RostraPolicy},
    employee::ports::EmployeePolicy,
    user::entities::Role,
};

impl EmployeePolicy for RostraPolicy {
    async fn can_view_employee(&self, identity: Identity) -> Result<bool, CoreError> {
        Ok(self.has_one_of_roles(&identity, &[Role::User, Role::Admin]))
    }

    async fn can_manage_employee(&self, identity: Identity) -> Result<bool, CoreError> {
        Ok(self.has_one_of_roles(&identity, &[Role::Admin]))
    }
}
