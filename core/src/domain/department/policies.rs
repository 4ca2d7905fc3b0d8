use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::RostraPolicy},
    department::ports::DepartmentPolicy,
    user::entities::Role,
};

impl DepartmentPolicy for RostraPolicy {
    async fn can_view_department(&self, identity: Identity) -> Result<bool, CoreError> {
        Ok(self.has_one_of_roles(&identity, &[Role::User, Role::Admin]))
    }
}
