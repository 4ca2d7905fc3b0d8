use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::Role,
};

/// Role based access policy shared by every domain service.
#[derive(Debug, Clone, Default)]
pub struct RostraPolicy;

impl RostraPolicy {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn has_one_of_roles(&self, identity: &Identity, roles: &[Role]) -> bool {
        roles.contains(&identity.role)
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}
