use crate::domain::common::policies::RostraPolicy;

/// Aggregates every port the domain services need. Each domain module implements
/// its service trait for this struct.
#[derive(Clone)]
pub struct Service<U, E, D, P, H, T, HC> {
    pub(crate) user_repository: U,
    pub(crate) employee_repository: E,
    pub(crate) department_repository: D,
    pub(crate) position_repository: P,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: RostraPolicy,
}

impl<U, E, D, P, H, T, HC> Service<U, E, D, P, H, T, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        employee_repository: E,
        department_repository: D,
        position_repository: P,
        hasher_repository: H,
        token_repository: T,
        health_check_repository: HC,
        policy: RostraPolicy,
    ) -> Self {
        Self {
            user_repository,
            employee_repository,
            department_repository,
            position_repository,
            hasher_repository,
            token_repository,
            health_check_repository,
            policy,
        }
    }
}
