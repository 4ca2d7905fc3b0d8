use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenRepository, value_objects::Identity},
    common::{
        entities::{app_errors::CoreError, paged_list::PagedList},
        policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    department::ports::{DepartmentRepository, PositionRepository},
    employee::{
        entities::Employee,
        ports::{EmployeePolicy, EmployeeRepository, EmployeeService},
        value_objects::{CreateEmployeeInput, GetEmployeesInput, UpdateEmployeeInput},
    },
    health::ports::HealthCheckRepository,
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};

impl<U, E, D, P, H, T, HC> Service<U, E, D, P, H, T, HC>
where
    U: UserRepository,
    E: EmployeeRepository,
    P: PositionRepository,
{
    async fn validate_employee_data(
        &self,
        position_id: Option<Uuid>,
        nik: Option<String>,
        employee_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let position_count = async {
            match position_id {
                Some(id) => self.position_repository.count_by_id(id).await,
                None => Ok(0),
            }
        };
        let nik_count = async {
            match nik.clone() {
                Some(nik) => self.employee_repository.count_by_nik(nik, employee_id).await,
                None => Ok(0),
            }
        };

        let (position_count, nik_count) = futures::try_join!(position_count, nik_count)?;

        if position_id.is_some() && position_count == 0 {
            return Err(CoreError::Validation("Position not found".to_string()));
        }
        if nik.is_some() && nik_count != 0 {
            return Err(CoreError::Validation("NIK already exists".to_string()));
        }

        Ok(())
    }

    async fn validate_user_data(
        &self,
        username: Option<String>,
        email: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let username_count = async {
            match username.clone() {
                Some(username) => {
                    self.user_repository
                        .count_by_username(username, user_id)
                        .await
                }
                None => Ok(0),
            }
        };
        let email_count = async {
            match email.clone() {
                Some(email) => self.user_repository.count_by_email(email, user_id).await,
                None => Ok(0),
            }
        };

        let (username_count, email_count) = futures::try_join!(username_count, email_count)?;

        if username.is_some() && username_count != 0 {
            return Err(CoreError::Validation(
                "Username already exists".to_string(),
            ));
        }
        if email.is_some() && email_count != 0 {
            return Err(CoreError::Validation("Email already exists".to_string()));
        }

        Ok(())
    }
}

fn employee_not_found() -> CoreError {
    CoreError::Validation("Employee not found".to_string())
}

impl<U, E, D, P, H, T, HC> EmployeeService for Service<U, E, D, P, H, T, HC>
where
    U: UserRepository,
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn get_employees(
        &self,
        identity: Identity,
        input: GetEmployeesInput,
    ) -> Result<PagedList<Employee>, CoreError> {
        ensure_policy(
            self.policy.can_view_employee(identity).await,
            "insufficient permissions",
        )?;

        self.employee_repository
            .find_all(input.to_predicate())
            .await
    }

    async fn get_employee(
        &self,
        identity: Identity,
        employee_id: Uuid,
    ) -> Result<Employee, CoreError> {
        ensure_policy(
            self.policy.can_view_employee(identity).await,
            "insufficient permissions",
        )?;

        self.employee_repository
            .get_by_id(employee_id)
            .await?
            .ok_or_else(employee_not_found)
    }

    #[instrument(skip(self, input), fields(nik = %input.employee.nik))]
    async fn create_employee(
        &self,
        identity: Identity,
        input: CreateEmployeeInput,
    ) -> Result<Employee, CoreError> {
        ensure_policy(
            self.policy.can_manage_employee(identity).await,
            "insufficient permissions",
        )?;

        self.validate_employee_data(
            Some(input.employee.position_id),
            Some(input.employee.nik.clone()),
            None,
        )
        .await?;
        self.validate_user_data(
            Some(input.user.username.clone()),
            Some(input.user.email.clone()),
            None,
        )
        .await?;

        let password_hash = self
            .hasher_repository
            .hash_password(&input.user.password)
            .await?;
        let user = User::new(
            input.user.email,
            input.user.username,
            password_hash,
            Role::User,
        );
        let employee = Employee::new(input.employee, Some(user.id));

        let employee = self
            .employee_repository
            .create_with_user(employee, user)
            .await?;
        info!(employee_id = %employee.id, "employee created");

        Ok(employee)
    }

    #[instrument(skip(self, input), fields(employee_id = %input.employee_id))]
    async fn update_employee(
        &self,
        identity: Identity,
        input: UpdateEmployeeInput,
    ) -> Result<Employee, CoreError> {
        ensure_policy(
            self.policy.can_manage_employee(identity).await,
            "insufficient permissions",
        )?;

        let mut employee = self
            .employee_repository
            .get_by_id(input.employee_id)
            .await?
            .ok_or_else(employee_not_found)?;

        self.validate_employee_data(
            input.employee.position_id,
            input.employee.nik.clone(),
            Some(employee.id),
        )
        .await?;
        self.validate_user_data(
            input.user.username.clone(),
            input.user.email.clone(),
            employee.user_id,
        )
        .await?;

        let user = if input.user.is_empty() {
            None
        } else {
            let user_id = employee.user_id.ok_or_else(|| {
                CoreError::Validation("Employee has no linked user account".to_string())
            })?;
            let mut user = self
                .user_repository
                .get_by_id(user_id)
                .await?
                .ok_or(CoreError::NotFound)?;

            let password_hash = match input.user.password.as_deref() {
                Some(password) => Some(self.hasher_repository.hash_password(password).await?),
                None => None,
            };
            user.update(input.user.email, input.user.username, password_hash);

            Some(user)
        };

        employee.apply(input.employee);

        self.employee_repository
            .update_with_user(employee, user)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_employee(
        &self,
        identity: Identity,
        employee_id: Uuid,
    ) -> Result<Employee, CoreError> {
        ensure_policy(
            self.policy.can_manage_employee(identity).await,
            "insufficient permissions",
        )?;

        let employee = self
            .employee_repository
            .get_by_id(employee_id)
            .await?
            .ok_or_else(employee_not_found)?;

        self.employee_repository
            .delete_with_user(employee.clone())
            .await?;
        info!(employee_id = %employee.id, "employee deleted");

        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::services::tests::MockPorts,
        employee::value_objects::{
            EmployeePatch, NewEmployee, NewUserAccount, UserAccountPatch,
        },
        query::{Condition, FilterRequest},
    };

    fn admin() -> Identity {
        Identity::new(Uuid::new_v4(), Role::Admin)
    }

    fn staff() -> Identity {
        Identity::new(Uuid::new_v4(), Role::User)
    }

    fn create_input(position_id: Uuid) -> CreateEmployeeInput {
        CreateEmployeeInput {
            employee: NewEmployee {
                nik: "EMP-2025-0001".to_string(),
                full_name: "Budi Santoso".to_string(),
                place_of_birth: Some("Jakarta".to_string()),
                date_of_birth: NaiveDate::from_ymd_opt(1995, 5, 20),
                address: None,
                phone: None,
                position_id,
                avatar_url: None,
                is_active: None,
            },
            user: NewUserAccount {
                email: "budi@example.com".to_string(),
                username: "budi".to_string(),
                password: "secret123".to_string(),
            },
        }
    }

    fn existing_employee(user_id: Option<Uuid>) -> Employee {
        Employee::new(create_input(Uuid::new_v4()).employee, user_id)
    }

    fn expect_unique_everything(ports: &mut MockPorts) {
        ports
            .position_repository
            .expect_count_by_id()
            .returning(|_| Box::pin(async { Ok(1) }));
        ports
            .employee_repository
            .expect_count_by_nik()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .user_repository
            .expect_count_by_username()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .user_repository
            .expect_count_by_email()
            .returning(|_, _| Box::pin(async { Ok(0) }));
    }

    #[tokio::test]
    async fn test_get_employees_passes_built_predicate() {
        let mut ports = MockPorts::default();
        ports
            .employee_repository
            .expect_find_all()
            .withf(|predicate| {
                predicate.conditions == vec![Condition::equals("fullName", "Budi".into())]
                    && predicate.limit == 10
                    && predicate.offset == 0
            })
            .returning(|_| Box::pin(async { Ok(PagedList::new(vec![], 10, 0, 0)) }));

        let result = ports
            .into_service()
            .get_employees(
                staff(),
                GetEmployeesInput {
                    filter: FilterRequest::new().with_filter("fullName", "Budi"),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.total_data, 0);
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut ports = MockPorts::default();
        ports
            .employee_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = ports
            .into_service()
            .get_employee(staff(), Uuid::new_v4())
            .await;

        assert_eq!(result, Err(employee_not_found()));
    }

    #[tokio::test]
    async fn test_create_employee_requires_admin() {
        let ports = MockPorts::default();

        let result = ports
            .into_service()
            .create_employee(staff(), create_input(Uuid::new_v4()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Forbidden("insufficient permissions".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_employee_unknown_position() {
        let mut ports = MockPorts::default();
        ports
            .position_repository
            .expect_count_by_id()
            .returning(|_| Box::pin(async { Ok(0) }));
        ports
            .employee_repository
            .expect_count_by_nik()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let result = ports
            .into_service()
            .create_employee(admin(), create_input(Uuid::new_v4()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation("Position not found".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_employee_duplicate_nik() {
        let mut ports = MockPorts::default();
        ports
            .position_repository
            .expect_count_by_id()
            .returning(|_| Box::pin(async { Ok(1) }));
        ports
            .employee_repository
            .expect_count_by_nik()
            .with(eq("EMP-2025-0001".to_string()), eq(None))
            .returning(|_, _| Box::pin(async { Ok(1) }));

        let result = ports
            .into_service()
            .create_employee(admin(), create_input(Uuid::new_v4()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation("NIK already exists".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_employee_duplicate_email() {
        let mut ports = MockPorts::default();
        ports
            .position_repository
            .expect_count_by_id()
            .returning(|_| Box::pin(async { Ok(1) }));
        ports
            .employee_repository
            .expect_count_by_nik()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .user_repository
            .expect_count_by_username()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .user_repository
            .expect_count_by_email()
            .returning(|_, _| Box::pin(async { Ok(2) }));

        let result = ports
            .into_service()
            .create_employee(admin(), create_input(Uuid::new_v4()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation("Email already exists".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_employee_links_new_user() {
        let mut ports = MockPorts::default();
        expect_unique_everything(&mut ports);
        ports
            .hasher_repository
            .expect_hash_password()
            .withf(|password| password == "secret123")
            .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));
        ports
            .employee_repository
            .expect_create_with_user()
            .withf(|employee, user| {
                employee.user_id == Some(user.id)
                    && user.role == Role::User
                    && user.password == "hashed"
                    && employee.is_active
            })
            .returning(|employee, _| Box::pin(async move { Ok(employee) }));

        let position_id = Uuid::new_v4();
        let employee = ports
            .into_service()
            .create_employee(admin(), create_input(position_id))
            .await
            .unwrap();

        assert_eq!(employee.position_id, position_id);
        assert_eq!(employee.nik, "EMP-2025-0001");
    }

    #[tokio::test]
    async fn test_update_employee_not_found() {
        let mut ports = MockPorts::default();
        ports
            .employee_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = ports
            .into_service()
            .update_employee(
                admin(),
                UpdateEmployeeInput {
                    employee_id: Uuid::new_v4(),
                    employee: EmployeePatch::default(),
                    user: UserAccountPatch::default(),
                },
            )
            .await;

        assert_eq!(result, Err(employee_not_found()));
    }

    #[tokio::test]
    async fn test_delete_employee_not_found() {
        let mut ports = MockPorts::default();
        ports
            .employee_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        ports.employee_repository.expect_delete_with_user().never();

        let result = ports
            .into_service()
            .delete_employee(admin(), Uuid::new_v4())
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation("Employee not found".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_employee_excludes_itself_from_nik_check() {
        let mut ports = MockPorts::default();
        let employee = existing_employee(None);
        let employee_id = employee.id;
        ports.employee_repository.expect_get_by_id().returning(move |_| {
            let employee = employee.clone();
            Box::pin(async move { Ok(Some(employee)) })
        });
        ports
            .employee_repository
            .expect_count_by_nik()
            .with(eq("EMP-2025-0002".to_string()), eq(Some(employee_id)))
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .employee_repository
            .expect_update_with_user()
            .withf(|_, user| user.is_none())
            .returning(|employee, _| Box::pin(async move { Ok(employee) }));

        let updated = ports
            .into_service()
            .update_employee(
                admin(),
                UpdateEmployeeInput {
                    employee_id,
                    employee: EmployeePatch {
                        nik: Some("EMP-2025-0002".to_string()),
                        ..Default::default()
                    },
                    user: UserAccountPatch::default(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nik, "EMP-2025-0002");
    }

    #[tokio::test]
    async fn test_update_employee_rehashes_password() {
        let mut ports = MockPorts::default();
        let user = User::new(
            "budi@example.com".to_string(),
            "budi".to_string(),
            "old-hash".to_string(),
            Role::User,
        );
        let user_id = user.id;
        let employee = existing_employee(Some(user_id));
        let employee_id = employee.id;

        ports.employee_repository.expect_get_by_id().returning(move |_| {
            let employee = employee.clone();
            Box::pin(async move { Ok(Some(employee)) })
        });
        ports.user_repository.expect_get_by_id().with(eq(user_id)).returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        ports
            .hasher_repository
            .expect_hash_password()
            .withf(|password| password == "new-secret")
            .returning(|_| Box::pin(async { Ok("new-hash".to_string()) }));
        ports
            .employee_repository
            .expect_update_with_user()
            .withf(|_, user| {
                user.as_ref()
                    .is_some_and(|u| u.password == "new-hash" && u.username == "budi")
            })
            .returning(|employee, _| Box::pin(async move { Ok(employee) }));

        let result = ports
            .into_service()
            .update_employee(
                admin(),
                UpdateEmployeeInput {
                    employee_id,
                    employee: EmployeePatch::default(),
                    user: UserAccountPatch {
                        password: Some("new-secret".to_string()),
                        ..Default::default()
                    },
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_employee_returns_removed_record() {
        let mut ports = MockPorts::default();
        let employee = existing_employee(Some(Uuid::new_v4()));
        let expected = employee.clone();

        ports.employee_repository.expect_get_by_id().returning(move |_| {
            let employee = employee.clone();
            Box::pin(async move { Ok(Some(employee)) })
        });
        ports
            .employee_repository
            .expect_delete_with_user()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let deleted = ports
            .into_service()
            .delete_employee(admin(), expected.id)
            .await
            .unwrap();

        assert_eq!(deleted, expected);
    }

    #[tokio::test]
    async fn test_delete_employee_requires_admin() {
        let ports = MockPorts::default();

        let result = ports
            .into_service()
            .delete_employee(staff(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}
