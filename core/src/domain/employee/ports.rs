use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::{app_errors::CoreError, paged_list::PagedList},
    employee::{
        entities::Employee,
        value_objects::{CreateEmployeeInput, GetEmployeesInput, UpdateEmployeeInput},
    },
    query::QueryPredicate,
    user::entities::User,
};

pub trait EmployeeService: Send + Sync {
    fn get_employees(
        &self,
        identity: Identity,
        input: GetEmployeesInput,
    ) -> impl Future<Output = Result<PagedList<Employee>, CoreError>> + Send;

    fn get_employee(
        &self,
        identity: Identity,
        employee_id: Uuid,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn create_employee(
        &self,
        identity: Identity,
        input: CreateEmployeeInput,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn update_employee(
        &self,
        identity: Identity,
        input: UpdateEmployeeInput,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    /// Removes the employee together with its user account and returns the removed record.
    fn delete_employee(
        &self,
        identity: Identity,
        employee_id: Uuid,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    fn find_all(
        &self,
        predicate: QueryPredicate,
    ) -> impl Future<Output = Result<PagedList<Employee>, CoreError>> + Send;

    fn get_by_id(
        &self,
        employee_id: Uuid,
    ) -> impl Future<Output = Result<Option<Employee>, CoreError>> + Send;

    fn count_by_nik(
        &self,
        nik: String,
        exclude_employee_id: Option<Uuid>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Inserts the user and the employee in a single transaction.
    fn create_with_user(
        &self,
        employee: Employee,
        user: User,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    /// Updates the employee and, when given, its user in a single transaction.
    fn update_with_user(
        &self,
        employee: Employee,
        user: Option<User>,
    ) -> impl Future<Output = Result<Employee, CoreError>> + Send;

    fn delete_with_user(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait EmployeePolicy: Send + Sync {
    fn can_view_employee(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_manage_employee(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
