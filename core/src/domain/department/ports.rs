use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::{app_errors::CoreError, paged_list::PagedList},
    department::{
        entities::{Department, Position},
        value_objects::{GetDepartmentsInput, GetPositionsInput},
    },
    query::QueryPredicate,
};

pub trait DepartmentService: Send + Sync {
    fn get_departments(
        &self,
        identity: Identity,
        input: GetDepartmentsInput,
    ) -> impl Future<Output = Result<PagedList<Department>, CoreError>> + Send;

    fn get_positions(
        &self,
        identity: Identity,
        input: GetPositionsInput,
    ) -> impl Future<Output = Result<PagedList<Position>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DepartmentRepository: Send + Sync {
    fn find_all(
        &self,
        predicate: QueryPredicate,
    ) -> impl Future<Output = Result<PagedList<Department>, CoreError>> + Send;

    fn get_by_id(
        &self,
        department_id: Uuid,
    ) -> impl Future<Output = Result<Option<Department>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Department>, CoreError>> + Send;

    fn create(
        &self,
        department: Department,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PositionRepository: Send + Sync {
    fn find_all(
        &self,
        predicate: QueryPredicate,
    ) -> impl Future<Output = Result<PagedList<Position>, CoreError>> + Send;

    fn count_by_id(&self, position_id: Uuid)
    -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn get_by_name(
        &self,
        department_id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<Option<Position>, CoreError>> + Send;

    fn create(&self, position: Position)
    -> impl Future<Output = Result<Position, CoreError>> + Send;
}

pub trait DepartmentPolicy: Send + Sync {
    fn can_view_department(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
