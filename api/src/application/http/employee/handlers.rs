pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod get_employees;
pub mod update_employee;
