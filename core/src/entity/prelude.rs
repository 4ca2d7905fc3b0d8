pub use super::departments::Entity as Departments;
pub use super::employees::Entity as Employees;
pub use super::positions::Entity as Positions;
pub use super::users::Entity as Users;
