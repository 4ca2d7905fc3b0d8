pub mod prelude;

pub mod departments;
pub mod employees;
pub mod positions;
pub mod sea_orm_active_enums;
pub mod users;
