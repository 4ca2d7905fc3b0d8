pub mod get_departments;
pub mod get_positions;
