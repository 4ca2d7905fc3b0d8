pub mod app_errors;
pub mod paged_list;
