pub mod authentication;
pub mod department;
pub mod employee;
pub mod health;
pub mod query_extractor;
pub mod query_params;
pub mod server;
