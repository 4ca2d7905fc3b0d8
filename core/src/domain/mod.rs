pub mod authentication;
pub mod common;
pub mod crypto;
pub mod department;
pub mod employee;
pub mod health;
pub mod query;
pub mod seed;
pub mod user;
