pub mod crypto;
pub mod db;
pub mod department;
pub mod employee;
pub mod health;
pub mod jwt;
pub mod query;
pub mod user;
