//! External concerns: database access and password hashing

pub mod crypto;
pub mod database;

pub use database::{init_database, DatabaseConfig};
