//! # Charging Dashboard
//!
//! Admin dashboard backend for an EV charging operation: invoice and
//! customer management, a charging-station data-entry form, and user
//! registration/authentication.
//!
//! ## Architecture
//!
//! - **domain**: Entities, the form-state contract and repository traits
//! - **schema**: Declarative field-bag validation with typed coercion
//! - **application**: Action handlers (validate → persist → invalidate →
//!   redirect) and credential verification
//! - **cache**: Staleness tracking for the cached listing views
//! - **infrastructure**: Database (SeaORM) and password hashing
//! - **interfaces**: HTTP router and handlers with Swagger documentation

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod schema;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export the router
pub use interfaces::create_router;
