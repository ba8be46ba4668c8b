//! HTTP interface
//!
//! - `handlers`: form-submission and listing endpoints
//! - `dto`: wire representations
//! - `router`: route table with Swagger documentation

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{create_router, DashboardState};
