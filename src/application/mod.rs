//! Business logic: action handlers and credential verification

pub mod actions;
pub mod auth;

pub use actions::{ChargingActions, InvoiceActions, UserActions};
pub use auth::{CredentialVerifier, SeaOrmCredentialVerifier, VerifierError};
