//! Credential verification
//!
//! The `authenticate` action treats the identity provider as opaque: it
//! only distinguishes "bad credentials" from other verifier-reported
//! failures. Anything outside the verifier's error family (carried in
//! `VerifierError::Unexpected`) is fatal for the request and propagates.

mod verifier;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DomainError;

pub use verifier::SeaOrmCredentialVerifier;

#[derive(Debug, Error)]
pub enum VerifierError {
    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other failure the verifier itself reports.
    #[error("verifier failure: {0}")]
    Failed(String),

    /// Error outside the verifier's recognized family; never converted
    /// to a user-facing message.
    #[error(transparent)]
    Unexpected(#[from] DomainError),
}

/// Opaque credential verifier the login form delegates to.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<(), VerifierError>;
}
