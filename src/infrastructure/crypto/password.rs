//! Password hashing
//!
//! Passwords are stored as bcrypt digests. `DEFAULT_COST` (12) satisfies
//! the ≥10-rounds work-factor floor for stored credentials.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::domain::{DomainError, DomainResult};

/// One-way hash seam used by the sign-up handler. A trait so tests can
/// observe that validation failures short-circuit before any hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> DomainResult<String>;
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed production hasher.
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        hash(password, DEFAULT_COST)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        verify(password, hash)
            .map_err(|e| DomainError::Validation(format!("Failed to verify password: {}", e)))
    }
}
