//! Store-backed credential verifier

use std::sync::Arc;

use async_trait::async_trait;

use super::{CredentialVerifier, VerifierError};
use crate::domain::UserRepository;
use crate::infrastructure::crypto::PasswordHasher;

/// Looks the user up by email and checks the password against the stored
/// bcrypt digest.
pub struct SeaOrmCredentialVerifier {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SeaOrmCredentialVerifier {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl CredentialVerifier for SeaOrmCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<(), VerifierError> {
        // A store failure here is outside the credential-error family.
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(VerifierError::Unexpected)?;

        let Some(user) = user else {
            return Err(VerifierError::InvalidCredentials);
        };

        // A corrupt stored hash is a verifier failure, not bad credentials.
        let valid = self
            .hasher
            .verify(password, &user.password_hash)
            .map_err(|e| VerifierError::Failed(e.to_string()))?;
        if !valid {
            return Err(VerifierError::InvalidCredentials);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainResult, NewUser, User};
    use crate::infrastructure::crypto::BcryptHasher;

    struct OneUserRepo {
        user: User,
    }

    #[async_trait]
    impl UserRepository for OneUserRepo {
        async fn insert(&self, _user: NewUser) -> DomainResult<()> {
            unreachable!("verifier never writes")
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
            Ok((email == self.user.email).then(|| self.user.clone()))
        }

        async fn count(&self) -> DomainResult<u64> {
            Ok(1)
        }
    }

    fn verifier_with(password: &str) -> SeaOrmCredentialVerifier {
        let hasher = BcryptHasher;
        let user = User {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: hasher.hash(password).unwrap(),
        };
        SeaOrmCredentialVerifier::new(Arc::new(OneUserRepo { user }), Arc::new(hasher))
    }

    #[tokio::test]
    async fn accepts_correct_credentials() {
        let verifier = verifier_with("abc123");
        assert!(verifier.verify("ada@example.com", "abc123").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let verifier = verifier_with("abc123");
        let err = verifier
            .verify("ada@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, VerifierError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let verifier = verifier_with("abc123");
        let err = verifier
            .verify("nobody@example.com", "abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, VerifierError::InvalidCredentials));
    }
}
