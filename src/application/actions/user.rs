//! Registration and login action handlers

use std::sync::Arc;

use tracing::error;

use crate::application::auth::{CredentialVerifier, VerifierError};
use crate::cache::{ViewCache, DASHBOARD_PATH, LOGIN_PATH};
use crate::domain::{ActionOutcome, DomainError, FormState, NewUser, UserRepository};
use crate::infrastructure::crypto::PasswordHasher;
use crate::schema::{parse_registration, FieldBag};

pub struct UserActions {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    verifier: Arc<dyn CredentialVerifier>,
    cache: Arc<ViewCache>,
}

impl UserActions {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        verifier: Arc<dyn CredentialVerifier>,
        cache: Arc<ViewCache>,
    ) -> Self {
        Self {
            users,
            hasher,
            verifier,
            cache,
        }
    }

    /// Register a new user. The password is hashed only after the whole
    /// bag validates; the plaintext goes no further than the hashing call
    /// and is never logged.
    pub async fn sign_up_user(&self, _prev: &FormState, bag: &FieldBag) -> ActionOutcome {
        let input = match parse_registration(bag) {
            Ok(input) => input,
            Err(errors) => {
                return ActionOutcome::Render(FormState::with_errors(
                    errors,
                    "Missing Fields. Failed to Create User.",
                ))
            }
        };

        let password_hash = match self.hasher.hash(&input.password) {
            Ok(hash) => hash,
            Err(e) => {
                error!(error = %e, "failed to hash password");
                return ActionOutcome::render_message("Database Error: Failed to Create User.");
            }
        };

        let user = NewUser {
            name: input.name,
            email: input.email,
            password_hash,
        };

        if let Err(e) = self.users.insert(user).await {
            error!(error = %e, "failed to create user");
            return ActionOutcome::render_message("Database Error: Failed to Create User.");
        }

        self.cache.invalidate(LOGIN_PATH);
        ActionOutcome::Redirect(LOGIN_PATH)
    }

    /// Log a user in. Credentials are passed opaquely to the verifier; the
    /// only failures surfaced to the form are "Invalid credentials." and
    /// "Something went wrong." — anything outside the verifier's error
    /// family is fatal for the request and propagates.
    pub async fn authenticate(
        &self,
        _prev: &FormState,
        bag: &FieldBag,
    ) -> Result<ActionOutcome, DomainError> {
        let email = bag.get("email").unwrap_or_default();
        let password = bag.get("password").unwrap_or_default();

        match self.verifier.verify(email, password).await {
            Ok(()) => Ok(ActionOutcome::Redirect(DASHBOARD_PATH)),
            Err(VerifierError::InvalidCredentials) => {
                Ok(ActionOutcome::render_message("Invalid credentials."))
            }
            Err(VerifierError::Failed(reason)) => {
                error!(reason, "credential verifier failed");
                Ok(ActionOutcome::render_message("Something went wrong."))
            }
            Err(VerifierError::Unexpected(e)) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::domain::{DomainResult, User};

    #[derive(Default)]
    struct MockUserRepo {
        fail_writes: bool,
        inserted: Mutex<Vec<NewUser>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepo {
        async fn insert(&self, user: NewUser) -> DomainResult<()> {
            if self.fail_writes {
                return Err(DomainError::Database("unique violation".into()));
            }
            self.inserted.lock().unwrap().push(user);
            Ok(())
        }

        async fn find_by_email(&self, _email: &str) -> DomainResult<Option<User>> {
            Ok(None)
        }

        async fn count(&self) -> DomainResult<u64> {
            Ok(0)
        }
    }

    /// Counts hash calls instead of doing real bcrypt work.
    #[derive(Default)]
    struct CountingHasher {
        calls: AtomicUsize,
    }

    impl PasswordHasher for CountingHasher {
        fn hash(&self, password: &str) -> DomainResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("hashed({password})"))
        }

        fn verify(&self, _password: &str, _hash: &str) -> DomainResult<bool> {
            Ok(true)
        }
    }

    /// Verifier scripted to return one fixed result.
    struct ScriptedVerifier {
        result: fn() -> Result<(), VerifierError>,
    }

    #[async_trait]
    impl CredentialVerifier for ScriptedVerifier {
        async fn verify(&self, _email: &str, _password: &str) -> Result<(), VerifierError> {
            (self.result)()
        }
    }

    struct Harness {
        repo: Arc<MockUserRepo>,
        hasher: Arc<CountingHasher>,
        cache: Arc<ViewCache>,
        actions: UserActions,
    }

    fn harness_with(repo: MockUserRepo, result: fn() -> Result<(), VerifierError>) -> Harness {
        let repo = Arc::new(repo);
        let hasher = Arc::new(CountingHasher::default());
        let cache = Arc::new(ViewCache::new());
        let actions = UserActions::new(
            repo.clone(),
            hasher.clone(),
            Arc::new(ScriptedVerifier { result }),
            cache.clone(),
        );
        Harness {
            repo,
            hasher,
            cache,
            actions,
        }
    }

    fn harness() -> Harness {
        harness_with(MockUserRepo::default(), || Ok(()))
    }

    fn valid_bag() -> FieldBag {
        FieldBag::from([
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "abc123"),
            ("confirmPassword", "abc123"),
        ])
    }

    #[tokio::test]
    async fn sign_up_hashes_then_persists_then_redirects() {
        let h = harness();

        let outcome = h.actions.sign_up_user(&FormState::default(), &valid_bag()).await;

        assert_eq!(outcome, ActionOutcome::Redirect(LOGIN_PATH));
        assert_eq!(h.hasher.calls.load(Ordering::SeqCst), 1);
        let inserted = h.repo.inserted.lock().unwrap();
        assert_eq!(inserted[0].password_hash, "hashed(abc123)");
        assert!(h.cache.is_stale(LOGIN_PATH, 0));
    }

    #[tokio::test]
    async fn short_password_never_reaches_hasher_or_store() {
        let h = harness();
        let mut bag = valid_bag();
        bag.insert("password", "abc12");
        bag.insert("confirmPassword", "abc12");

        let outcome = h.actions.sign_up_user(&FormState::default(), &bag).await;

        let ActionOutcome::Render(state) = outcome else {
            panic!("should re-render");
        };
        assert!(state.errors.unwrap().contains_key("password"));
        assert_eq!(h.hasher.calls.load(Ordering::SeqCst), 0);
        assert!(h.repo.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn password_mismatch_performs_no_store_call() {
        let h = harness();
        let mut bag = valid_bag();
        bag.insert("confirmPassword", "different");

        let outcome = h.actions.sign_up_user(&FormState::default(), &bag).await;

        let ActionOutcome::Render(state) = outcome else {
            panic!("should re-render");
        };
        assert_eq!(
            state.errors.unwrap()["confirmPassword"],
            vec!["Passwords do not match."]
        );
        assert!(h.repo.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sign_up_store_failure_is_generic() {
        let h = harness_with(MockUserRepo { fail_writes: true, ..Default::default() }, || Ok(()));

        let outcome = h.actions.sign_up_user(&FormState::default(), &valid_bag()).await;

        // The underlying cause is logged, never echoed to the form.
        assert_eq!(
            outcome,
            ActionOutcome::render_message("Database Error: Failed to Create User.")
        );
        assert!(!h.cache.is_stale(LOGIN_PATH, 0));
    }

    fn login_bag() -> FieldBag {
        FieldBag::from([("email", "ada@example.com"), ("password", "abc123")])
    }

    #[tokio::test]
    async fn authenticate_success_redirects_to_dashboard() {
        let h = harness();
        let outcome = h
            .actions
            .authenticate(&FormState::default(), &login_bag())
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Redirect(DASHBOARD_PATH));
    }

    #[tokio::test]
    async fn bad_credentials_surface_the_exact_message() {
        let h = harness_with(MockUserRepo::default(), || {
            Err(VerifierError::InvalidCredentials)
        });
        let outcome = h
            .actions
            .authenticate(&FormState::default(), &login_bag())
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::render_message("Invalid credentials."));
    }

    #[tokio::test]
    async fn other_verifier_failures_are_generic() {
        let h = harness_with(MockUserRepo::default(), || {
            Err(VerifierError::Failed("token service down".into()))
        });
        let outcome = h
            .actions
            .authenticate(&FormState::default(), &login_bag())
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::render_message("Something went wrong."));
    }

    #[tokio::test]
    async fn unrecognized_errors_propagate() {
        let h = harness_with(MockUserRepo::default(), || {
            Err(VerifierError::Unexpected(DomainError::Database(
                "connection reset".into(),
            )))
        });
        let err = h
            .actions
            .authenticate(&FormState::default(), &login_bag())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }
}
