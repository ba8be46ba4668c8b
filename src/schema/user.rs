//! User registration schema

use validator::ValidateEmail;

use crate::domain::FieldErrors;

use super::{FieldBag, SchemaReport};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Coerced registration fields. The plaintext password is carried only as
/// far as the hashing call in the sign-up handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn parse_registration(bag: &FieldBag) -> Result<RegistrationInput, FieldErrors> {
    let mut report = SchemaReport::new();

    let name = match bag.get_non_empty("name") {
        Some(v) => v.to_string(),
        None => {
            report.push("name", "Please enter your name.");
            String::new()
        }
    };

    let email = match bag.get_non_empty("email") {
        Some(v) if v.validate_email() => v.to_string(),
        _ => {
            report.push("email", "Please enter a valid email address.");
            String::new()
        }
    };

    let password = bag.get("password").unwrap_or_default().to_string();
    if password.chars().count() < MIN_PASSWORD_LEN {
        report.push(
            "password",
            "Password must be at least 6 characters long.",
        );
    }

    // Cross-field check; only meaningful once the password itself is valid.
    let confirm = bag.get("confirmPassword").unwrap_or_default();
    if confirm != password {
        report.push("confirmPassword", "Passwords do not match.");
    }

    report.into_result(RegistrationInput {
        name,
        email,
        password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_bag() -> FieldBag {
        FieldBag::from([
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "abc123"),
            ("confirmPassword", "abc123"),
        ])
    }

    #[test]
    fn accepts_valid_registration() {
        let input = parse_registration(&valid_bag()).unwrap();
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, "abc123");
    }

    #[test]
    fn rejects_five_char_password() {
        let mut bag = valid_bag();
        bag.insert("password", "abc12");
        bag.insert("confirmPassword", "abc12");
        let errors = parse_registration(&bag).unwrap_err();
        assert_eq!(
            errors["password"],
            vec!["Password must be at least 6 characters long."]
        );
    }

    #[test]
    fn rejects_password_mismatch() {
        let mut bag = valid_bag();
        bag.insert("confirmPassword", "abc124");
        let errors = parse_registration(&bag).unwrap_err();
        assert_eq!(errors["confirmPassword"], vec!["Passwords do not match."]);
    }

    #[test]
    fn rejects_bad_email_syntax() {
        for email in ["not-an-email", "a@", "@b.com", ""] {
            let mut bag = valid_bag();
            bag.insert("email", email);
            let errors = parse_registration(&bag).unwrap_err();
            assert_eq!(
                errors["email"],
                vec!["Please enter a valid email address."],
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_name_is_reported() {
        let mut bag = valid_bag();
        bag.insert("name", "");
        let errors = parse_registration(&bag).unwrap_err();
        assert_eq!(errors["name"], vec!["Please enter your name."]);
    }
}
