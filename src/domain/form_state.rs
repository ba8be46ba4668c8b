//! Transient per-submission form state
//!
//! `FormState` is the sole contract between the action handlers and the
//! form renderer: field-scoped validation messages plus an optional
//! top-level status message. It lives for one request/render cycle and
//! is never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Field name → ordered list of human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormState {
    /// Per-field validation messages. `None` when validation passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Top-level status message summarizing the failure class (or success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    /// State carrying only a top-level message ("Database Error: ...",
    /// "Deleted Invoice.", ...).
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// State carrying field errors plus a summary message.
    pub fn with_errors(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}

/// Outcome of an action handler.
///
/// The original dashboard redirects via non-local control transfer; here the
/// two terminal behaviors are explicit variants so the handler stays a pure
/// function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Re-render the form with this state (validation failure, store
    /// failure, or an in-place success message).
    Render(FormState),
    /// Non-returning redirect to a listing path after a successful write.
    Redirect(&'static str),
}

impl ActionOutcome {
    pub fn render_message(message: impl Into<String>) -> Self {
        ActionOutcome::Render(FormState::with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_only_state_has_no_errors() {
        let state = FormState::with_message("Deleted Invoice.");
        assert!(!state.has_errors());
        assert_eq!(state.message.as_deref(), Some("Deleted Invoice."));
    }

    #[test]
    fn serializes_without_null_fields() {
        let state = FormState::with_message("ok");
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("errors").is_none());
        assert_eq!(json["message"], "ok");
    }

    #[test]
    fn field_errors_round_trip() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "amount".into(),
            vec!["Please enter an amount greater than $0.".into()],
        );
        let state = FormState::with_errors(errors, "Missing Fields. Failed to Create Invoice.");
        assert!(state.has_errors());
        let json = serde_json::to_string(&state).unwrap();
        let back: FormState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
