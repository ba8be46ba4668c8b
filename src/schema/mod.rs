//! Declarative field-bag validation
//!
//! Each form submission arrives as a raw string→string field bag. A schema
//! function checks every declared constraint against the bag and returns
//! either a fully coerced, typed value bundle or the complete set of
//! field-scoped messages. Validation never partially applies: one failing
//! field fails the whole bag. Unknown extra fields are ignored.

pub mod charging;
pub mod invoice;
pub mod user;

use std::collections::HashMap;

use crate::domain::FieldErrors;

pub use charging::{parse_charging_record, ChargingRecordInput};
pub use invoice::{parse_invoice, InvoiceInput};
pub use user::{parse_registration, RegistrationInput};

/// Raw submitted fields, keyed by the external (wire) field name.
#[derive(Debug, Clone, Default)]
pub struct FieldBag(HashMap<String, String>);

impl FieldBag {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Present and non-empty after trimming.
    pub fn get_non_empty(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }
}

impl From<HashMap<String, String>> for FieldBag {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldBag {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut bag = Self::new();
        for (field, value) in pairs {
            bag.insert(field, value);
        }
        bag
    }
}

/// Accumulates field-scoped messages while a schema walks the bag.
#[derive(Debug, Default)]
pub struct SchemaReport {
    errors: FieldErrors,
}

impl SchemaReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Succeeds with `value` only when no field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_treated_as_missing() {
        let bag = FieldBag::from([("customerId", "   ")]);
        assert!(bag.get_non_empty("customerId").is_none());
        assert_eq!(bag.get("customerId"), Some("   "));
    }

    #[test]
    fn report_collects_messages_in_order() {
        let mut report = SchemaReport::new();
        report.push("amount", "first");
        report.push("amount", "second");
        let errors = report.into_result(()).unwrap_err();
        assert_eq!(errors["amount"], vec!["first", "second"]);
    }

    #[test]
    fn clean_report_yields_value() {
        let report = SchemaReport::new();
        assert_eq!(report.into_result(42).unwrap(), 42);
    }
}
