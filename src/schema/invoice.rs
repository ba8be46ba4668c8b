//! Invoice form schema
//!
//! Create and update share the same constraints: `id` and `date` are never
//! read from the bag, they are server-controlled.

use crate::domain::{FieldErrors, InvoiceStatus};

use super::{FieldBag, SchemaReport};

/// Coerced invoice fields. `amount` is the validated decimal amount;
/// conversion to integer cents happens in the action handler.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

pub fn parse_invoice(bag: &FieldBag) -> Result<InvoiceInput, FieldErrors> {
    let mut report = SchemaReport::new();

    let customer_id = match bag.get_non_empty("customerId") {
        Some(v) => v.to_string(),
        None => {
            report.push("customerId", "Please select a customer.");
            String::new()
        }
    };

    let amount = match bag.get_non_empty("amount").map(str::parse::<f64>) {
        Some(Ok(v)) if v > 0.0 => v,
        _ => {
            report.push("amount", "Please enter an amount greater than $0.");
            0.0
        }
    };

    let status = match bag.get("status") {
        Some("pending") => InvoiceStatus::Pending,
        Some("paid") => InvoiceStatus::Paid,
        _ => {
            report.push("status", "Please select an invoice status.");
            InvoiceStatus::Pending
        }
    };

    report.into_result(InvoiceInput {
        customer_id,
        amount,
        status,
    })
}
