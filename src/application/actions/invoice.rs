//! Invoice action handlers

use std::sync::Arc;

use chrono::Utc;
use tracing::error;

use crate::cache::{ViewCache, INVOICES_PATH};
use crate::domain::{ActionOutcome, FormState, InvoiceChanges, InvoiceRepository, NewInvoice};
use crate::schema::{parse_invoice, FieldBag};

/// Validated decimal amount → integer cents.
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub struct InvoiceActions {
    repo: Arc<dyn InvoiceRepository>,
    cache: Arc<ViewCache>,
}

impl InvoiceActions {
    pub fn new(repo: Arc<dyn InvoiceRepository>, cache: Arc<ViewCache>) -> Self {
        Self { repo, cache }
    }

    /// Create a new invoice from the submitted field bag. `id` and `date`
    /// are server-generated; the date is the submission day.
    pub async fn create_invoice(&self, _prev: &FormState, bag: &FieldBag) -> ActionOutcome {
        let input = match parse_invoice(bag) {
            Ok(input) => input,
            Err(errors) => {
                return ActionOutcome::Render(FormState::with_errors(
                    errors,
                    "Missing Fields. Failed to Create Invoice.",
                ))
            }
        };

        let invoice = NewInvoice {
            customer_id: input.customer_id,
            amount: to_cents(input.amount),
            status: input.status,
            date: Utc::now().date_naive(),
        };

        if let Err(e) = self.repo.insert(invoice).await {
            error!(error = %e, "failed to create invoice");
            return ActionOutcome::render_message("Database Error: Failed to Create Invoice.");
        }

        self.cache.invalidate(INVOICES_PATH);
        ActionOutcome::Redirect(INVOICES_PATH)
    }

    /// Update the invoice identified by `id`. The statement only touches
    /// `customer_id`, `amount` and `status`; `id` and `date` stay as
    /// created.
    pub async fn update_invoice(
        &self,
        id: &str,
        _prev: &FormState,
        bag: &FieldBag,
    ) -> ActionOutcome {
        let input = match parse_invoice(bag) {
            Ok(input) => input,
            Err(errors) => {
                return ActionOutcome::Render(FormState::with_errors(
                    errors,
                    "Missing Fields. Failed to Update Invoice.",
                ))
            }
        };

        let changes = InvoiceChanges {
            customer_id: input.customer_id,
            amount: to_cents(input.amount),
            status: input.status,
        };

        if let Err(e) = self.repo.update(id, changes).await {
            error!(error = %e, invoice_id = id, "failed to update invoice");
            return ActionOutcome::render_message("Database Error: Failed to Update Invoice.");
        }

        self.cache.invalidate(INVOICES_PATH);
        ActionOutcome::Redirect(INVOICES_PATH)
    }

    /// Delete the invoice identified by `id`. Re-renders in place with a
    /// status message; never redirects and never raises.
    pub async fn delete_invoice(&self, id: &str) -> FormState {
        if let Err(e) = self.repo.delete(id).await {
            error!(error = %e, invoice_id = id, "failed to delete invoice");
            return FormState::with_message("Database Error: Failed to Delete Invoice.");
        }

        self.cache.invalidate(INVOICES_PATH);
        FormState::with_message("Deleted Invoice.")
    }
}
