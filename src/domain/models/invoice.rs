use chrono::NaiveDate;

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// Invoice model
///
/// `amount` is stored in integer cents: the validated decimal amount
/// multiplied by 100 and rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Fields of a new invoice; `id` and `date` are generated server-side.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Mutable fields of an existing invoice. `id` and `date` are immutable
/// after creation and deliberately absent here.
#[derive(Debug, Clone)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}
