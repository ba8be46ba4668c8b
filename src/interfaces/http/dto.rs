//! HTTP DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ChargingRecord, Customer, Invoice};

/// Standard response wrapper for the listing endpoints.
///
/// On success: `{"success": true, "data": {...}}`,
/// on error: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Invoice API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDto {
    pub id: String,
    pub customer_id: String,
    /// Amount in integer cents
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

impl From<Invoice> for InvoiceDto {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: invoice.amount,
            status: invoice.status.as_str().to_string(),
            date: invoice.date,
        }
    }
}

/// Charging record API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChargingRecordDto {
    pub id: String,
    pub charging_station: String,
    pub kw_value: String,
    pub date: NaiveDate,
}

impl From<ChargingRecord> for ChargingRecordDto {
    fn from(record: ChargingRecord) -> Self {
        Self {
            id: record.id,
            charging_station: record.charging_station,
            kw_value: record.kw_value,
            date: record.date,
        }
    }
}

/// Customer API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
        }
    }
}
