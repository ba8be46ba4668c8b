//! Core business entities, errors and repository traits

pub mod error;
pub mod form_state;
pub mod models;
pub mod repositories;

pub use error::{DomainError, DomainResult};
pub use form_state::{ActionOutcome, FieldErrors, FormState};
pub use models::{
    ChargingRecord, Customer, Invoice, InvoiceChanges, InvoiceStatus, NewChargingRecord,
    NewInvoice, NewUser, User,
};
pub use repositories::{
    ChargingRecordRepository, CustomerRepository, InvoiceRepository, UserRepository,
};
