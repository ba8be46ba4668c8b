//! Domain models

pub mod charging_record;
pub mod customer;
pub mod invoice;
pub mod user;

pub use charging_record::{ChargingRecord, NewChargingRecord};
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
pub use user::{NewUser, User};
