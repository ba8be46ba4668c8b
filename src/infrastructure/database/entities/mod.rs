//! Database entities module

pub mod charging_record;
pub mod customer;
pub mod invoice;
pub mod user;

pub use charging_record::Entity as ChargingRecord;
pub use customer::Entity as Customer;
pub use invoice::Entity as Invoice;
pub use user::Entity as User;
