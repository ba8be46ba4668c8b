//! SeaORM implementations of the domain repository traits

pub mod charging_repository;
pub mod customer_repository;
pub mod invoice_repository;
pub mod user_repository;

pub use charging_repository::SeaOrmChargingRecordRepository;
pub use customer_repository::SeaOrmCustomerRepository;
pub use invoice_repository::SeaOrmInvoiceRepository;
pub use user_repository::SeaOrmUserRepository;
