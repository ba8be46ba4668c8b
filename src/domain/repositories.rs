//! Repository traits
//!
//! Each write method maps to exactly one parameterized SQL statement; a
//! handler invocation never issues more than one write.

use async_trait::async_trait;

use super::error::DomainResult;
use super::models::{
    ChargingRecord, Customer, Invoice, InvoiceChanges, NewChargingRecord, NewInvoice, NewUser,
    User,
};

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn insert(&self, invoice: NewInvoice) -> DomainResult<()>;

    /// Applies `changes` to the row identified by `id`. `id` and `date`
    /// are never part of the SET clause.
    async fn update(&self, id: &str, changes: InvoiceChanges) -> DomainResult<()>;

    /// Deletes the row identified by `id`. Errors with `NotFound` when no
    /// row matched.
    async fn delete(&self, id: &str) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<Invoice>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Invoice>>;
}

#[async_trait]
pub trait ChargingRecordRepository: Send + Sync {
    async fn insert(&self, record: NewChargingRecord) -> DomainResult<()>;
    async fn list(&self) -> DomainResult<Vec<ChargingRecord>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> DomainResult<()>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn count(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, customer: Customer) -> DomainResult<()>;
    async fn list(&self) -> DomainResult<Vec<Customer>>;
}
