//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_customers;
mod m20240101_000002_create_invoices;
mod m20240101_000003_create_charging_records;
mod m20240101_000004_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_customers::Migration),
            Box::new(m20240101_000002_create_invoices::Migration),
            Box::new(m20240101_000003_create_charging_records::Migration),
            Box::new(m20240101_000004_create_users::Migration),
        ]
    }
}
