//! Migration to create invoices table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::CustomerId).string().not_null())
                    // Amount in integer cents
                    .col(ColumnDef::new(Invoices::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Invoices::Status)
                            .string_len(10)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Invoices::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_customer")
                            .from(Invoices::Table, Invoices::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoices_customer_id")
                    .table(Invoices::Table)
                    .col(Invoices::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoices {
    Table,
    Id,
    CustomerId,
    Amount,
    Status,
    Date,
}
