//! Migration to create charging_records table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChargingRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChargingRecords::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChargingRecords::ChargingStation)
                            .string_len(64)
                            .not_null(),
                    )
                    // The reading is stored as submitted, no numeric coercion
                    .col(
                        ColumnDef::new(ChargingRecords::KwValue)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChargingRecords::Date).date().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChargingRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChargingRecords {
    Table,
    Id,
    ChargingStation,
    KwValue,
    Date,
}
