//! Create `car` table.
//!
//! Root of the schema; bookings, reviews and wishlist entries reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Car::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Car::Brand, 50).not_null())
                    .col(string_len(Car::Model, 50).not_null())
                    .col(ColumnDef::new(Car::DailyRate).decimal_len(10, 2).not_null())
                    .col(string_len(Car::ImageUrl, 200).not_null())
                    .col(ColumnDef::new(Car::IsAvailable).boolean().not_null().default(true))
                    .col(ColumnDef::new(Car::Description).text().not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Car { Table, Id, Brand, Model, DailyRate, ImageUrl, IsAvailable, Description }
