//! Create `wishlist` table with FK to `car`.
//!
//! No unique key on (car_id, user_email): the same car may be favorited twice.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wishlist::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wishlist::CarId).big_integer().not_null())
                    .col(string_len(Wishlist::UserEmail, 254).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_car")
                            .from(Wishlist::Table, Wishlist::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wishlist::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wishlist { Table, Id, CarId, UserEmail }

#[derive(DeriveIden)]
enum Car { Table, Id }
