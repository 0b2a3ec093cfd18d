use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Child tables: index on car_id for cascade deletes and rating lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_car")
                    .table(Booking::Table)
                    .col(Booking::CarId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_review_car")
                    .table(Review::Table)
                    .col(Review::CarId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_wishlist_car")
                    .table(Wishlist::Table)
                    .col(Wishlist::CarId)
                    .to_owned(),
            )
            .await?;

        // Review listing is newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_review_created_at")
                    .table(Review::Table)
                    .col(Review::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_car").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_car").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_wishlist_car").table(Wishlist::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_created_at").table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, CarId }

#[derive(DeriveIden)]
enum Review { Table, CarId, CreatedAt }

#[derive(DeriveIden)]
enum Wishlist { Table, CarId }
