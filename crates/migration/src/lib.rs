//! Migrator registering the rental tables in dependency order.
//! `car` comes first since every other table references it; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_car;
mod m20240601_000002_create_booking;
mod m20240601_000003_create_review;
mod m20240601_000004_create_wishlist;
mod m20240601_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_car::Migration),
            Box::new(m20240601_000002_create_booking::Migration),
            Box::new(m20240601_000003_create_review::Migration),
            Box::new(m20240601_000004_create_wishlist::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000005_add_indexes::Migration),
        ]
    }
}
