use std::sync::Arc;

use tracing::{info, instrument};

use super::ensure_car_exists;
use crate::domain::{NewWishlist, Wishlist, WishlistPatch};
use crate::errors::ServiceError;
use crate::repository::{CarRepository, WishlistRepository};

/// The same (car, user_email) pair may be saved any number of times.
pub struct WishlistService {
    wishlists: Arc<dyn WishlistRepository>,
    cars: Arc<dyn CarRepository>,
}

impl WishlistService {
    pub fn new(wishlists: Arc<dyn WishlistRepository>, cars: Arc<dyn CarRepository>) -> Self { Self { wishlists, cars } }

    pub async fn list(&self) -> Result<Vec<Wishlist>, ServiceError> { self.wishlists.list().await }

    pub async fn get(&self, id: i64) -> Result<Wishlist, ServiceError> {
        self.wishlists.get(id).await?.ok_or_else(|| ServiceError::not_found("wishlist", id))
    }

    #[instrument(skip(self, input), fields(car_id = input.car_id))]
    pub async fn create(&self, input: NewWishlist) -> Result<Wishlist, ServiceError> {
        input.validate()?;
        ensure_car_exists(self.cars.as_ref(), input.car_id).await?;
        let entry = self.wishlists.create(input).await?;
        info!(wishlist_id = entry.id, "wishlist_created");
        Ok(entry)
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i64, input: NewWishlist) -> Result<Wishlist, ServiceError> {
        self.update(id, input.into()).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: WishlistPatch) -> Result<Wishlist, ServiceError> {
        self.get(id).await?;
        patch.validate()?;
        if let Some(car_id) = patch.car_id {
            ensure_car_exists(self.cars.as_ref(), car_id).await?;
        }
        self.wishlists.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.wishlists.delete(id).await? {
            return Err(ServiceError::not_found("wishlist", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewCar;
    use crate::Repositories;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn duplicates_are_kept_as_separate_rows() {
        let repos = Repositories::in_memory();
        let car = repos
            .cars
            .create(NewCar {
                brand: "Audi".into(),
                model: "RS6".into(),
                daily_rate: Decimal::new(30000, 2),
                image_url: "https://cdn.example.com/rs6.png".into(),
                is_available: true,
                description: String::new(),
            })
            .await
            .unwrap();
        let svc = WishlistService::new(repos.wishlists, repos.cars);
        let entry = || NewWishlist { car_id: car.id, user_email: "fan@example.com".into() };

        let a = svc.create(entry()).await.unwrap();
        let b = svc.create(entry()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn email_format_is_checked() {
        let repos = Repositories::in_memory();
        let svc = WishlistService::new(repos.wishlists, repos.cars);
        let err = svc.create(NewWishlist { car_id: 1, user_email: "nope".into() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}
