use std::sync::Arc;

use tracing::{info, instrument};

use super::ensure_car_exists;
use crate::domain::{NewReview, Review, ReviewPatch};
use crate::errors::ServiceError;
use crate::repository::{CarRepository, ReviewRepository};

/// Ratings are stored as given; no bounds are enforced.
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    cars: Arc<dyn CarRepository>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, cars: Arc<dyn CarRepository>) -> Self { Self { reviews, cars } }

    /// Most recent first.
    pub async fn list(&self) -> Result<Vec<Review>, ServiceError> { self.reviews.list().await }

    pub async fn get(&self, id: i64) -> Result<Review, ServiceError> {
        self.reviews.get(id).await?.ok_or_else(|| ServiceError::not_found("review", id))
    }

    #[instrument(skip(self, input), fields(car_id = input.car_id, rating = input.rating))]
    pub async fn create(&self, input: NewReview) -> Result<Review, ServiceError> {
        input.validate()?;
        ensure_car_exists(self.cars.as_ref(), input.car_id).await?;
        let review = self.reviews.create(input).await?;
        info!(review_id = review.id, "review_created");
        Ok(review)
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i64, input: NewReview) -> Result<Review, ServiceError> {
        self.update(id, input.into()).await
    }

    /// `created_at` is never touched by an update.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, ServiceError> {
        self.get(id).await?;
        patch.validate()?;
        if let Some(car_id) = patch.car_id {
            ensure_car_exists(self.cars.as_ref(), car_id).await?;
        }
        self.reviews.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.reviews.delete(id).await? {
            return Err(ServiceError::not_found("review", id));
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

    async fn setup() -> (ReviewService, i64) {
        let repos = Repositories::in_memory();
        let car = repos
            .cars
            .create(NewCar {
                brand: "BMW".into(),
                model: "M3".into(),
                daily_rate: Decimal::new(20000, 2),
                image_url: "https://cdn.example.com/m3.png".into(),
                is_available: true,
                description: String::new(),
            })
            .await
            .unwrap();
        (ReviewService::new(repos.reviews, repos.cars), car.id)
    }

    fn review(car_id: i64, text: &str) -> NewReview {
        NewReview { car_id, user_email: "alice".into(), rating: 5, text: text.into() }
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (svc, car_id) = setup().await;
        let first = svc.create(review(car_id, "first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = svc.create(review(car_id, "second")).await.unwrap();

        let ids: Vec<i64> = svc.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let (svc, car_id) = setup().await;
        let r = svc.create(review(car_id, "ok")).await.unwrap();
        let updated = svc
            .update(r.id, ReviewPatch { rating: Some(2), ..ReviewPatch::default() })
            .await
            .unwrap();
        assert_eq!(updated.rating, 2);
        assert_eq!(updated.created_at, r.created_at);
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let (svc, car_id) = setup().await;
        assert!(matches!(svc.create(review(car_id, "")).await, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn unknown_car_is_not_found() {
        let (svc, car_id) = setup().await;
        assert!(matches!(svc.create(review(car_id + 1, "x")).await, Err(ServiceError::NotFound(_))));
    }
}
