use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{Car, CarId, CarPatch, CarView, NewCar};
use crate::errors::ServiceError;
use crate::rating::average_rating;
use crate::repository::{CarRepository, ReviewRepository};

pub struct CarService {
    cars: Arc<dyn CarRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl CarService {
    pub fn new(cars: Arc<dyn CarRepository>, reviews: Arc<dyn ReviewRepository>) -> Self { Self { cars, reviews } }

    /// All cars with their current average rating, in id order.
    pub async fn list(&self) -> Result<Vec<CarView>, ServiceError> {
        let cars = self.cars.list().await?;
        let ids: Vec<CarId> = cars.iter().map(|c| c.id).collect();
        let mut ratings = self.reviews.ratings_by_car(&ids).await?;
        Ok(cars
            .into_iter()
            .map(|car| {
                let average_rating = average_rating(&ratings.remove(&car.id).unwrap_or_default());
                CarView { car, average_rating }
            })
            .collect())
    }

    pub async fn get(&self, id: CarId) -> Result<CarView, ServiceError> {
        let car = self.cars.get(id).await?.ok_or_else(|| ServiceError::not_found("car", id))?;
        self.view(car).await
    }

    #[instrument(skip(self, input), fields(brand = %input.brand))]
    pub async fn create(&self, mut input: NewCar) -> Result<CarView, ServiceError> {
        input.validate()?;
        let car = self.cars.create(input).await?;
        info!(car_id = car.id, "car_created");
        self.view(car).await
    }

    /// Full replace; every field comes from `input`.
    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: CarId, input: NewCar) -> Result<CarView, ServiceError> {
        self.update(id, input.into()).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: CarId, mut patch: CarPatch) -> Result<CarView, ServiceError> {
        if self.cars.get(id).await?.is_none() {
            return Err(ServiceError::not_found("car", id));
        }
        patch.validate()?;
        let car = self.cars.update(id, patch).await?;
        self.view(car).await
    }

    /// Removes the car together with its bookings, reviews and wishlist entries.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: CarId) -> Result<(), ServiceError> {
        if !self.cars.delete(id).await? {
            return Err(ServiceError::not_found("car", id));
        }
        info!(car_id = id, "car_deleted");
        Ok(())
    }

    async fn view(&self, car: Car) -> Result<CarView, ServiceError> {
        let ratings = self.reviews.ratings_by_car(&[car.id]).await?.remove(&car.id).unwrap_or_default();
        Ok(CarView { average_rating: average_rating(&ratings), car })
    }
}
