use std::sync::Arc;

use tracing::{info, instrument};

use super::ensure_car_exists;
use crate::domain::{Booking, BookingPatch, NewBooking};
use crate::errors::ServiceError;
use crate::repository::{BookingRepository, CarRepository};

/// Bookings carry no date-ordering or status-transition rules; any status
/// may replace any other.
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    cars: Arc<dyn CarRepository>,
}

impl BookingService {
    pub fn new(bookings: Arc<dyn BookingRepository>, cars: Arc<dyn CarRepository>) -> Self { Self { bookings, cars } }

    pub async fn list(&self) -> Result<Vec<Booking>, ServiceError> { self.bookings.list().await }

    pub async fn get(&self, id: i64) -> Result<Booking, ServiceError> {
        self.bookings.get(id).await?.ok_or_else(|| ServiceError::not_found("booking", id))
    }

    #[instrument(skip(self, input), fields(car_id = input.car_id))]
    pub async fn create(&self, mut input: NewBooking) -> Result<Booking, ServiceError> {
        input.validate()?;
        ensure_car_exists(self.cars.as_ref(), input.car_id).await?;
        let booking = self.bookings.create(input).await?;
        info!(booking_id = booking.id, status = ?booking.status, "booking_created");
        Ok(booking)
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i64, input: NewBooking) -> Result<Booking, ServiceError> {
        self.update(id, input.into()).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, mut patch: BookingPatch) -> Result<Booking, ServiceError> {
        self.get(id).await?;
        patch.validate()?;
        if let Some(car_id) = patch.car_id {
            ensure_car_exists(self.cars.as_ref(), car_id).await?;
        }
        self.bookings.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.bookings.delete(id).await? {
            return Err(ServiceError::not_found("booking", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingStatus, NewCar};
    use crate::Repositories;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    async fn setup() -> (BookingService, i64) {
        let repos = Repositories::in_memory();
        let car = repos
            .cars
            .create(NewCar {
                brand: "Tesla".into(),
                model: "Model 3".into(),
                daily_rate: Decimal::new(9900, 2),
                image_url: "https://cdn.example.com/m3.png".into(),
                is_available: true,
                description: String::new(),
            })
            .await
            .unwrap();
        (BookingService::new(repos.bookings, repos.cars), car.id)
    }

    fn booking(car_id: i64) -> NewBooking {
        NewBooking {
            car_id,
            user_email: "renter@example.com".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            total_price: Decimal::from(900),
            status: BookingStatus::default(),
        }
    }

    #[tokio::test]
    async fn defaults_to_pending_and_allows_any_transition() {
        let (svc, car_id) = setup().await;
        // end before start is accepted as-is
        let b = svc.create(booking(car_id)).await.unwrap();
        assert_eq!(b.status, BookingStatus::Pending);
        assert_eq!(b.total_price.to_string(), "900.00");

        let patch = |status| BookingPatch { status: Some(status), ..BookingPatch::default() };
        assert_eq!(svc.update(b.id, patch(BookingStatus::Confirmed)).await.unwrap().status, BookingStatus::Confirmed);
        assert_eq!(svc.update(b.id, patch(BookingStatus::Pending)).await.unwrap().status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn unknown_car_is_not_found_and_nothing_is_stored() {
        let (svc, car_id) = setup().await;
        let err = svc.create(booking(car_id + 100)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_email_is_rejected() {
        let (svc, car_id) = setup().await;
        let mut input = booking(car_id);
        input.user_email = "renter-at-example".into();
        assert!(matches!(svc.create(input).await, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn retargeting_to_missing_car_is_not_found() {
        let (svc, car_id) = setup().await;
        let b = svc.create(booking(car_id)).await.unwrap();
        let err = svc
            .update(b.id, BookingPatch { car_id: Some(car_id + 1), ..BookingPatch::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.get(b.id).await.unwrap().car_id, car_id);
    }
}
