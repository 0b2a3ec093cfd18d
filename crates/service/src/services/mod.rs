//! Application services: validation, related-car checks and the derived
//! rating, on top of the repository traits.

pub mod cars;
pub mod bookings;
pub mod reviews;
pub mod wishlists;

pub use bookings::BookingService;
pub use cars::CarService;
pub use reviews::ReviewService;
pub use wishlists::WishlistService;

use crate::domain::CarId;
use crate::errors::ServiceError;
use crate::repository::CarRepository;

/// Child records may only point at an existing car; a dangling id is
/// reported as `NotFound` before anything is written.
pub(crate) async fn ensure_car_exists(cars: &dyn CarRepository, car_id: CarId) -> Result<(), ServiceError> {
    match cars.get(car_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::not_found("car", car_id)),
    }
}
