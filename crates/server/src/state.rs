use std::sync::Arc;

use service::services::{BookingService, CarService, ReviewService, WishlistService};
use service::Repositories;

/// Shared handler state: one service per resource over a common store.
#[derive(Clone)]
pub struct ServerState {
    pub cars: Arc<CarService>,
    pub bookings: Arc<BookingService>,
    pub reviews: Arc<ReviewService>,
    pub wishlists: Arc<WishlistService>,
}

impl ServerState {
    pub fn new(repos: Repositories) -> Self {
        Self {
            cars: Arc::new(CarService::new(repos.cars.clone(), repos.reviews.clone())),
            bookings: Arc::new(BookingService::new(repos.bookings.clone(), repos.cars.clone())),
            reviews: Arc::new(ReviewService::new(repos.reviews.clone(), repos.cars.clone())),
            wishlists: Arc::new(WishlistService::new(repos.wishlists, repos.cars)),
        }
    }
}
