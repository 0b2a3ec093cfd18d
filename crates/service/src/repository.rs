use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{
    Booking, BookingPatch, Car, CarId, CarPatch, NewBooking, NewCar, NewReview, NewWishlist, Review, ReviewPatch,
    Wishlist, WishlistPatch,
};
use crate::errors::ServiceError;
use crate::repo::seaorm::SeaOrmRepository;

/// Car persistence. Deleting a car also removes its bookings, reviews and
/// wishlist entries.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Car>, ServiceError>;
    async fn get(&self, id: CarId) -> Result<Option<Car>, ServiceError>;
    async fn create(&self, input: NewCar) -> Result<Car, ServiceError>;
    async fn update(&self, id: CarId, patch: CarPatch) -> Result<Car, ServiceError>;
    async fn delete(&self, id: CarId) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Booking>, ServiceError>;
    async fn create(&self, input: NewBooking) -> Result<Booking, ServiceError>;
    async fn update(&self, id: i64, patch: BookingPatch) -> Result<Booking, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Newest first (`created_at` descending, then id descending).
    async fn list(&self) -> Result<Vec<Review>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Review>, ServiceError>;
    async fn create(&self, input: NewReview) -> Result<Review, ServiceError>;
    async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    /// Ratings of every review for the given cars, keyed by car id.
    /// Cars without reviews are absent from the map.
    async fn ratings_by_car(&self, car_ids: &[CarId]) -> Result<HashMap<CarId, Vec<i32>>, ServiceError>;
}

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Wishlist>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Wishlist>, ServiceError>;
    async fn create(&self, input: NewWishlist) -> Result<Wishlist, ServiceError>;
    async fn update(&self, id: i64, patch: WishlistPatch) -> Result<Wishlist, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// One handle per resource, all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub cars: Arc<dyn CarRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub wishlists: Arc<dyn WishlistRepository>,
}

impl Repositories {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::from_store(Arc::new(SeaOrmRepository { db }))
    }

    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(mock::InMemoryRepository::default()))
    }

    fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CarRepository + BookingRepository + ReviewRepository + WishlistRepository + 'static,
    {
        Self { cars: store.clone(), bookings: store.clone(), reviews: store.clone(), wishlists: store }
    }
}

/// In-memory repository for tests and local runs without a database.
/// Enforces the same foreign keys and cascade as the SQL schema.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;

    #[derive(Default)]
    struct Tables {
        next_id: i64,
        cars: BTreeMap<i64, Car>,
        bookings: BTreeMap<i64, Booking>,
        reviews: BTreeMap<i64, Review>,
        wishlists: BTreeMap<i64, Wishlist>,
    }

    impl Tables {
        fn next_id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }

        fn require_car(&self, car_id: CarId) -> Result<(), ServiceError> {
            if self.cars.contains_key(&car_id) {
                Ok(())
            } else {
                Err(ServiceError::Integrity(format!("car {} does not exist", car_id)))
            }
        }
    }

    #[derive(Default)]
    pub struct InMemoryRepository {
        tables: Mutex<Tables>,
    }

    impl InMemoryRepository {
        fn lock(&self) -> MutexGuard<'_, Tables> {
            // a panicking test thread must not wedge the others
            self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    #[async_trait]
    impl CarRepository for InMemoryRepository {
        async fn list(&self) -> Result<Vec<Car>, ServiceError> {
            Ok(self.lock().cars.values().cloned().collect())
        }

        async fn get(&self, id: CarId) -> Result<Option<Car>, ServiceError> {
            Ok(self.lock().cars.get(&id).cloned())
        }

        async fn create(&self, input: NewCar) -> Result<Car, ServiceError> {
            let mut t = self.lock();
            let car = Car {
                id: t.next_id(),
                brand: input.brand,
                model: input.model,
                daily_rate: input.daily_rate,
                image_url: input.image_url,
                is_available: input.is_available,
                description: input.description,
            };
            t.cars.insert(car.id, car.clone());
            Ok(car)
        }

        async fn update(&self, id: CarId, patch: CarPatch) -> Result<Car, ServiceError> {
            let mut t = self.lock();
            let car = t.cars.get_mut(&id).ok_or_else(|| ServiceError::not_found("car", id))?;
            patch.apply(car);
            Ok(car.clone())
        }

        async fn delete(&self, id: CarId) -> Result<bool, ServiceError> {
            let mut t = self.lock();
            if t.cars.remove(&id).is_none() {
                return Ok(false);
            }
            t.bookings.retain(|_, b| b.car_id != id);
            t.reviews.retain(|_, r| r.car_id != id);
            t.wishlists.retain(|_, w| w.car_id != id);
            Ok(true)
        }
    }

    #[async_trait]
    impl BookingRepository for InMemoryRepository {
        async fn list(&self) -> Result<Vec<Booking>, ServiceError> {
            Ok(self.lock().bookings.values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<Booking>, ServiceError> {
            Ok(self.lock().bookings.get(&id).cloned())
        }

        async fn create(&self, input: NewBooking) -> Result<Booking, ServiceError> {
            let mut t = self.lock();
            t.require_car(input.car_id)?;
            let booking = Booking {
                id: t.next_id(),
                car_id: input.car_id,
                user_email: input.user_email,
                start_date: input.start_date,
                end_date: input.end_date,
                total_price: input.total_price,
                status: input.status,
            };
            t.bookings.insert(booking.id, booking.clone());
            Ok(booking)
        }

        async fn update(&self, id: i64, patch: BookingPatch) -> Result<Booking, ServiceError> {
            let mut t = self.lock();
            if let Some(car_id) = patch.car_id {
                t.require_car(car_id)?;
            }
            let booking = t.bookings.get_mut(&id).ok_or_else(|| ServiceError::not_found("booking", id))?;
            patch.apply(booking);
            Ok(booking.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock().bookings.remove(&id).is_some())
        }
    }

    #[async_trait]
    impl ReviewRepository for InMemoryRepository {
        async fn list(&self) -> Result<Vec<Review>, ServiceError> {
            let mut rows: Vec<Review> = self.lock().reviews.values().cloned().collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(rows)
        }

        async fn get(&self, id: i64) -> Result<Option<Review>, ServiceError> {
            Ok(self.lock().reviews.get(&id).cloned())
        }

        async fn create(&self, input: NewReview) -> Result<Review, ServiceError> {
            let mut t = self.lock();
            t.require_car(input.car_id)?;
            let review = Review {
                id: t.next_id(),
                car_id: input.car_id,
                user_email: input.user_email,
                rating: input.rating,
                text: input.text,
                created_at: Utc::now(),
            };
            t.reviews.insert(review.id, review.clone());
            Ok(review)
        }

        async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, ServiceError> {
            let mut t = self.lock();
            if let Some(car_id) = patch.car_id {
                t.require_car(car_id)?;
            }
            let review = t.reviews.get_mut(&id).ok_or_else(|| ServiceError::not_found("review", id))?;
            patch.apply(review);
            Ok(review.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock().reviews.remove(&id).is_some())
        }

        async fn ratings_by_car(&self, car_ids: &[CarId]) -> Result<HashMap<CarId, Vec<i32>>, ServiceError> {
            let t = self.lock();
            let mut out: HashMap<CarId, Vec<i32>> = HashMap::new();
            for r in t.reviews.values().filter(|r| car_ids.contains(&r.car_id)) {
                out.entry(r.car_id).or_default().push(r.rating);
            }
            Ok(out)
        }
    }

    #[async_trait]
    impl WishlistRepository for InMemoryRepository {
        async fn list(&self) -> Result<Vec<Wishlist>, ServiceError> {
            Ok(self.lock().wishlists.values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<Wishlist>, ServiceError> {
            Ok(self.lock().wishlists.get(&id).cloned())
        }

        async fn create(&self, input: NewWishlist) -> Result<Wishlist, ServiceError> {
            let mut t = self.lock();
            t.require_car(input.car_id)?;
            let entry = Wishlist { id: t.next_id(), car_id: input.car_id, user_email: input.user_email };
            t.wishlists.insert(entry.id, entry.clone());
            Ok(entry)
        }

        async fn update(&self, id: i64, patch: WishlistPatch) -> Result<Wishlist, ServiceError> {
            let mut t = self.lock();
            if let Some(car_id) = patch.car_id {
                t.require_car(car_id)?;
            }
            let entry = t.wishlists.get_mut(&id).ok_or_else(|| ServiceError::not_found("wishlist", id))?;
            patch.apply(entry);
            Ok(entry.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock().wishlists.remove(&id).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use rust_decimal::Decimal;

        fn porsche() -> NewCar {
            NewCar {
                brand: "Porsche".into(),
                model: "911 GT3".into(),
                daily_rate: Decimal::new(45000, 2),
                image_url: "https://cdn.example.com/911.png".into(),
                is_available: true,
                description: String::new(),
            }
        }

        #[tokio::test]
        async fn car_delete_cascades_to_children() {
            let repo = InMemoryRepository::default();
            let car = CarRepository::create(&repo, porsche()).await.unwrap();
            let review = ReviewRepository::create(
                &repo,
                NewReview { car_id: car.id, user_email: "driver".into(), rating: 4, text: "Fast".into() },
            )
            .await
            .unwrap();
            let fav = WishlistRepository::create(&repo, NewWishlist { car_id: car.id, user_email: "fan@example.com".into() })
                .await
                .unwrap();

            assert!(CarRepository::delete(&repo, car.id).await.unwrap());
            assert!(ReviewRepository::get(&repo, review.id).await.unwrap().is_none());
            assert!(WishlistRepository::get(&repo, fav.id).await.unwrap().is_none());
            assert!(!CarRepository::delete(&repo, car.id).await.unwrap());
        }

        #[tokio::test]
        async fn child_rows_need_an_existing_car() {
            let repo = InMemoryRepository::default();
            let err = WishlistRepository::create(&repo, NewWishlist { car_id: 42, user_email: "fan@example.com".into() })
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Integrity(_)));
        }

        #[tokio::test]
        async fn ratings_are_grouped_per_car() {
            let repo = InMemoryRepository::default();
            let a = CarRepository::create(&repo, porsche()).await.unwrap();
            let b = CarRepository::create(&repo, porsche()).await.unwrap();
            for (car_id, rating) in [(a.id, 4), (a.id, 5), (b.id, 2)] {
                ReviewRepository::create(&repo, NewReview { car_id, user_email: "u".into(), rating, text: "t".into() })
                    .await
                    .unwrap();
            }
            let map = repo.ratings_by_car(&[a.id]).await.unwrap();
            assert_eq!(map.get(&a.id).map(Vec::len), Some(2));
            assert!(!map.contains_key(&b.id));
        }
    }
}
