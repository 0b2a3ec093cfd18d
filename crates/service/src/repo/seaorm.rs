use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use models::{booking, car, review, wishlist};

use crate::domain::{
    Booking, BookingPatch, Car, CarId, CarPatch, NewBooking, NewCar, NewReview, NewWishlist, Review, ReviewPatch,
    Wishlist, WishlistPatch,
};
use crate::errors::ServiceError;
use crate::repository::{BookingRepository, CarRepository, ReviewRepository, WishlistRepository};

/// Postgres-backed store. Cascading deletes are left to the
/// `ON DELETE CASCADE` foreign keys created by the migrations.
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

fn to_car(m: car::Model) -> Car {
    Car {
        id: m.id,
        brand: m.brand,
        model: m.model_name,
        daily_rate: m.daily_rate,
        image_url: m.image_url,
        is_available: m.is_available,
        description: m.description,
    }
}

fn to_booking(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        car_id: m.car_id,
        user_email: m.user_email,
        start_date: m.start_date,
        end_date: m.end_date,
        total_price: m.total_price,
        status: m.status,
    }
}

fn to_review(m: review::Model) -> Review {
    Review {
        id: m.id,
        car_id: m.car_id,
        user_email: m.user_email,
        rating: m.rating,
        text: m.text,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

fn to_wishlist(m: wishlist::Model) -> Wishlist {
    Wishlist { id: m.id, car_id: m.car_id, user_email: m.user_email }
}

#[async_trait::async_trait]
impl CarRepository for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<Car>, ServiceError> {
        let rows = car::Entity::find()
            .order_by_asc(car::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(to_car).collect())
    }

    async fn get(&self, id: CarId) -> Result<Option<Car>, ServiceError> {
        let row = car::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(row.map(to_car))
    }

    async fn create(&self, input: NewCar) -> Result<Car, ServiceError> {
        let am = car::ActiveModel {
            brand: Set(input.brand),
            model_name: Set(input.model),
            daily_rate: Set(input.daily_rate),
            image_url: Set(input.image_url),
            is_available: Set(input.is_available),
            description: Set(input.description),
            ..Default::default()
        };
        let m = am.insert(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_car(m))
    }

    async fn update(&self, id: CarId, patch: CarPatch) -> Result<Car, ServiceError> {
        let existing = car::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found("car", id))?;
        let mut am = existing.into_active_model();
        if let Some(v) = patch.brand { am.brand = Set(v); }
        if let Some(v) = patch.model { am.model_name = Set(v); }
        if let Some(v) = patch.daily_rate { am.daily_rate = Set(v); }
        if let Some(v) = patch.image_url { am.image_url = Set(v); }
        if let Some(v) = patch.is_available { am.is_available = Set(v); }
        if let Some(v) = patch.description { am.description = Set(v); }
        let m = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_car(m))
    }

    async fn delete(&self, id: CarId) -> Result<bool, ServiceError> {
        let res = car::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait::async_trait]
impl BookingRepository for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<Booking>, ServiceError> {
        let rows = booking::Entity::find()
            .order_by_asc(booking::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(to_booking).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Booking>, ServiceError> {
        let row = booking::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(row.map(to_booking))
    }

    async fn create(&self, input: NewBooking) -> Result<Booking, ServiceError> {
        let am = booking::ActiveModel {
            car_id: Set(input.car_id),
            user_email: Set(input.user_email),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            total_price: Set(input.total_price),
            status: Set(input.status),
            ..Default::default()
        };
        let m = am.insert(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_booking(m))
    }

    async fn update(&self, id: i64, patch: BookingPatch) -> Result<Booking, ServiceError> {
        let existing = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found("booking", id))?;
        let mut am = existing.into_active_model();
        if let Some(v) = patch.car_id { am.car_id = Set(v); }
        if let Some(v) = patch.user_email { am.user_email = Set(v); }
        if let Some(v) = patch.start_date { am.start_date = Set(v); }
        if let Some(v) = patch.end_date { am.end_date = Set(v); }
        if let Some(v) = patch.total_price { am.total_price = Set(v); }
        if let Some(v) = patch.status { am.status = Set(v); }
        let m = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_booking(m))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = booking::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait::async_trait]
impl ReviewRepository for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<Review>, ServiceError> {
        let rows = review::Entity::find()
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(to_review).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Review>, ServiceError> {
        let row = review::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(row.map(to_review))
    }

    async fn create(&self, input: NewReview) -> Result<Review, ServiceError> {
        let am = review::ActiveModel {
            car_id: Set(input.car_id),
            user_email: Set(input.user_email),
            rating: Set(input.rating),
            text: Set(input.text),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };
        let m = am.insert(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_review(m))
    }

    async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, ServiceError> {
        let existing = review::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found("review", id))?;
        let mut am = existing.into_active_model();
        if let Some(v) = patch.car_id { am.car_id = Set(v); }
        if let Some(v) = patch.user_email { am.user_email = Set(v); }
        if let Some(v) = patch.rating { am.rating = Set(v); }
        if let Some(v) = patch.text { am.text = Set(v); }
        let m = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_review(m))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = review::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }

    async fn ratings_by_car(&self, car_ids: &[CarId]) -> Result<HashMap<CarId, Vec<i32>>, ServiceError> {
        let mut out: HashMap<CarId, Vec<i32>> = HashMap::new();
        if car_ids.is_empty() {
            return Ok(out);
        }
        let rows: Vec<(i64, i32)> = review::Entity::find()
            .select_only()
            .column(review::Column::CarId)
            .column(review::Column::Rating)
            .filter(review::Column::CarId.is_in(car_ids.iter().copied()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        for (car_id, rating) in rows {
            out.entry(car_id).or_default().push(rating);
        }
        Ok(out)
    }
}

#[async_trait::async_trait]
impl WishlistRepository for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<Wishlist>, ServiceError> {
        let rows = wishlist::Entity::find()
            .order_by_asc(wishlist::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(to_wishlist).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Wishlist>, ServiceError> {
        let row = wishlist::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(row.map(to_wishlist))
    }

    async fn create(&self, input: NewWishlist) -> Result<Wishlist, ServiceError> {
        let am = wishlist::ActiveModel {
            car_id: Set(input.car_id),
            user_email: Set(input.user_email),
            ..Default::default()
        };
        let m = am.insert(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_wishlist(m))
    }

    async fn update(&self, id: i64, patch: WishlistPatch) -> Result<Wishlist, ServiceError> {
        let existing = wishlist::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found("wishlist", id))?;
        let mut am = existing.into_active_model();
        if let Some(v) = patch.car_id { am.car_id = Set(v); }
        if let Some(v) = patch.user_email { am.user_email = Set(v); }
        let m = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(to_wishlist(m))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = wishlist::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use rust_decimal::Decimal;

    fn new_car(brand: &str) -> NewCar {
        NewCar {
            brand: brand.into(),
            model: "Test".into(),
            daily_rate: Decimal::new(12050, 2),
            image_url: "https://cdn.example.com/car.png".into(),
            is_available: true,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn ratings_and_cascade_round_trip() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmRepository { db };

        let car = CarRepository::create(&repo, new_car("SeaOrmRepoTest")).await.unwrap();
        assert_eq!(car.daily_rate.to_string(), "120.50");
        for rating in [4, 5] {
            ReviewRepository::create(
                &repo,
                NewReview { car_id: car.id, user_email: "tester".into(), rating, text: "ok".into() },
            )
            .await
            .unwrap();
        }
        let mut ratings = repo.ratings_by_car(&[car.id]).await.unwrap().remove(&car.id).unwrap();
        ratings.sort();
        assert_eq!(ratings, vec![4, 5]);

        assert!(CarRepository::delete(&repo, car.id).await.unwrap());
        assert!(repo.ratings_by_car(&[car.id]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmRepository { db };
        let err = CarRepository::update(&repo, i64::MAX, CarPatch::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn booking_with_unknown_car_violates_fk() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmRepository { db };
        let err = BookingRepository::create(
            &repo,
            NewBooking {
                car_id: i64::MAX,
                user_email: "renter@example.com".into(),
                start_date: chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
                total_price: Decimal::new(90000, 2),
                status: Default::default(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Integrity(_)));
    }
}
