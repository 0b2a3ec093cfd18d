//! Plain domain records and their write inputs.
//!
//! `New*` carries a full record for create and full replace; `*Patch` carries
//! the subset of fields a partial update touches. Validation normalizes money
//! fields to two decimal places in place.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use models::errors::ModelError;
use models::{booking, car, review, wishlist};

pub use models::booking::BookingStatus;

pub type CarId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub daily_rate: Decimal,
    pub image_url: String,
    pub is_available: bool,
    pub description: String,
}

/// A car as exposed on reads: the stored record plus its derived rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarView {
    pub car: Car,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub daily_rate: Decimal,
    pub image_url: String,
    pub is_available: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CarPatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub description: Option<String>,
}

impl NewCar {
    pub fn validate(&mut self) -> Result<(), ModelError> {
        car::validate_brand(&self.brand)?;
        car::validate_model_name(&self.model)?;
        self.daily_rate = car::validate_daily_rate(self.daily_rate)?;
        car::validate_image_url(&self.image_url)
    }
}

impl CarPatch {
    pub fn validate(&mut self) -> Result<(), ModelError> {
        if let Some(b) = &self.brand { car::validate_brand(b)?; }
        if let Some(m) = &self.model { car::validate_model_name(m)?; }
        if let Some(r) = self.daily_rate { self.daily_rate = Some(car::validate_daily_rate(r)?); }
        if let Some(u) = &self.image_url { car::validate_image_url(u)?; }
        Ok(())
    }

    pub fn apply(self, car: &mut Car) {
        if let Some(v) = self.brand { car.brand = v; }
        if let Some(v) = self.model { car.model = v; }
        if let Some(v) = self.daily_rate { car.daily_rate = v; }
        if let Some(v) = self.image_url { car.image_url = v; }
        if let Some(v) = self.is_available { car.is_available = v; }
        if let Some(v) = self.description { car.description = v; }
    }
}

impl From<NewCar> for CarPatch {
    fn from(c: NewCar) -> Self {
        Self {
            brand: Some(c.brand),
            model: Some(c.model),
            daily_rate: Some(c.daily_rate),
            image_url: Some(c.image_url),
            is_available: Some(c.is_available),
            description: Some(c.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub car_id: CarId,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBooking {
    pub car_id: CarId,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookingPatch {
    pub car_id: Option<CarId>,
    pub user_email: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_price: Option<Decimal>,
    pub status: Option<BookingStatus>,
}

impl NewBooking {
    pub fn validate(&mut self) -> Result<(), ModelError> {
        booking::validate_user_email(&self.user_email)?;
        self.total_price = booking::validate_total_price(self.total_price)?;
        Ok(())
    }
}

impl BookingPatch {
    pub fn validate(&mut self) -> Result<(), ModelError> {
        if let Some(e) = &self.user_email { booking::validate_user_email(e)?; }
        if let Some(p) = self.total_price { self.total_price = Some(booking::validate_total_price(p)?); }
        Ok(())
    }

    pub fn apply(self, b: &mut Booking) {
        if let Some(v) = self.car_id { b.car_id = v; }
        if let Some(v) = self.user_email { b.user_email = v; }
        if let Some(v) = self.start_date { b.start_date = v; }
        if let Some(v) = self.end_date { b.end_date = v; }
        if let Some(v) = self.total_price { b.total_price = v; }
        if let Some(v) = self.status { b.status = v; }
    }
}

impl From<NewBooking> for BookingPatch {
    fn from(b: NewBooking) -> Self {
        Self {
            car_id: Some(b.car_id),
            user_email: Some(b.user_email),
            start_date: Some(b.start_date),
            end_date: Some(b.end_date),
            total_price: Some(b.total_price),
            status: Some(b.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub car_id: CarId,
    pub user_email: String,
    pub rating: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewReview {
    pub car_id: CarId,
    pub user_email: String,
    pub rating: i32,
    pub text: String,
}

/// `created_at` is fixed at creation and has no patch field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewPatch {
    pub car_id: Option<CarId>,
    pub user_email: Option<String>,
    pub rating: Option<i32>,
    pub text: Option<String>,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ModelError> {
        review::validate_user_email(&self.user_email)?;
        review::validate_text(&self.text)
    }
}

impl ReviewPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(u) = &self.user_email { review::validate_user_email(u)?; }
        if let Some(t) = &self.text { review::validate_text(t)?; }
        Ok(())
    }

    pub fn apply(self, r: &mut Review) {
        if let Some(v) = self.car_id { r.car_id = v; }
        if let Some(v) = self.user_email { r.user_email = v; }
        if let Some(v) = self.rating { r.rating = v; }
        if let Some(v) = self.text { r.text = v; }
    }
}

impl From<NewReview> for ReviewPatch {
    fn from(r: NewReview) -> Self {
        Self { car_id: Some(r.car_id), user_email: Some(r.user_email), rating: Some(r.rating), text: Some(r.text) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: i64,
    pub car_id: CarId,
    pub user_email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewWishlist {
    pub car_id: CarId,
    pub user_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WishlistPatch {
    pub car_id: Option<CarId>,
    pub user_email: Option<String>,
}

impl NewWishlist {
    pub fn validate(&self) -> Result<(), ModelError> {
        wishlist::validate_user_email(&self.user_email)
    }
}

impl WishlistPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(e) = &self.user_email { wishlist::validate_user_email(e)?; }
        Ok(())
    }

    pub fn apply(self, w: &mut Wishlist) {
        if let Some(v) = self.car_id { w.car_id = v; }
        if let Some(v) = self.user_email { w.user_email = v; }
    }
}

impl From<NewWishlist> for WishlistPatch {
    fn from(w: NewWishlist) -> Self {
        Self { car_id: Some(w.car_id), user_email: Some(w.user_email) }
    }
}
