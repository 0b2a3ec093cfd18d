use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{booking, errors::ModelError, review, validation, wishlist};

pub const BRAND_MAX_LEN: usize = 50;
pub const MODEL_MAX_LEN: usize = 50;
pub const IMAGE_URL_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub brand: String,
    #[sea_orm(column_name = "model")]
    pub model_name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub daily_rate: Decimal,
    pub image_url: String,
    pub is_available: bool,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Booking, Review, Wishlist }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Booking => Entity::has_many(booking::Entity).into(),
            Relation::Review => Entity::has_many(review::Entity).into(),
            Relation::Wishlist => Entity::has_many(wishlist::Entity).into(),
        }
    }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl Related<review::Entity> for Entity {
    fn to() -> RelationDef { Relation::Review.def() }
}

impl Related<wishlist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Wishlist.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_brand(brand: &str) -> Result<(), ModelError> {
    validation::require_text("brand", brand)?;
    validation::max_len("brand", brand, BRAND_MAX_LEN)
}

pub fn validate_model_name(model: &str) -> Result<(), ModelError> {
    validation::require_text("model", model)?;
    validation::max_len("model", model, MODEL_MAX_LEN)
}

/// Returns the rate rescaled to two decimal places.
pub fn validate_daily_rate(rate: Decimal) -> Result<Decimal, ModelError> {
    validation::money("daily_rate", rate, 10, 2)
}

pub fn validate_image_url(url: &str) -> Result<(), ModelError> {
    validation::require_text("image_url", url)?;
    validation::max_len("image_url", url, IMAGE_URL_MAX_LEN)?;
    validation::http_url("image_url", url)
}
