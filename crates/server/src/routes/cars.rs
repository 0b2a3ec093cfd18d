use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::domain::{CarPatch, CarView, NewCar};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::ServerState;

fn default_available() -> bool { true }

/// Body for create and full replace.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CarInput {
    pub brand: String,
    pub model: String,
    #[schema(value_type = String, example = "450.00")]
    pub daily_rate: Decimal,
    pub image_url: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CarPatchInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    #[schema(value_type = Option<String>)]
    pub daily_rate: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CarResponse {
    pub id: i64,
    pub brand: String,
    pub model: String,
    #[schema(value_type = String, example = "450.00")]
    pub daily_rate: Decimal,
    pub image_url: String,
    pub is_available: bool,
    pub description: String,
    /// Mean review rating to one decimal; 5.0 without reviews.
    pub average_rating: f64,
}

impl From<CarInput> for NewCar {
    fn from(i: CarInput) -> Self {
        Self {
            brand: i.brand,
            model: i.model,
            daily_rate: i.daily_rate,
            image_url: i.image_url,
            is_available: i.is_available,
            description: i.description,
        }
    }
}

impl From<CarPatchInput> for CarPatch {
    fn from(i: CarPatchInput) -> Self {
        Self {
            brand: i.brand,
            model: i.model,
            daily_rate: i.daily_rate,
            image_url: i.image_url,
            is_available: i.is_available,
            description: i.description,
        }
    }
}

impl From<CarView> for CarResponse {
    fn from(v: CarView) -> Self {
        let c = v.car;
        Self {
            id: c.id,
            brand: c.brand,
            model: c.model,
            daily_rate: c.daily_rate,
            image_url: c.image_url,
            is_available: c.is_available,
            description: c.description,
            average_rating: v.average_rating,
        }
    }
}

#[utoipa::path(
    get, path = "/api/cars/", tag = "cars",
    responses((status = 200, description = "All cars", body = [CarResponse]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CarResponse>>, JsonApiError> {
    let cars = state.cars.list().await?;
    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/api/cars/", tag = "cars",
    request_body = CarInput,
    responses(
        (status = 201, description = "Created", body = CarResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<CarInput>,
) -> Result<(StatusCode, Json<CarResponse>), JsonApiError> {
    let view = state.cars.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

#[utoipa::path(
    get, path = "/api/cars/{id}/", tag = "cars",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "Car", body = CarResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CarResponse>, JsonApiError> {
    Ok(Json(state.cars.get(id).await?.into()))
}

#[utoipa::path(
    put, path = "/api/cars/{id}/", tag = "cars",
    params(("id" = i64, Path, description = "Car id")),
    request_body = CarInput,
    responses(
        (status = 200, description = "Replaced", body = CarResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<CarInput>,
) -> Result<Json<CarResponse>, JsonApiError> {
    Ok(Json(state.cars.replace(id, input.into()).await?.into()))
}

#[utoipa::path(
    patch, path = "/api/cars/{id}/", tag = "cars",
    params(("id" = i64, Path, description = "Car id")),
    request_body = CarPatchInput,
    responses(
        (status = 200, description = "Updated", body = CarResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn partial_update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<CarPatchInput>,
) -> Result<Json<CarResponse>, JsonApiError> {
    Ok(Json(state.cars.update(id, input.into()).await?.into()))
}

/// Also removes the car's bookings, reviews and wishlist entries.
#[utoipa::path(
    delete, path = "/api/cars/{id}/", tag = "cars",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(State(state): State<ServerState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.cars.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
