use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::domain::{Booking, BookingPatch, BookingStatus, NewBooking};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingInput {
    /// Id of the booked car.
    pub car: i64,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(value_type = String, example = "900.00")]
    pub total_price: Decimal,
    #[serde(default)]
    #[schema(value_type = String, example = "Pending")]
    pub status: BookingStatus,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookingPatchInput {
    pub car: Option<i64>,
    pub user_email: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub total_price: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i64,
    pub car: i64,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(value_type = String, example = "900.00")]
    pub total_price: Decimal,
    #[schema(value_type = String, example = "Pending")]
    pub status: BookingStatus,
}

impl From<BookingInput> for NewBooking {
    fn from(i: BookingInput) -> Self {
        Self {
            car_id: i.car,
            user_email: i.user_email,
            start_date: i.start_date,
            end_date: i.end_date,
            total_price: i.total_price,
            status: i.status,
        }
    }
}

impl From<BookingPatchInput> for BookingPatch {
    fn from(i: BookingPatchInput) -> Self {
        Self {
            car_id: i.car,
            user_email: i.user_email,
            start_date: i.start_date,
            end_date: i.end_date,
            total_price: i.total_price,
            status: i.status,
        }
    }
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            car: b.car_id,
            user_email: b.user_email,
            start_date: b.start_date,
            end_date: b.end_date,
            total_price: b.total_price,
            status: b.status,
        }
    }
}

#[utoipa::path(
    get, path = "/api/bookings/", tag = "bookings",
    responses((status = 200, description = "All bookings", body = [BookingResponse]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BookingResponse>>, JsonApiError> {
    let rows = state.bookings.list().await?;
    Ok(Json(rows.into_iter().map(BookingResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/api/bookings/", tag = "bookings",
    request_body = BookingInput,
    responses(
        (status = 201, description = "Created", body = BookingResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Car not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<BookingInput>,
) -> Result<(StatusCode, Json<BookingResponse>), JsonApiError> {
    let booking = state.bookings.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

#[utoipa::path(
    get, path = "/api/bookings/{id}/", tag = "bookings",
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking", body = BookingResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BookingResponse>, JsonApiError> {
    Ok(Json(state.bookings.get(id).await?.into()))
}

#[utoipa::path(
    put, path = "/api/bookings/{id}/", tag = "bookings",
    params(("id" = i64, Path, description = "Booking id")),
    request_body = BookingInput,
    responses(
        (status = 200, description = "Replaced", body = BookingResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<BookingInput>,
) -> Result<Json<BookingResponse>, JsonApiError> {
    Ok(Json(state.bookings.replace(id, input.into()).await?.into()))
}

/// Any status may be set regardless of the current one.
#[utoipa::path(
    patch, path = "/api/bookings/{id}/", tag = "bookings",
    params(("id" = i64, Path, description = "Booking id")),
    request_body = BookingPatchInput,
    responses(
        (status = 200, description = "Updated", body = BookingResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn partial_update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<BookingPatchInput>,
) -> Result<Json<BookingResponse>, JsonApiError> {
    Ok(Json(state.bookings.update(id, input.into()).await?.into()))
}

#[utoipa::path(
    delete, path = "/api/bookings/{id}/", tag = "bookings",
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(State(state): State<ServerState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
