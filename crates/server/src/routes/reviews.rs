use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use models::review::DEFAULT_RATING;
use service::domain::{NewReview, Review, ReviewPatch};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::ServerState;

fn default_rating() -> i32 { DEFAULT_RATING }

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewInput {
    pub car: i64,
    /// Free-form user handle; not checked as an email address.
    pub user_email: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    pub text: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReviewPatchInput {
    pub car: Option<i64>,
    pub user_email: Option<String>,
    pub rating: Option<i32>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i64,
    pub car: i64,
    pub user_email: String,
    pub rating: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewInput> for NewReview {
    fn from(i: ReviewInput) -> Self {
        Self { car_id: i.car, user_email: i.user_email, rating: i.rating, text: i.text }
    }
}

impl From<ReviewPatchInput> for ReviewPatch {
    fn from(i: ReviewPatchInput) -> Self {
        Self { car_id: i.car, user_email: i.user_email, rating: i.rating, text: i.text }
    }
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self { id: r.id, car: r.car_id, user_email: r.user_email, rating: r.rating, text: r.text, created_at: r.created_at }
    }
}

#[utoipa::path(
    get, path = "/api/reviews/", tag = "reviews",
    responses((status = 200, description = "All reviews, newest first", body = [ReviewResponse]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ReviewResponse>>, JsonApiError> {
    let rows = state.reviews.list().await?;
    Ok(Json(rows.into_iter().map(ReviewResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/api/reviews/", tag = "reviews",
    request_body = ReviewInput,
    responses(
        (status = 201, description = "Created", body = ReviewResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Car not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<ReviewInput>,
) -> Result<(StatusCode, Json<ReviewResponse>), JsonApiError> {
    let review = state.reviews.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

#[utoipa::path(
    get, path = "/api/reviews/{id}/", tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review", body = ReviewResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ReviewResponse>, JsonApiError> {
    Ok(Json(state.reviews.get(id).await?.into()))
}

#[utoipa::path(
    put, path = "/api/reviews/{id}/", tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    request_body = ReviewInput,
    responses(
        (status = 200, description = "Replaced", body = ReviewResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<ReviewInput>,
) -> Result<Json<ReviewResponse>, JsonApiError> {
    Ok(Json(state.reviews.replace(id, input.into()).await?.into()))
}

#[utoipa::path(
    patch, path = "/api/reviews/{id}/", tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    request_body = ReviewPatchInput,
    responses(
        (status = 200, description = "Updated", body = ReviewResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn partial_update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<ReviewPatchInput>,
) -> Result<Json<ReviewResponse>, JsonApiError> {
    Ok(Json(state.reviews.update(id, input.into()).await?.into()))
}

#[utoipa::path(
    delete, path = "/api/reviews/{id}/", tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(State(state): State<ServerState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
