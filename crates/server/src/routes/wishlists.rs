use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use service::domain::{NewWishlist, Wishlist, WishlistPatch};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct WishlistInput {
    pub car: i64,
    pub user_email: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WishlistPatchInput {
    pub car: Option<i64>,
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistResponse {
    pub id: i64,
    pub car: i64,
    pub user_email: String,
}

impl From<WishlistInput> for NewWishlist {
    fn from(i: WishlistInput) -> Self { Self { car_id: i.car, user_email: i.user_email } }
}

impl From<WishlistPatchInput> for WishlistPatch {
    fn from(i: WishlistPatchInput) -> Self { Self { car_id: i.car, user_email: i.user_email } }
}

impl From<Wishlist> for WishlistResponse {
    fn from(w: Wishlist) -> Self { Self { id: w.id, car: w.car_id, user_email: w.user_email } }
}

#[utoipa::path(
    get, path = "/api/wishlists/", tag = "wishlists",
    responses((status = 200, description = "All wishlist entries", body = [WishlistResponse]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<WishlistResponse>>, JsonApiError> {
    let rows = state.wishlists.list().await?;
    Ok(Json(rows.into_iter().map(WishlistResponse::from).collect()))
}

#[utoipa::path(
    post, path = "/api/wishlists/", tag = "wishlists",
    request_body = WishlistInput,
    responses(
        (status = 201, description = "Created", body = WishlistResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Car not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<WishlistInput>,
) -> Result<(StatusCode, Json<WishlistResponse>), JsonApiError> {
    let entry = state.wishlists.create(input.into()).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[utoipa::path(
    get, path = "/api/wishlists/{id}/", tag = "wishlists",
    params(("id" = i64, Path, description = "Wishlist entry id")),
    responses(
        (status = 200, description = "Wishlist entry", body = WishlistResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<WishlistResponse>, JsonApiError> {
    Ok(Json(state.wishlists.get(id).await?.into()))
}

#[utoipa::path(
    put, path = "/api/wishlists/{id}/", tag = "wishlists",
    params(("id" = i64, Path, description = "Wishlist entry id")),
    request_body = WishlistInput,
    responses(
        (status = 200, description = "Replaced", body = WishlistResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<WishlistInput>,
) -> Result<Json<WishlistResponse>, JsonApiError> {
    Ok(Json(state.wishlists.replace(id, input.into()).await?.into()))
}

#[utoipa::path(
    patch, path = "/api/wishlists/{id}/", tag = "wishlists",
    params(("id" = i64, Path, description = "Wishlist entry id")),
    request_body = WishlistPatchInput,
    responses(
        (status = 200, description = "Updated", body = WishlistResponse),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn partial_update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<WishlistPatchInput>,
) -> Result<Json<WishlistResponse>, JsonApiError> {
    Ok(Json(state.wishlists.update(id, input.into()).await?.into()))
}

#[utoipa::path(
    delete, path = "/api/wishlists/{id}/", tag = "wishlists",
    params(("id" = i64, Path, description = "Wishlist entry id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn destroy(State(state): State<ServerState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.wishlists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
