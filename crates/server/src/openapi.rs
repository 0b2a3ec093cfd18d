use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{bookings, cars, reviews, wishlists, ApiRoot};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Body of every non-2xx response.
#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
    /// Offending input field, for validation errors.
    pub field: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::api_root,
        cars::list,
        cars::create,
        cars::retrieve,
        cars::replace,
        cars::partial_update,
        cars::destroy,
        bookings::list,
        bookings::create,
        bookings::retrieve,
        bookings::replace,
        bookings::partial_update,
        bookings::destroy,
        reviews::list,
        reviews::create,
        reviews::retrieve,
        reviews::replace,
        reviews::partial_update,
        reviews::destroy,
        wishlists::list,
        wishlists::create,
        wishlists::retrieve,
        wishlists::replace,
        wishlists::partial_update,
        wishlists::destroy,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ApiRoot,
            cars::CarInput,
            cars::CarPatchInput,
            cars::CarResponse,
            bookings::BookingInput,
            bookings::BookingPatchInput,
            bookings::BookingResponse,
            reviews::ReviewInput,
            reviews::ReviewPatchInput,
            reviews::ReviewResponse,
            wishlists::WishlistInput,
            wishlists::WishlistPatchInput,
            wishlists::WishlistResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars"),
        (name = "bookings"),
        (name = "reviews"),
        (name = "wishlists")
    )
)]
pub struct ApiDoc;
