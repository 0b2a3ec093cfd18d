pub mod bookings;
pub mod cars;
pub mod reviews;
pub mod wishlists;

use axum::{
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Collection URLs, one per resource.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiRoot {
    pub cars: String,
    pub bookings: String,
    pub reviews: String,
    pub wishlists: String,
}

#[utoipa::path(
    get, path = "/api/", tag = "health",
    responses((status = 200, description = "Collection index", body = ApiRoot))
)]
pub async fn api_root() -> Json<ApiRoot> {
    Json(ApiRoot {
        cars: "/api/cars/".into(),
        bookings: "/api/bookings/".into(),
        reviews: "/api/reviews/".into(),
        wishlists: "/api/wishlists/".into(),
    })
}

async fn fallback() -> JsonApiError {
    JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some("no route for this path".into()))
}

/// Register `path` both with and without a trailing slash.
fn route_both(router: Router<ServerState>, path: &str, handlers: MethodRouter<ServerState>) -> Router<ServerState> {
    router.route(path, handlers.clone()).route(&format!("{}/", path), handlers)
}

fn resource(
    router: Router<ServerState>,
    base: &str,
    collection: MethodRouter<ServerState>,
    item: MethodRouter<ServerState>,
) -> Router<ServerState> {
    let router = route_both(router, base, collection);
    route_both(router, &format!("{}/:id", base), item)
}

/// Build the full application router: health, the four resource
/// collections under `/api`, and the OpenAPI document with Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let mut api = Router::new().route("/health", get(health));
    api = route_both(api, "/api", get(api_root));
    api = resource(
        api,
        "/api/cars",
        get(cars::list).post(cars::create),
        get(cars::retrieve).put(cars::replace).patch(cars::partial_update).delete(cars::destroy),
    );
    api = resource(
        api,
        "/api/bookings",
        get(bookings::list).post(bookings::create),
        get(bookings::retrieve).put(bookings::replace).patch(bookings::partial_update).delete(bookings::destroy),
    );
    api = resource(
        api,
        "/api/reviews",
        get(reviews::list).post(reviews::create),
        get(reviews::retrieve).put(reviews::replace).patch(reviews::partial_update).delete(reviews::destroy),
    );
    api = resource(
        api,
        "/api/wishlists",
        get(wishlists::list).post(wishlists::create),
        get(wishlists::retrieve).put(wishlists::replace).patch(wishlists::partial_update).delete(wishlists::destroy),
    );

    api.fallback(fallback)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request carrying method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and connection failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
