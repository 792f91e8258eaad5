use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::wish::WishService;

pub mod christmas;
pub mod wishes;

/// Shared state for all handlers. The wish service (and the store handle
/// inside it) is a cheap clone.
#[derive(Clone)]
pub struct ServerState {
    pub wishes: WishService,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn welcome() -> &'static str {
    "Welcome to the Haxmas API - A Christmas Wishlist Service"
}

/// Build the full application router: welcome/health, wishlist CRUD, and
/// the stateless christmas endpoints.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health));

    let wishes = Router::new()
        .route("/api/wishes", get(wishes::list).post(wishes::create))
        .route("/api/wishes/:id/fulfill", patch(wishes::fulfill))
        .route("/api/wishes/:id", delete(wishes::remove));

    let christmas = Router::new()
        .route("/api/christmas/countdown", get(christmas::countdown))
        .route("/api/christmas/fact", get(christmas::fact))
        .route(
            "/api/christmas/naughty-or-nice/:name",
            get(christmas::naughty_or_nice),
        )
        .route("/api/christmas/reindeer", get(christmas::reindeer))
        .route(
            "/api/christmas/letter-to-santa",
            post(christmas::letter_to_santa),
        )
        .route("/api/christmas/tree", get(christmas::tree_default))
        .route("/api/christmas/tree/:height", get(christmas::tree_sized))
        .route(
            "/api/christmas/gift-suggestion",
            get(christmas::gift_default),
        )
        .route(
            "/api/christmas/gift-suggestion/:budget",
            get(christmas::gift_for_budget),
        )
        .route(
            "/api/christmas/gift-suggestion/:budget/:recipient",
            get(christmas::gift_for_recipient),
        );

    public
        .merge(wishes)
        .merge(christmas)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
