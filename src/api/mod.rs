//! HTTP surface: router, handlers, shared state, and error translation.

pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/tag-members", post(handlers::tag_members))
        .route(
            "/tag-unreacted-members",
            post(handlers::tag_unreacted_members),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
