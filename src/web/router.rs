//! Router configuration for the Web API.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_post, create_reply, delete_post, delete_reply, get_post, list_posts, login, signup,
    update_post, update_reply, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let member_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login));

    let post_routes = Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
        .route("/:id/replies", post(create_reply));

    let reply_routes = Router::new().route("/:id", put(update_reply).delete(delete_reply));

    let api_routes = Router::new()
        .nest("/members", member_routes)
        .nest("/posts", post_routes)
        .nest("/replies", reply_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
