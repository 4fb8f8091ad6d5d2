mod config;
mod error;
mod handlers;

use axum::{
    routing::{get, post, delete},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::repository::Repository;

pub use config::{ServerConfig, CORS_ORIGINS_ENV};
pub use error::ApiError;

/// Build the router with permissive CORS.
pub fn create_router(repo: Repository) -> Router {
    create_router_with_config(repo, ServerConfig::permissive())
}

pub fn create_router_with_config(repo: Repository, config: ServerConfig) -> Router {
    let api = Router::new()
        // Groups
        .route("/groups", get(handlers::list_groups))
        .route("/groups", post(handlers::create_group))
        .route("/groups/{id}", get(handlers::get_group))
        .route("/groups/{id}", delete(handlers::delete_group))
        // Students
        .route("/students", get(handlers::list_students))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_layer()),
        )
        .with_state(repo)
}
