//! Application setup and server configuration.

use std::time::Duration;

use axum::{extract::Extension, middleware, routing::get, Router};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::directory::service::DirectoryService;
use crate::server::middleware::require_api_key;
use crate::server::routes::{get_organization, health_handler, list_organizations};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub directory: DirectoryService,
    pub api_key: Option<String>,
}

/// Request deadline. In-flight resolver and hydration queries are dropped
/// when it elapses, so no partial aggregate reaches the client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the Axum application router
pub fn build_app(pool: PgPool, api_key: Option<String>) -> Router {
    let state = AppState {
        db_pool: pool.clone(),
        directory: DirectoryService::new(pool),
        api_key,
    };

    let api_routes = Router::new()
        .route("/organizations", get(list_organizations))
        .route("/organizations/:organization_id", get(get_organization))
        .layer(middleware::from_fn(require_api_key));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(Extension(state)),
        )
}
