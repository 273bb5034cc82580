//! Dashboard API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layers (outermost → innermost): CORS → access log → handler.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the dashboard API router.
pub fn dashboard_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/kpis", get(endpoints::kpis::summary))
        .route(
            "/status-distribution",
            get(endpoints::distributions::status),
        )
        .route(
            "/recent-status-distribution",
            get(endpoints::distributions::recent_status),
        )
        .route(
            "/distribution/:field",
            get(endpoints::distributions::by_field),
        )
        .route(
            "/store-distribution",
            get(endpoints::distributions::stores),
        )
        .route(
            "/transition-timeline",
            get(endpoints::timeline::transitions),
        )
        .route("/records", get(endpoints::records::list))
        .route("/dashboard", get(endpoints::dashboard::snapshot))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        // Chart front end is served from a different origin
        .layer(CorsLayer::permissive())
}
