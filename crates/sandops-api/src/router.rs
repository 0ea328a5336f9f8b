//! Route definitions for the Sandwich Ops HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(report_routes())
        .merge(directory_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Report generation and download endpoints
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports/weekly-impact",
            post(handlers::reports::weekly_impact),
        )
        .route(
            "/reports/weekly-impact/download/{week_ending}",
            get(handlers::reports::download_weekly_pdf),
        )
        .route(
            "/reports/generate",
            post(handlers::reports::generate_report),
        )
        .route(
            "/reports/weekly-monitoring",
            get(handlers::reports::weekly_monitoring),
        )
}

/// Read-only directory listings the reports are computed over
fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/hosts", get(handlers::hosts::list_hosts))
        .route(
            "/collections",
            get(handlers::collections::list_collections),
        )
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
