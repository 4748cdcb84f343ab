//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{commands, conflicts, dashboard, reassignment};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Tables
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(dashboard::GET_PILOTS, get(handlers::list_pilots))
        .route(dashboard::GET_DRONES, get(handlers::list_drones))
        .route(dashboard::GET_MISSIONS, get(handlers::list_missions))
        // Commands and rules
        .route(commands::POST_COMMAND, post(handlers::submit_command))
        .route(
            conflicts::POST_CHECK_CONFLICTS,
            post(handlers::check_conflicts),
        )
        .route(
            reassignment::POST_URGENT_REASSIGNMENT,
            post(handlers::urgent_reassignment),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
