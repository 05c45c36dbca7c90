//! Router configuration for the API.

use axum::{Router, middleware};

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration (last added
/// runs first), so the request ID is assigned before logging happens.
///
/// # Routes
/// - `GET /program/{program_name}/latest` - latest episode lookup
/// - `GET /health`, `GET /health/live` - health checks
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::episodes::episode_routes())
        .merge(handlers::health::health_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
