use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::{
    error::ApiError,
    handlers::{admin, booking, health},
    server::TokenLineServer,
};

/// Create health check routes
pub fn health_routes() -> Router<TokenLineServer> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// IVR webhook
pub fn booking_routes() -> Router<TokenLineServer> {
    Router::new().route("/call", post(booking::simulate_call))
}

/// Admin and capacity routes
pub fn admin_routes() -> Router<TokenLineServer> {
    Router::new()
        .route("/admin", get(admin::list_today))
        .route("/reset", post(admin::reset_all))
        .route("/slots", get(admin::slot_status))
        .route("/stats", get(admin::stats))
}

/// Create all application routes
pub fn create_routes() -> Router<TokenLineServer> {
    Router::new()
        .merge(health_routes())
        .merge(booking_routes())
        .merge(admin_routes())
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path().to_string())
}
