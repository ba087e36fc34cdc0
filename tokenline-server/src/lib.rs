//! TokenLine Server - daily appointment token line over HTTP
//!
//! Thin gateway around [`booking_ledger::Ledger`]: the `/call` IVR webhook
//! books tokens, the admin routes list, reset and report capacity.

pub mod settings;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use settings::Settings;
pub use error::*;
pub use server::TokenLineServer;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: TokenLineServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
