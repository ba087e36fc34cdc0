use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;

use crate::server::TokenLineServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: u64,
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

/// Health check handler
pub async fn health_check(State(server): State<TokenLineServer>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    let ledger = server.ledger.count_today();
    let healthy = ledger.is_ok();
    let ledger_check = match ledger {
        Ok(_) => "healthy".to_string(),
        Err(err) => format!("unhealthy: {}", err),
    };
    checks.insert("ledger".to_string(), ledger_check);

    Json(HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_seconds(),
        checks,
    })
}

/// Version information handler
pub async fn version_info(State(server): State<TokenLineServer>) -> Json<VersionResponse> {
    let features = vec![
        "ivr-webhook".to_string(),
        "daily-rollover".to_string(),
        "caller-redaction".to_string(),
    ];

    Json(VersionResponse {
        name: server.settings().server.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features,
    })
}
