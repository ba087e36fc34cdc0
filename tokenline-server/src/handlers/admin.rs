use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiResult;
use crate::server::TokenLineServer;

pub const RESET_STATUS: &str = "All appointments reset successfully";

/// `[phone, token, time_slot]`
pub type BookingRow = (String, u32, String);

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub remaining_slots: i64,
    pub max_slots: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// `YYYY-MM-DD`
    pub date: String,
    pub total_booked: usize,
    pub max_limit: u32,
}

/// Today's bookings in token order
pub async fn list_today(State(server): State<TokenLineServer>) -> ApiResult<Json<Vec<BookingRow>>> {
    server.ledger.rollover_if_new_day()?;
    Ok(Json(server.ledger.list_today()?))
}

/// Drop every booking
pub async fn reset_all(State(server): State<TokenLineServer>) -> ApiResult<Json<ResetResponse>> {
    let removed = server.ledger.reset_all()?;
    info!(removed, "Admin reset");
    Ok(Json(ResetResponse {
        status: RESET_STATUS.to_string(),
    }))
}

pub async fn slot_status(State(server): State<TokenLineServer>) -> ApiResult<Json<SlotsResponse>> {
    server.ledger.rollover_if_new_day()?;
    let stats = server.ledger.stats()?;
    Ok(Json(SlotsResponse {
        remaining_slots: stats.remaining,
        max_slots: stats.max_limit,
    }))
}

pub async fn stats(State(server): State<TokenLineServer>) -> ApiResult<Json<StatsResponse>> {
    server.ledger.rollover_if_new_day()?;
    let stats = server.ledger.stats()?;
    Ok(Json(StatsResponse {
        date: stats.date.format("%Y-%m-%d").to_string(),
        total_booked: stats.total_booked,
        max_limit: stats.max_limit,
    }))
}
