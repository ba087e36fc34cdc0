//! IVR webhook: one simulated phone call books one token.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use booking_ledger::{Booking, LedgerError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::server::TokenLineServer;

pub const WRONG_TIME_SMS: &str = "Booking allowed only between 8:00–8:05 AM. Please try tomorrow.";
pub const FULL_SMS: &str = "Today's appointments are full. Please try again tomorrow.";
pub const DUPLICATE_SMS: &str = "You have already booked today. Please come at your scheduled time.";

/// Body posted by the IVR for each call
#[derive(Debug, Deserialize)]
pub struct CallRequest {
    pub phone: Option<String>,
    /// `success` (default), `wrong_time` or `full`
    pub mode: Option<String>,
}

/// Reply the IVR reads back to the caller as an SMS
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmsResponse {
    #[serde(rename = "SMS")]
    pub sms: String,
}

impl SmsResponse {
    pub fn new(sms: impl Into<String>) -> Self {
        Self { sms: sms.into() }
    }

    pub fn confirmed(booking: &Booking) -> Self {
        Self::new(format!(
            "Your token number is {}. Your appointment time is {}. Estimated waiting time: {} minutes.",
            booking.token, booking.time_slot, booking.wait_minutes
        ))
    }
}

/// How the simulated call should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    /// Call arrived outside the booking window
    WrongTime,
    /// Caller is told the day is full without touching the ledger
    Full,
    Book,
}

impl CallMode {
    /// Unknown modes book normally.
    pub fn parse(mode: Option<&str>) -> Self {
        match mode {
            Some("wrong_time") => CallMode::WrongTime,
            Some("full") => CallMode::Full,
            _ => CallMode::Book,
        }
    }
}

/// Handle one incoming call
pub async fn simulate_call(
    State(server): State<TokenLineServer>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> ApiResult<Json<SmsResponse>> {
    let Json(request) = payload?;

    match CallMode::parse(request.mode.as_deref()) {
        CallMode::WrongTime => return Ok(Json(SmsResponse::new(WRONG_TIME_SMS))),
        CallMode::Full => return Ok(Json(SmsResponse::new(FULL_SMS))),
        CallMode::Book => {}
    }

    let phone = request
        .phone
        .as_deref()
        .filter(|phone| !phone.trim().is_empty())
        .ok_or_else(|| ApiError::missing_field("phone"))?;
    let caller = server.redactor.redact_phone(phone);

    server.ledger.rollover_if_new_day()?;

    match server.ledger.book(phone) {
        Ok(booking) => {
            info!(caller = %caller, token = booking.token, "Booking confirmed");
            Ok(Json(SmsResponse::confirmed(&booking)))
        }
        Err(LedgerError::DuplicateBooking) => {
            info!(caller = %caller, "Caller already booked today");
            Ok(Json(SmsResponse::new(DUPLICATE_SMS)))
        }
        Err(LedgerError::CapacityExceeded { capacity }) => {
            warn!(caller = %caller, capacity, "Daily capacity reached");
            Ok(Json(SmsResponse::new(FULL_SMS)))
        }
        Err(err) => Err(err.into()),
    }
}
