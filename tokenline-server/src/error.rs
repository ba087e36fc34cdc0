use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use booking_ledger::LedgerError;
use error_common::codes;
use logger_redacted::PhoneRedactor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Error type
    pub error_type: String,
    /// Stable error code
    pub error_code: String,
    /// Human-readable error message
    pub message: String,
    /// Field-specific validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
    /// Timestamp when error occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Suggested actions for resolving the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Main API error enum
///
/// Booking rejections (duplicate caller, day full) are not errors at this
/// layer; handlers turn them into SMS replies before they get here.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field_errors: HashMap<String, Vec<String>>,
    },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Resource not found: {resource_type}")]
    NotFound { resource_type: String },

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl ApiError {
    /// Validation error naming the offending field
    pub fn missing_field(field: &str) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), vec![format!("{} is required", field)]);
        Self::Validation {
            message: format!("Missing required field: {}", field),
            field_errors,
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Ledger(_) => "ledger_error",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => codes::validation::MISSING_REQUIRED_FIELD,
            ApiError::BadRequest { .. } => codes::validation::MALFORMED_BODY,
            ApiError::NotFound { .. } => codes::routing::NOT_FOUND,
            ApiError::Ledger(_) => codes::ledger::STORAGE_FAILURE,
        }
    }

    /// Get suggested actions for resolving the error
    pub fn suggestions(&self) -> Option<Vec<String>> {
        match self {
            ApiError::Validation { .. } => Some(vec![
                "Include the caller's phone number in the \"phone\" field".to_string(),
                "Ensure the value is a non-empty string".to_string(),
            ]),
            ApiError::BadRequest { .. } => Some(vec![
                "Send a JSON body with Content-Type: application/json".to_string(),
            ]),
            ApiError::Ledger(_) => Some(vec![
                "Try the call again".to_string(),
                "Contact support if the issue persists".to_string(),
            ]),
            ApiError::NotFound { .. } => None,
        }
    }

    /// Message safe to return to the client
    fn public_message(&self) -> String {
        match self {
            ApiError::Ledger(_) => "The booking ledger is unavailable.".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %PhoneRedactor::default().redact_text(&self.to_string()),
            "API error occurred"
        );

        let field_errors = match &self {
            ApiError::Validation { field_errors, .. } => Some(field_errors.clone()),
            _ => None,
        };

        let error_response = ApiErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            error_code: self.error_code().to_string(),
            message: self.public_message(),
            field_errors,
            timestamp: chrono::Utc::now(),
            suggestions: self.suggestions(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid JSON: {}", rejection.body_text()))
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::missing_field("phone").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::bad_request("Invalid JSON: eof").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("/nowhere").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(LedgerError::Storage("io".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(LedgerError::SlotOutOfRange { token: 2 }).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_carries_field_errors() {
        let err = ApiError::missing_field("phone");
        assert_eq!(err.error_code(), codes::validation::MISSING_REQUIRED_FIELD);
        match err {
            ApiError::Validation { field_errors: fields, .. } => {
                assert_eq!(fields["phone"], vec!["phone is required".to_string()]);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_storage_details_are_not_exposed() {
        let err = ApiError::from(LedgerError::Storage("disk full at /var/lib".into()));
        assert_eq!(err.public_message(), "The booking ledger is unavailable.");
        assert_eq!(err.error_type(), "ledger_error");
        assert_eq!(err.error_code(), codes::ledger::STORAGE_FAILURE);
    }
}
