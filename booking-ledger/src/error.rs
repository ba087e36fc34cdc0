use thiserror::Error;

/// Errors raised by the booking ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The caller already holds a token for today
    #[error("Caller has already booked today")]
    DuplicateBooking,

    /// Every token for today has been issued
    #[error("Daily capacity of {capacity} tokens reached")]
    CapacityExceeded { capacity: u32 },

    /// The policy cannot express a slot for this token
    #[error("No slot can be computed for token {token}")]
    SlotOutOfRange { token: u32 },

    /// The backing store failed to read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_limit() {
        let err = LedgerError::CapacityExceeded { capacity: 50 };
        assert_eq!(err.to_string(), "Daily capacity of 50 tokens reached");
    }
}
