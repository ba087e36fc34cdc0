//! Common error handling utilities for TokenLine
//!
//! Process-level errors raised while starting or running the service, and
//! the stable error codes attached to API error responses.
//!
//! # Example
//!
//! ```rust
//! use error_common::{ServiceError, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|e| ServiceError::ConfigError(format!("invalid port {raw:?}: {e}")))
//! }
//!
//! assert!(parse_port("8080").is_ok());
//! assert!(parse_port("eighty").is_err());
//! ```

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
