//! Caller-number redaction for log output
//!
//! Phone numbers identify callers and must never be written to logs in
//! clear. Handlers pass every caller number through a [`PhoneRedactor`]
//! before it becomes a tracing field.
//!
//! # Modes
//!
//! - **Masked**: all but the last two digits hidden, `+1 555 010 0123` → `+* *** *** **23`
//! - **Hashed**: a short SHA-256 digest so one caller's requests can be
//!   correlated across log lines, `PHONE[q1Xh3k9aZ0w=]`
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{PhoneRedactor, RedactionConfig};
//!
//! let redactor = PhoneRedactor::new(RedactionConfig {
//!     hash_for_correlation: false,
//!     ..Default::default()
//! });
//! assert_eq!(redactor.redact_phone("5550100"), "*****00");
//! ```

pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;
