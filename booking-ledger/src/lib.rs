//! Booking ledger for the TokenLine appointment line
//!
//! Owns today's appointment records and everything derived from them:
//! sequential token assignment, slot windows, wait estimates, duplicate
//! detection, daily capacity and the purge that happens when the calendar
//! day changes.
//!
//! # Example
//!
//! ```rust
//! use booking_ledger::{Ledger, LedgerError};
//!
//! let ledger = Ledger::in_memory();
//! let booking = ledger.book("+15550100").unwrap();
//! assert_eq!(booking.token, 1);
//! assert_eq!(booking.time_slot, "09:00 - 09:10");
//!
//! assert_eq!(ledger.book("+15550100"), Err(LedgerError::DuplicateBooking));
//! ```

pub mod clock;
pub mod error;
pub mod ledger;
pub mod slot;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{LedgerError, Result};
pub use ledger::{Booking, Ledger, LedgerStats};
pub use slot::{LedgerPolicy, TimeSlot, DEFAULT_CAPACITY, DEFAULT_SLOT_MINUTES, DEFAULT_START_HOUR};
pub use store::{Appointment, AppointmentStore, MemoryStore, NewAppointment};
