//! Token to wall-clock slot arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed booking policy for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPolicy {
    /// Maximum tokens issued per day
    pub capacity: u32,
    /// Length of one appointment slot in minutes
    pub slot_minutes: u32,
    /// Hour of day (24h, local) at which token 1 is seen
    pub start_hour: u32,
}

pub const DEFAULT_CAPACITY: u32 = 50;
pub const DEFAULT_SLOT_MINUTES: u32 = 10;
pub const DEFAULT_START_HOUR: u32 = 9;

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            start_hour: DEFAULT_START_HOUR,
        }
    }
}

impl LedgerPolicy {
    /// Same policy with a different daily capacity
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Minutes a caller holding `token` waits after the first slot opens.
    ///
    /// `None` for token 0, for tokens past the daily capacity, and when the
    /// offset does not fit in a `u32`.
    pub fn wait_for(&self, token: u32) -> Option<u32> {
        if token == 0 || token > self.capacity {
            return None;
        }
        (token - 1).checked_mul(self.slot_minutes)
    }

    /// Slot window for `token`, `None` wherever [`wait_for`](Self::wait_for) is.
    pub fn slot_for(&self, token: u32) -> Option<TimeSlot> {
        let offset = self.wait_for(token)?;
        let start_minute = offset % 60;
        Some(TimeSlot {
            start_hour: self.start_hour.checked_add(offset / 60)?,
            start_minute,
            end_minute: start_minute.checked_add(self.slot_minutes)?,
        })
    }
}

/// A slot window as shown to callers.
///
/// The end is kept on the start hour and its minute is not wrapped, so the
/// last slot of an hour renders as `09:50 - 09:60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} - {:02}:{:02}",
            self.start_hour, self.start_minute, self.start_hour, self.end_minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot_opens_at_nine() {
        let policy = LedgerPolicy::default();
        assert_eq!(policy.slot_for(1).unwrap().to_string(), "09:00 - 09:10");
        assert_eq!(policy.wait_for(1), Some(0));
    }

    #[test]
    fn test_end_minute_is_not_wrapped() {
        let policy = LedgerPolicy::default();
        assert_eq!(policy.slot_for(6).unwrap().to_string(), "09:50 - 09:60");
        assert_eq!(policy.wait_for(6), Some(50));
    }

    #[test]
    fn test_next_hour_starts_after_six_tokens() {
        let policy = LedgerPolicy::default();
        assert_eq!(policy.slot_for(7).unwrap().to_string(), "10:00 - 10:10");
    }

    #[test]
    fn test_last_token_of_the_day() {
        let policy = LedgerPolicy::default();
        assert_eq!(policy.slot_for(50).unwrap().to_string(), "17:10 - 17:20");
        assert_eq!(policy.wait_for(50), Some(490));
    }

    #[test]
    fn test_tokens_outside_the_day_have_no_slot() {
        let policy = LedgerPolicy::default();
        assert_eq!(policy.slot_for(0), None);
        assert_eq!(policy.wait_for(0), None);
        assert_eq!(policy.slot_for(51), None);
        assert_eq!(policy.slot_for(500_000_000), None);
        assert_eq!(policy.wait_for(u32::MAX), None);
    }

    #[test]
    fn test_oversized_policy_does_not_overflow() {
        let policy = LedgerPolicy {
            capacity: u32::MAX,
            slot_minutes: 10,
            start_hour: 9,
        };
        assert_eq!(policy.wait_for(u32::MAX), None);
        assert_eq!(policy.slot_for(u32::MAX), None);
        assert_eq!(policy.wait_for(429_496_730), Some(4_294_967_290));

        let policy = LedgerPolicy {
            capacity: 2,
            slot_minutes: u32::MAX,
            start_hour: 9,
        };
        assert_eq!(policy.wait_for(2), Some(u32::MAX));
        // minute 15 plus a u32::MAX-long slot has no end
        assert_eq!(policy.slot_for(2), None);
    }

    #[test]
    fn test_with_capacity_keeps_slot_shape() {
        let policy = LedgerPolicy::default().with_capacity(3);
        assert_eq!(policy.capacity, 3);
        assert_eq!(policy.slot_minutes, DEFAULT_SLOT_MINUTES);
        assert_eq!(policy.start_hour, DEFAULT_START_HOUR);
    }
}
