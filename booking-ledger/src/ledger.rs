use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, Result};
use crate::slot::LedgerPolicy;
use crate::store::{AppointmentStore, MemoryStore, NewAppointment};

/// Accepted booking returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub token: u32,
    pub time_slot: String,
    pub wait_minutes: u32,
}

/// Capacity snapshot for today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub date: NaiveDate,
    pub total_booked: usize,
    pub max_limit: u32,
    pub remaining: i64,
}

/// Today's appointment ledger.
///
/// Mutations (`book`, `reset_all`, the rollover purge) hold the write lock
/// for their whole duration. Reads share the read lock and only look at
/// records dated today, so a record from a previous day is never visible
/// even before the purge has run.
pub struct Ledger {
    store: RwLock<Box<dyn AppointmentStore>>,
    clock: Arc<dyn Clock>,
    policy: LedgerPolicy,
}

impl Ledger {
    pub fn new(
        store: Box<dyn AppointmentStore>,
        clock: Arc<dyn Clock>,
        policy: LedgerPolicy,
    ) -> Self {
        Self {
            store: RwLock::new(store),
            clock,
            policy,
        }
    }

    /// Memory-backed ledger on the system clock with the default policy
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(MemoryStore::new()),
            Arc::new(SystemClock),
            LedgerPolicy::default(),
        )
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Purge every record when the stored day is not today.
    ///
    /// Returns the number of records removed; zero when the ledger is empty
    /// or already holds today's records.
    pub fn rollover_if_new_day(&self) -> Result<usize> {
        let today = self.clock.today();
        let store = self.store.upgradable_read();
        match store.latest_date()? {
            Some(stored) if stored != today => {
                let mut store = RwLockUpgradableReadGuard::upgrade(store);
                let purged = store.clear()?;
                info!(stored = %stored, today = %today, purged, "Day rollover purged ledger");
                Ok(purged)
            }
            _ => Ok(0),
        }
    }

    pub fn count_today(&self) -> Result<usize> {
        let today = self.clock.today();
        self.store.read().count_on(today)
    }

    pub fn is_already_booked(&self, phone: &str) -> Result<bool> {
        let today = self.clock.today();
        self.store.read().contains(phone, today)
    }

    /// Tokens still available today. Negative only if capacity was overrun.
    pub fn remaining_slots(&self) -> Result<i64> {
        let count = self.count_today()?;
        Ok(i64::from(self.policy.capacity) - count as i64)
    }

    /// Issue the next token for today to `phone`.
    ///
    /// Rollover, the duplicate check, the capacity check and the insert all
    /// happen under one write lock and one reading of the clock.
    pub fn book(&self, phone: &str) -> Result<Booking> {
        let today = self.clock.today();
        let mut store = self.store.write();

        if let Some(stored) = store.latest_date()? {
            if stored != today {
                let purged = store.clear()?;
                info!(stored = %stored, today = %today, purged, "Day rollover purged ledger");
            }
        }

        if store.contains(phone, today)? {
            debug!("Duplicate booking rejected");
            return Err(LedgerError::DuplicateBooking);
        }

        let count = store.count_on(today)?;
        if count >= self.policy.capacity as usize {
            debug!(count, capacity = self.policy.capacity, "Booking rejected at capacity");
            return Err(LedgerError::CapacityExceeded {
                capacity: self.policy.capacity,
            });
        }

        // count < capacity, so the next token fits in a u32
        let token = u32::try_from(count + 1).map_err(|_| LedgerError::SlotOutOfRange {
            token: self.policy.capacity,
        })?;
        let (slot, wait_minutes) = self
            .policy
            .slot_for(token)
            .zip(self.policy.wait_for(token))
            .ok_or(LedgerError::SlotOutOfRange { token })?;
        let time_slot = slot.to_string();

        store.insert(NewAppointment {
            phone: phone.to_string(),
            token,
            time_slot: time_slot.clone(),
            date: today,
        })?;

        info!(token, time_slot = %time_slot, wait_minutes, "Token issued");

        Ok(Booking {
            token,
            time_slot,
            wait_minutes,
        })
    }

    /// Display slot for `token`; `None` outside `1..=capacity`.
    pub fn slot_for(&self, token: u32) -> Option<String> {
        self.policy.slot_for(token).map(|slot| slot.to_string())
    }

    pub fn wait_for(&self, token: u32) -> Option<u32> {
        self.policy.wait_for(token)
    }

    /// `(phone, token, time_slot)` for today, in booking order.
    pub fn list_today(&self) -> Result<Vec<(String, u32, String)>> {
        let today = self.clock.today();
        let records = self.store.read().list_on(today)?;
        Ok(records
            .into_iter()
            .map(|record| (record.phone, record.token, record.time_slot))
            .collect())
    }

    /// Drop every record regardless of its date.
    pub fn reset_all(&self) -> Result<usize> {
        let removed = self.store.write().clear()?;
        info!(removed, "Ledger reset");
        Ok(removed)
    }

    /// Count and remaining capacity read under one lock acquisition.
    pub fn stats(&self) -> Result<LedgerStats> {
        let today = self.clock.today();
        let total_booked = self.store.read().count_on(today)?;
        Ok(LedgerStats {
            date: today,
            total_booked,
            max_limit: self.policy.capacity,
            remaining: i64::from(self.policy.capacity) - total_booked as i64,
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
