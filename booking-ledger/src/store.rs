//! Storage seam for appointment records.
//!
//! The ledger only needs a scan filtered by date and phone, so the trait
//! mirrors a single `appointments` table with columns `id`, `phone`,
//! `token`, `time_slot` and `date`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One booked slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub phone: String,
    pub token: u32,
    pub time_slot: String,
    pub date: NaiveDate,
}

/// Fields supplied by the ledger when a booking is accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub phone: String,
    pub token: u32,
    pub time_slot: String,
    pub date: NaiveDate,
}

/// Backing collection of appointment records.
///
/// Implementations are not synchronized; the ledger serializes access.
pub trait AppointmentStore: Send + Sync {
    /// Date of the most recently inserted record, if any.
    fn latest_date(&self) -> Result<Option<NaiveDate>>;

    fn count_on(&self, date: NaiveDate) -> Result<usize>;

    fn contains(&self, phone: &str, date: NaiveDate) -> Result<bool>;

    /// Persist a complete record and return it with its assigned id.
    fn insert(&mut self, record: NewAppointment) -> Result<Appointment>;

    /// Records for `date` in insertion order.
    fn list_on(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

    /// Remove every record, returning how many were dropped.
    fn clear(&mut self) -> Result<usize>;
}

/// In-process store backed by a `Vec`
#[derive(Debug)]
pub struct MemoryStore {
    records: Vec<Appointment>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentStore for MemoryStore {
    fn latest_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self.records.last().map(|record| record.date))
    }

    fn count_on(&self, date: NaiveDate) -> Result<usize> {
        Ok(self.records.iter().filter(|record| record.date == date).count())
    }

    fn contains(&self, phone: &str, date: NaiveDate) -> Result<bool> {
        Ok(self
            .records
            .iter()
            .any(|record| record.date == date && record.phone == phone))
    }

    fn insert(&mut self, record: NewAppointment) -> Result<Appointment> {
        let id = self.next_id;
        let appointment = Appointment {
            id,
            phone: record.phone,
            token: record.token,
            time_slot: record.time_slot,
            date: record.date,
        };
        self.records.push(appointment.clone());
        self.next_id = id + 1;
        Ok(appointment)
    }

    fn list_on(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.date == date)
            .cloned()
            .collect())
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.records.len();
        self.records.clear();
        Ok(removed)
    }
}
