use std::sync::Arc;

use booking_ledger::Ledger;
use logger_redacted::{PhoneRedactor, RedactionConfig};

use crate::settings::Settings;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct TokenLineServer {
    /// Loaded settings
    pub settings: Arc<Settings>,
    /// The one ledger for this process
    pub ledger: Arc<Ledger>,
    /// Redactor for caller numbers in log fields
    pub redactor: PhoneRedactor,
    /// Process start, for uptime reporting
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl TokenLineServer {
    /// Create a server around an in-memory ledger
    pub fn new(settings: Settings) -> Self {
        Self::with_ledger(settings, Ledger::in_memory())
    }

    /// Create a server around a caller-supplied ledger
    pub fn with_ledger(settings: Settings, ledger: Ledger) -> Self {
        let redactor = PhoneRedactor::new(RedactionConfig::from(&settings.logging));
        Self {
            settings: Arc::new(settings),
            ledger: Arc::new(ledger),
            redactor,
            started_at: chrono::Utc::now(),
        }
    }

    /// Get server settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn uptime_seconds(&self) -> u64 {
        let elapsed = chrono::Utc::now() - self.started_at;
        u64::try_from(elapsed.num_seconds()).unwrap_or(0)
    }
}
