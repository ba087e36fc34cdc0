// Logger configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Emit JSON lines instead of coloured text
    pub json: bool,
    /// Replace caller numbers with a correlation hash rather than a mask
    pub redact_hash: bool,
    pub log_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            json: false,
            redact_hash: true,
            log_level: "info".to_string(),
        }
    }
}
