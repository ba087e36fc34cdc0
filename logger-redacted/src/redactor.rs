use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::config::LoggerConfig;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(
        r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b|\+?\b\d{7,15}\b"
    )
    .expect("phone pattern is valid");
}

/// Phone redaction configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionConfig {
    /// Emit a digest instead of a mask
    pub hash_for_correlation: bool,
    /// Trailing digits left readable when masking
    pub visible_digits: usize,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            hash_for_correlation: true,
            visible_digits: 2,
        }
    }
}

impl From<&LoggerConfig> for RedactionConfig {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            hash_for_correlation: config.redact_hash,
            ..Default::default()
        }
    }
}

/// Redactor for caller numbers
#[derive(Debug, Clone, Default)]
pub struct PhoneRedactor {
    config: RedactionConfig,
}

impl PhoneRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Redact a value known to be a caller number.
    pub fn redact_phone(&self, phone: &str) -> String {
        if self.config.hash_for_correlation {
            format!("PHONE[{}]", self.hash_value(phone))
        } else {
            self.mask(phone)
        }
    }

    /// Redact every phone-like sequence inside free text.
    pub fn redact_text(&self, text: &str) -> String {
        PHONE_REGEX
            .replace_all(text, |caps: &regex::Captures| self.redact_phone(&caps[0]))
            .to_string()
    }

    fn mask(&self, phone: &str) -> String {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        let hidden = digits.saturating_sub(self.config.visible_digits);
        let mut seen = 0;
        phone
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    seen += 1;
                    if seen <= hidden {
                        return '*';
                    }
                }
                c
            })
            .collect()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        general_purpose::STANDARD.encode(&result[..8]) // first 8 bytes keep it short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masking() -> PhoneRedactor {
        PhoneRedactor::new(RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_mask_keeps_separators_and_tail() {
        assert_eq!(masking().redact_phone("+1 555 010 0123"), "+* *** *** **23");
    }

    #[test]
    fn test_mask_short_value() {
        assert_eq!(masking().redact_phone("42"), "42");
        assert_eq!(masking().redact_phone(""), "");
    }

    #[test]
    fn test_hash_is_stable_and_hides_digits() {
        let redactor = PhoneRedactor::default();
        let first = redactor.redact_phone("+15550100123");
        assert_eq!(first, redactor.redact_phone("+15550100123"));
        assert_ne!(first, redactor.redact_phone("+15550100124"));
        assert!(first.starts_with("PHONE["));
        assert!(!first.contains("5550100123"));
    }

    #[test]
    fn test_text_redaction() {
        let redacted = masking().redact_text("Call me at (555) 123-4567 or +15550100123");
        assert!(!redacted.contains("123-4567"));
        assert!(!redacted.contains("5550100123"));
        assert!(redacted.starts_with("Call me at "));
    }

    #[test]
    fn test_dates_and_slots_survive_text_redaction() {
        let text = "2026-10-14 slot 09:50 - 09:60 token 6";
        assert_eq!(masking().redact_text(text), text);
    }

    #[test]
    fn test_from_logger_config() {
        let config = LoggerConfig {
            redact_hash: false,
            ..Default::default()
        };
        assert!(!RedactionConfig::from(&config).hash_for_correlation);
    }
}
