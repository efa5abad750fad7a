//! Configuration record
//!
//! The typed form of everything persisted in the EEPROM. Field capacities
//! come straight from the memory map so a record can always be stored
//! without loss.

use core::fmt;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::{ConfigField, MAX_NETWORK_NAME_LEN, MAX_NETWORK_SECRET_LEN, MAX_TIME_ZONE_LEN};

/// Device setup persisted across power cycles
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigurationRecord {
    /// WiFi network name (SSID)
    pub network_name: String<MAX_NETWORK_NAME_LEN>,
    /// WiFi passphrase
    pub network_secret: String<MAX_NETWORK_SECRET_LEN>,
    /// POSIX TZ rule, e.g. `EST5EDT,M3.2.0/2,M11.1.0/2`
    pub time_zone_spec: String<MAX_TIME_ZONE_LEN>,
}

impl ConfigurationRecord {
    /// Build a record, truncating each field to its capacity
    pub fn new(network_name: &str, network_secret: &str, time_zone_spec: &str) -> Self {
        Self {
            network_name: truncated(network_name),
            network_secret: truncated(network_secret),
            time_zone_spec: truncated(time_zone_spec),
        }
    }

    /// Text of a field
    pub fn field(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::NetworkName => self.network_name.as_str(),
            ConfigField::NetworkSecret => self.network_secret.as_str(),
            ConfigField::TimeZoneSpec => self.time_zone_spec.as_str(),
        }
    }

    /// Replace a field, truncating to its capacity
    pub fn set_field(&mut self, field: ConfigField, text: &str) {
        match field {
            ConfigField::NetworkName => self.network_name = truncated(text),
            ConfigField::NetworkSecret => self.network_secret = truncated(text),
            ConfigField::TimeZoneSpec => self.time_zone_spec = truncated(text),
        }
    }

    /// Check whether the device can join a network and show local time
    ///
    /// An open network has no secret, so only the name and timezone are
    /// required.
    pub fn is_complete(&self) -> bool {
        !self.network_name.is_empty() && !self.time_zone_spec.is_empty()
    }

    /// Check whether every field is empty (erased or never written)
    pub fn is_empty(&self) -> bool {
        self.network_name.is_empty()
            && self.network_secret.is_empty()
            && self.time_zone_spec.is_empty()
    }
}

// Keep the passphrase out of logs and panic messages.
impl fmt::Debug for ConfigurationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationRecord")
            .field("network_name", &self.network_name)
            .field("network_secret", &Redacted(self.network_secret.len()))
            .field("time_zone_spec", &self.time_zone_spec)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigurationRecord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ConfigurationRecord(network_name={=str}, network_secret=<{=usize} bytes>, time_zone_spec={=str})",
            self.network_name.as_str(),
            self.network_secret.len(),
            self.time_zone_spec.as_str()
        )
    }
}

struct Redacted(usize);

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} bytes>", self.0)
    }
}

/// Copy the longest prefix of `text` that fits in `N` bytes without
/// splitting a character
pub(crate) fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    // Cannot fail: the prefix is cut to at most N bytes.
    let _ = out.push_str(&text[..floor_char_boundary(text, N)]);
    out
}

/// Largest char boundary in `text` that is `<= max`
pub(crate) fn floor_char_boundary(text: &str, max: usize) -> usize {
    if max >= text.len() {
        return text.len();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_new_keeps_short_fields() {
        let record = ConfigurationRecord::new("HomeWiFi", "secretpass123", "JST-9");
        assert_eq!(record.network_name.as_str(), "HomeWiFi");
        assert_eq!(record.network_secret.as_str(), "secretpass123");
        assert_eq!(record.time_zone_spec.as_str(), "JST-9");
        assert!(record.is_complete());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_new_truncates_to_capacity() {
        let long = "x".repeat(100);
        let record = ConfigurationRecord::new(&long, &long, &long);
        assert_eq!(record.network_name.len(), MAX_NETWORK_NAME_LEN);
        assert_eq!(record.network_secret.len(), MAX_NETWORK_SECRET_LEN);
        assert_eq!(record.time_zone_spec.len(), MAX_TIME_ZONE_LEN);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 31 ASCII bytes followed by a 2-byte character straddling the limit
        let mut name = "a".repeat(31);
        name.push('é');
        let record = ConfigurationRecord::new(&name, "", "");
        assert_eq!(record.network_name.len(), 31);
        assert!(record.network_name.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_floor_char_boundary() {
        assert_eq!(floor_char_boundary("abc", 10), 3);
        assert_eq!(floor_char_boundary("abc", 2), 2);
        assert_eq!(floor_char_boundary("aé", 2), 1);
        assert_eq!(floor_char_boundary("", 0), 0);
    }

    #[test]
    fn test_field_accessors() {
        let mut record = ConfigurationRecord::default();
        assert!(record.is_empty());
        assert!(!record.is_complete());

        record.set_field(ConfigField::NetworkName, "Cabin");
        record.set_field(ConfigField::TimeZoneSpec, "HST10");
        assert_eq!(record.field(ConfigField::NetworkName), "Cabin");
        assert_eq!(record.field(ConfigField::NetworkSecret), "");
        assert_eq!(record.field(ConfigField::TimeZoneSpec), "HST10");

        // Open network: no secret required
        assert!(record.is_complete());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let record = ConfigurationRecord::new("HomeWiFi", "secretpass123", "JST-9");
        let shown = format!("{:?}", record);
        assert!(shown.contains("HomeWiFi"));
        assert!(shown.contains("<13 bytes>"));
        assert!(!shown.contains("secretpass123"));
    }
}
