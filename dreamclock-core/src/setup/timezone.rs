//! Timezone presets offered during setup
//!
//! POSIX TZ rules (`std offset dst [offset],start[/time],end[/time]`) that the
//! clock hands to its time library. The store accepts any rule that fits the
//! timezone region; these are the ones the setup page lists.

use crate::config::layout::MAX_TIME_ZONE_LEN;

/// A named POSIX TZ rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimezonePreset {
    /// Human-readable name shown to the user
    pub label: &'static str,
    /// POSIX TZ rule stored in the configuration
    pub rule: &'static str,
}

/// Presets in display order
pub const TIMEZONE_PRESETS: &[TimezonePreset] = &[
    TimezonePreset { label: "Eastern Time (US)", rule: "EST5EDT,M3.2.0/2,M11.1.0/2" },
    TimezonePreset { label: "Central Time (US)", rule: "CST6CDT,M3.2.0/2,M11.1.0/2" },
    TimezonePreset { label: "Mountain Time (US)", rule: "MST7MDT,M3.2.0/2,M11.1.0/2" },
    TimezonePreset { label: "Pacific Time (US)", rule: "PST8PDT,M3.2.0/2,M11.1.0/2" },
    TimezonePreset { label: "Alaska Time (US)", rule: "AKST9AKDT,M3.2.0/2,M11.1.0/2" },
    TimezonePreset { label: "Hawaii Time (US)", rule: "HST10" },
    TimezonePreset { label: "London (UK)", rule: "GMT0BST,M3.5.0/1,M10.5.0" },
    TimezonePreset { label: "Central Europe", rule: "CET-1CEST,M3.5.0,M10.5.0/3" },
    TimezonePreset { label: "Eastern Europe", rule: "EET-2EEST,M3.5.0/3,M10.5.0/4" },
    TimezonePreset { label: "Japan", rule: "JST-9" },
    TimezonePreset { label: "Sydney (Australia)", rule: "AEST-10AEDT,M10.1.0,M4.1.0/3" },
];

/// Preset selected when the user makes no choice
pub const DEFAULT_TIMEZONE: TimezonePreset = TIMEZONE_PRESETS[0];

const fn presets_fit() -> bool {
    let mut i = 0;
    while i < TIMEZONE_PRESETS.len() {
        if TIMEZONE_PRESETS[i].rule.len() > MAX_TIME_ZONE_LEN {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(presets_fit(), "timezone preset longer than its region");

/// Find a preset by its label
pub fn find_by_label(label: &str) -> Option<&'static TimezonePreset> {
    TIMEZONE_PRESETS.iter().find(|p| p.label == label)
}

/// Find the preset using `rule`
pub fn find_by_rule(rule: &str) -> Option<&'static TimezonePreset> {
    TIMEZONE_PRESETS.iter().find(|p| p.rule == rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let japan = find_by_label("Japan").unwrap();
        assert_eq!(japan.rule, "JST-9");

        let london = find_by_rule("GMT0BST,M3.5.0/1,M10.5.0").unwrap();
        assert_eq!(london.label, "London (UK)");

        assert!(find_by_label("Mars").is_none());
        assert!(find_by_rule("UTC0").is_none());
    }

    #[test]
    fn test_default_is_us_eastern() {
        assert_eq!(DEFAULT_TIMEZONE.rule, "EST5EDT,M3.2.0/2,M11.1.0/2");
    }

    #[test]
    fn test_rules_are_ascii_and_unique() {
        for (i, preset) in TIMEZONE_PRESETS.iter().enumerate() {
            assert!(preset.rule.is_ascii());
            assert!(preset.rule.len() <= MAX_TIME_ZONE_LEN);
            for other in &TIMEZONE_PRESETS[i + 1..] {
                assert_ne!(preset.rule, other.rule);
            }
        }
    }
}
