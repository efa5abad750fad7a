//! EEPROM memory map
//!
//! ```text
//!  addr   0        1 ..  9   10        11 .. 42   43 .. 99
//!        +--------+---------+---------+----------+---------+
//!        | Marker | (spare) | NameLen | Name     | (spare) |
//!        +--------+---------+---------+----------+---------+
//!  addr   100      101 .. 164   165 .. 199   200     201 .. 250
//!        +--------+------------+------------+-------+-----------+
//!        | SecLen | Secret     | (spare)    | TzLen | Timezone  |
//!        +--------+------------+------------+-------+-----------+
//! ```
//!
//! - `Marker`: `0xAA` once a complete configuration has been written, any
//!   other value means unconfigured (1 byte)
//! - Each string region is a length byte followed by up to `max_len` raw
//!   bytes. Bytes past the stored length are undefined.
//!
//! The offsets are part of the on-device format. Changing them orphans the
//! configuration of every device already in the field.

/// Address of the configured marker byte
pub const MARKER_ADDR: u16 = 0;

/// Marker value meaning "a complete configuration has been written"
pub const CONFIGURED_MARKER: u8 = 0xAA;

/// Marker value written by a clear
pub const CLEARED_MARKER: u8 = 0x00;

/// Maximum network name (SSID) length in bytes
pub const MAX_NETWORK_NAME_LEN: usize = 32;

/// Maximum network secret (passphrase) length in bytes
pub const MAX_NETWORK_SECRET_LEN: usize = 64;

/// Maximum POSIX TZ rule length in bytes
pub const MAX_TIME_ZONE_LEN: usize = 50;

/// One length-prefixed string region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldRegion {
    /// Address of the length byte
    pub offset: u16,
    /// Maximum payload length in bytes (never above 255)
    pub max_len: u8,
}

impl FieldRegion {
    /// Create a region descriptor
    pub const fn new(offset: u16, max_len: u8) -> Self {
        Self { offset, max_len }
    }

    /// Total size including the length byte
    pub const fn size(self) -> u16 {
        1 + self.max_len as u16
    }

    /// First address past the region
    pub const fn end(self) -> u16 {
        self.offset + self.size()
    }

    /// Address of the `index`-th payload byte
    pub const fn payload_addr(self, index: u8) -> u16 {
        self.offset + 1 + index as u16
    }

    /// Check whether `addr` falls inside this region
    pub const fn contains(self, addr: u16) -> bool {
        addr >= self.offset && addr < self.end()
    }

    /// Check whether two regions share any byte
    pub const fn overlaps(self, other: FieldRegion) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

/// The persisted string fields, in save/load order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigField {
    /// WiFi network name
    NetworkName,
    /// WiFi passphrase
    NetworkSecret,
    /// POSIX TZ rule
    TimeZoneSpec,
}

impl ConfigField {
    /// All fields in the order they are written and read
    pub const ALL: [ConfigField; 3] = [
        ConfigField::NetworkName,
        ConfigField::NetworkSecret,
        ConfigField::TimeZoneSpec,
    ];

    /// Region holding this field
    pub const fn region(self) -> FieldRegion {
        match self {
            ConfigField::NetworkName => MEMORY_MAP.network_name,
            ConfigField::NetworkSecret => MEMORY_MAP.network_secret,
            ConfigField::TimeZoneSpec => MEMORY_MAP.time_zone_spec,
        }
    }

    /// Maximum stored length in bytes
    pub const fn max_len(self) -> usize {
        self.region().max_len as usize
    }
}

/// Placement of every persisted item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryMap {
    /// Configured marker address
    pub marker: u16,
    /// WiFi network name region
    pub network_name: FieldRegion,
    /// WiFi passphrase region
    pub network_secret: FieldRegion,
    /// POSIX TZ rule region
    pub time_zone_spec: FieldRegion,
}

impl MemoryMap {
    /// Number of bytes a device must provide to hold the whole map
    pub const fn required_capacity(&self) -> usize {
        let mut end = self.marker as usize + 1;
        let fields = [self.network_name, self.network_secret, self.time_zone_spec];
        let mut i = 0;
        while i < fields.len() {
            if fields[i].end() as usize > end {
                end = fields[i].end() as usize;
            }
            i += 1;
        }
        end
    }

    /// Check that no two regions share a byte
    pub const fn is_disjoint(&self) -> bool {
        let fields = [self.network_name, self.network_secret, self.time_zone_spec];
        let mut i = 0;
        while i < fields.len() {
            if fields[i].contains(self.marker) {
                return false;
            }
            let mut j = i + 1;
            while j < fields.len() {
                if fields[i].overlaps(fields[j]) {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

/// The memory map used by every DreamClock device
pub const MEMORY_MAP: MemoryMap = MemoryMap {
    marker: MARKER_ADDR,
    network_name: FieldRegion::new(10, MAX_NETWORK_NAME_LEN as u8),
    network_secret: FieldRegion::new(100, MAX_NETWORK_SECRET_LEN as u8),
    time_zone_spec: FieldRegion::new(200, MAX_TIME_ZONE_LEN as u8),
};

/// Bytes of EEPROM the configuration occupies
pub const REQUIRED_CAPACITY: usize = MEMORY_MAP.required_capacity();

const _: () = assert!(MEMORY_MAP.is_disjoint(), "memory map regions overlap");
const _: () = assert!(MAX_NETWORK_NAME_LEN <= u8::MAX as usize);
const _: () = assert!(MAX_NETWORK_SECRET_LEN <= u8::MAX as usize);
const _: () = assert!(MAX_TIME_ZONE_LEN <= u8::MAX as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_bounds() {
        let name = MEMORY_MAP.network_name;
        assert_eq!(name.size(), 33);
        assert_eq!(name.end(), 43);
        assert_eq!(name.payload_addr(0), 11);
        assert_eq!(name.payload_addr(31), 42);
        assert!(name.contains(10));
        assert!(name.contains(42));
        assert!(!name.contains(43));
    }

    #[test]
    fn test_shipped_map_is_disjoint() {
        assert!(MEMORY_MAP.is_disjoint());
        assert_eq!(REQUIRED_CAPACITY, 251);
    }

    #[test]
    fn test_overlap_detection() {
        let a = FieldRegion::new(10, 32); // 10..43
        let b = FieldRegion::new(42, 4); // 42..47
        let c = FieldRegion::new(43, 4); // 43..48
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(!a.overlaps(c));

        let bad = MemoryMap {
            marker: 0,
            network_name: a,
            network_secret: b,
            time_zone_spec: FieldRegion::new(200, 50),
        };
        assert!(!bad.is_disjoint());
    }

    #[test]
    fn test_marker_inside_field_is_rejected() {
        let bad = MemoryMap {
            marker: 20,
            ..MEMORY_MAP
        };
        assert!(!bad.is_disjoint());
    }

    #[test]
    fn test_field_order_and_limits() {
        assert_eq!(
            ConfigField::ALL,
            [
                ConfigField::NetworkName,
                ConfigField::NetworkSecret,
                ConfigField::TimeZoneSpec
            ]
        );
        assert_eq!(ConfigField::NetworkName.max_len(), 32);
        assert_eq!(ConfigField::NetworkSecret.max_len(), 64);
        assert_eq!(ConfigField::TimeZoneSpec.max_len(), 50);
        assert_eq!(ConfigField::NetworkSecret.region().offset, 100);
    }
}
