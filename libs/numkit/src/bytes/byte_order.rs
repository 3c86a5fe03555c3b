//! Byte order representation and host endianness detection
//!
//! The host order is probed once per process and cached; the architecture
//! cannot change at runtime, so every later call reads the cached value.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::sync::OnceLock;
use tracing::trace;

/// Byte order of a multi-byte value laid out as a byte sequence
///
/// Uses ABCD notation where A is the most significant byte.
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Big-endian: ABCD (most significant byte first)
    ///
    /// Network byte order.
    BigEndian,

    /// Little-endian: DCBA (least significant byte first)
    ///
    /// x86 and most ARM native byte order.
    LittleEndian,
}

static HOST_ORDER: OnceLock<ByteOrder> = OnceLock::new();

fn probe_host_order() -> ByteOrder {
    // Lay out integer 1 in native order and look at the first byte
    let probe = 1i32.to_ne_bytes();
    let order = if probe[0] == 1 {
        ByteOrder::LittleEndian
    } else {
        ByteOrder::BigEndian
    };
    trace!("Probed host byte order: {}", order);
    order
}

impl ByteOrder {
    /// Byte order of the running host, computed once and cached
    pub fn host() -> Self {
        *HOST_ORDER.get_or_init(probe_host_order)
    }

    /// Parse from common string representations
    ///
    /// Supports (case-insensitive, `-` ignored):
    /// - "ABCD", "BE", "BIG", "BIG_ENDIAN" → BigEndian
    /// - "DCBA", "LE", "LITTLE", "LITTLE_ENDIAN" → LittleEndian
    /// - "NATIVE", "HOST" → the host order
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "BE" | "BIG" | "BIG_ENDIAN" | "BIGENDIAN" | "NETWORK" => Some(Self::BigEndian),
            "DCBA" | "LE" | "LITTLE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => {
                Some(Self::LittleEndian)
            },
            "NATIVE" | "HOST" => Some(Self::host()),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
        }
    }

    /// Short form used in config files
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::BigEndian => "BE",
            Self::LittleEndian => "LE",
        }
    }

    /// The opposite byte order
    pub fn reversed(&self) -> Self {
        match self {
            Self::BigEndian => Self::LittleEndian,
            Self::LittleEndian => Self::BigEndian,
        }
    }

    /// Whether native bytes must be reversed to produce this order
    pub fn needs_reversal(&self) -> bool {
        *self != Self::host()
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

/// Check whether the host stores the least significant byte first
pub fn is_little_endian() -> bool {
    ByteOrder::host().is_little_endian()
}

/// Check whether the host stores the most significant byte first
pub fn is_big_endian() -> bool {
    ByteOrder::host().is_big_endian()
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}

impl Serialize for ByteOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_name())
    }
}

impl<'de> Deserialize<'de> for ByteOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ByteOrder::from_str(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown byte order '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(ByteOrder::from_str("ABCD"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_str("be"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::from_str("big-endian"), Some(ByteOrder::BigEndian));

        assert_eq!(ByteOrder::from_str("DCBA"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::from_str("LE"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::from_str("little"), Some(ByteOrder::LittleEndian));

        assert_eq!(ByteOrder::from_str("native"), Some(ByteOrder::host()));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(ByteOrder::from_str("CDAB"), None);
        assert_eq!(ByteOrder::from_str(""), None);
    }

    #[test]
    fn test_host_detection_consistent() {
        assert_ne!(is_little_endian(), is_big_endian());
        for _ in 0..3 {
            assert_eq!(is_little_endian(), cfg!(target_endian = "little"));
            assert_eq!(is_big_endian(), cfg!(target_endian = "big"));
        }
    }

    #[test]
    fn test_host_detection_across_threads() {
        let expected = ByteOrder::host();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(ByteOrder::host))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_needs_reversal() {
        let host = ByteOrder::host();
        assert!(!host.needs_reversal());
        assert!(host.reversed().needs_reversal());
    }

    #[test]
    fn test_default() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
