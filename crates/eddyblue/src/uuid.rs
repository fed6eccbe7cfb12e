use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents a 128-bit Bluetooth UUID.
///
/// The Eddystone-URL configuration service and its characteristics are all
/// vendor-assigned 128-bit UUIDs, so no 16/32-bit short forms are kept here.
/// Internally, the UUID is stored in little-endian byte order, which is how it
/// appears on the wire.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
}

impl Uuid {
    /// Creates a new 128-bit UUID directly from 16 bytes (little-endian).
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Uuid { bytes }
    }

    /// Creates a new 128-bit UUID directly from 16 bytes (big-endian).
    pub fn from_bytes_be(mut bytes: [u8; 16]) -> Self {
        bytes.reverse();
        Uuid { bytes }
    }

    /// Creates a UUID from its numeric value, e.g.
    /// `0xee0c2080_8786_40ba_ab96_99b91ac981d8`.
    pub const fn from_u128(value: u128) -> Self {
        Uuid {
            bytes: value.to_le_bytes(),
        }
    }

    /// Tries to create a UUID from a little-endian byte slice.
    ///
    /// Returns `None` unless the slice is exactly 16 bytes long.
    pub fn try_from_slice_le(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 16] = slice.try_into().ok()?;
        Some(Uuid::from_bytes_le(bytes))
    }

    /// Returns the underlying 16 bytes in little-endian order.
    pub const fn as_bytes_le(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the underlying 16 bytes in big-endian order.
    pub fn as_bytes_be(&self) -> [u8; 16] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    /// Returns the numeric value of the UUID.
    pub const fn as_u128(&self) -> u128 {
        u128::from_le_bytes(self.bytes)
    }
}

impl<'a> PartialEq<&'a [u8]> for Uuid {
    fn eq(&self, other: &&'a [u8]) -> bool {
        Uuid::try_from_slice_le(other).map_or(false, |uuid| *self == uuid)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Standard hyphenated format (big-endian)
        let b = self.as_bytes_be();
        write!(f, "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

/// Errors returned when parsing a UUID string
#[derive(Debug, Error)]
pub enum UuidParseError {
    #[error("Invalid UUID length: expected 32 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("Invalid UUID format")]
    InvalidFormat,

    #[error("Invalid hex in UUID: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    /// Parses the hyphenated (`ee0c2080-8786-40ba-ab96-99b91ac981d8`) or bare
    /// 32-digit form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(|c| c != '-' && !c.is_ascii_hexdigit()) {
            return Err(UuidParseError::InvalidFormat);
        }

        let cleaned: String = s.chars().filter(|c| *c != '-').collect();
        if cleaned.len() != 32 {
            return Err(UuidParseError::InvalidLength(cleaned.len()));
        }

        let mut bytes_be = [0u8; 16];
        hex::decode_to_slice(&cleaned, &mut bytes_be)?;
        Ok(Uuid::from_bytes_be(bytes_be))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: u128 = 0xee0c2080_8786_40ba_ab96_99b91ac981d8;

    #[test]
    fn test_parse_and_display() {
        let uuid: Uuid = "ee0c2080-8786-40ba-ab96-99b91ac981d8".parse().unwrap();
        assert_eq!(uuid, Uuid::from_u128(SERVICE));
        assert_eq!(uuid.to_string(), "ee0c2080-8786-40ba-ab96-99b91ac981d8");

        // Bare form parses to the same value
        let bare: Uuid = "EE0C2080878640BAAB9699B91AC981D8".parse().unwrap();
        assert_eq!(bare, uuid);
    }

    #[test]
    fn test_wire_order() {
        let uuid = Uuid::from_u128(SERVICE);
        let le = uuid.as_bytes_le();
        assert_eq!(le[0], 0xd8);
        assert_eq!(le[15], 0xee);
        assert_eq!(uuid.as_bytes_be()[0], 0xee);
        assert_eq!(uuid, &le[..]);
        assert_eq!(uuid.as_u128(), SERVICE);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "ee0c2080".parse::<Uuid>(),
            Err(UuidParseError::InvalidLength(8))
        ));
        assert!(matches!(
            "zz0c2080-8786-40ba-ab96-99b91ac981d8".parse::<Uuid>(),
            Err(UuidParseError::InvalidFormat)
        ));
        assert!(Uuid::try_from_slice_le(&[0u8; 4]).is_none());
    }
}
