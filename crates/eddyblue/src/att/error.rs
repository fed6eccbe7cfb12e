//! ATT error codes surfaced by the configuration engine
use super::constants::*;

/// ATT error codes from the Bluetooth Core attribute protocol
///
/// Only the codes the configuration engine can produce have their own variant;
/// anything else round-trips through `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttErrorCode {
    /// No error
    NoError,
    /// Read not permitted
    ReadNotPermitted,
    /// Write not permitted
    WriteNotPermitted,
    /// Attribute not found
    AttributeNotFound,
    /// Invalid attribute value length
    InvalidAttributeValueLength,
    /// Unlikely error
    Unlikely,
    /// Value not allowed
    ValueNotAllowed,
    /// Unknown error code
    Unknown(u8),
}

impl From<u8> for AttErrorCode {
    fn from(code: u8) -> Self {
        match code {
            ATT_SUCCESS => AttErrorCode::NoError,
            ATT_ERROR_READ_NOT_PERMITTED => AttErrorCode::ReadNotPermitted,
            ATT_ERROR_WRITE_NOT_PERMITTED => AttErrorCode::WriteNotPermitted,
            ATT_ERROR_ATTRIBUTE_NOT_FOUND => AttErrorCode::AttributeNotFound,
            ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH => AttErrorCode::InvalidAttributeValueLength,
            ATT_ERROR_UNLIKELY => AttErrorCode::Unlikely,
            ATT_ERROR_VALUE_NOT_ALLOWED => AttErrorCode::ValueNotAllowed,
            _ => AttErrorCode::Unknown(code),
        }
    }
}

impl From<AttErrorCode> for u8 {
    fn from(code: AttErrorCode) -> Self {
        match code {
            AttErrorCode::NoError => ATT_SUCCESS,
            AttErrorCode::ReadNotPermitted => ATT_ERROR_READ_NOT_PERMITTED,
            AttErrorCode::WriteNotPermitted => ATT_ERROR_WRITE_NOT_PERMITTED,
            AttErrorCode::AttributeNotFound => ATT_ERROR_ATTRIBUTE_NOT_FOUND,
            AttErrorCode::InvalidAttributeValueLength => ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH,
            AttErrorCode::Unlikely => ATT_ERROR_UNLIKELY,
            AttErrorCode::ValueNotAllowed => ATT_ERROR_VALUE_NOT_ALLOWED,
            AttErrorCode::Unknown(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(AttErrorCode::from(0x03), AttErrorCode::WriteNotPermitted);
        assert_eq!(AttErrorCode::from(0x0D), AttErrorCode::InvalidAttributeValueLength);
        assert_eq!(AttErrorCode::from(0x42), AttErrorCode::Unknown(0x42));
        // Codes the engine never reports have no named variant
        assert_eq!(AttErrorCode::from(0x04), AttErrorCode::Unknown(0x04));
        assert_eq!(AttErrorCode::from(0x08), AttErrorCode::Unknown(0x08));

        let raw: u8 = AttErrorCode::ValueNotAllowed.into();
        assert_eq!(raw, 0x13);
        let raw: u8 = AttErrorCode::Unknown(0x42).into();
        assert_eq!(raw, 0x42);
    }
}
