//! ATT Protocol constants

// ATT result codes returned to the transport. 0x00 is not an ATT error code
// but is what the transport reports for a successful request.
pub const ATT_SUCCESS: u8 = 0x00;
pub const ATT_ERROR_READ_NOT_PERMITTED: u8 = 0x02;
pub const ATT_ERROR_WRITE_NOT_PERMITTED: u8 = 0x03;
pub const ATT_ERROR_ATTRIBUTE_NOT_FOUND: u8 = 0x0A;
pub const ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH: u8 = 0x0D;
pub const ATT_ERROR_UNLIKELY: u8 = 0x0E;
pub const ATT_ERROR_VALUE_NOT_ALLOWED: u8 = 0x13;

// GATT characteristic property bits
pub const CHAR_PROP_READ: u8 = 0x02;
pub const CHAR_PROP_WRITE_WITHOUT_RESPONSE: u8 = 0x04;
pub const CHAR_PROP_WRITE: u8 = 0x08;
