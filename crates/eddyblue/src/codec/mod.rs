//! Attribute value codecs
//!
//! Every configuration attribute moves over the air as a short byte string.
//! This module converts those byte strings to and from typed values:
//! - fixed-width little-endian unsigned integers ([`ByteCodec`])
//! - signed 8-bit arrays, one byte per entry ([`ArrayCodec`])
//! - Eddystone-URL compressed URLs ([`UrlCodec`])
//!
//! Codecs are stateless. Length checks that depend on the attribute live in the
//! dispatcher; the codecs only reject input they cannot represent.

pub mod error;
pub mod url;

#[cfg(test)]
mod tests;

pub use self::error::{CodecError, CodecResult};
pub use self::url::UrlCodec;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

/// Width of a fixed-size integer attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteWidth {
    One,
    Two,
    Four,
}

impl ByteWidth {
    /// Number of bytes on the wire
    pub const fn len(self) -> usize {
        match self {
            ByteWidth::One => 1,
            ByteWidth::Two => 2,
            ByteWidth::Four => 4,
        }
    }

    /// Largest value representable in this width
    pub const fn max_value(self) -> u32 {
        match self {
            ByteWidth::One => u8::MAX as u32,
            ByteWidth::Two => u16::MAX as u32,
            ByteWidth::Four => u32::MAX,
        }
    }
}

/// Little-endian unsigned integer codec of a fixed width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCodec {
    width: ByteWidth,
}

impl ByteCodec {
    pub const fn new(width: ByteWidth) -> Self {
        Self { width }
    }

    pub const fn width(&self) -> ByteWidth {
        self.width
    }

    /// Encode `value` into exactly `width` bytes
    pub fn encode(&self, value: u32) -> CodecResult<Vec<u8>> {
        if value > self.width.max_value() {
            return Err(CodecError::ValueOutOfRange {
                value,
                width: self.width.len(),
            });
        }

        let mut buf = Vec::with_capacity(self.width.len());
        match self.width {
            ByteWidth::One => buf.write_u8(value as u8)?,
            ByteWidth::Two => buf.write_u16::<LittleEndian>(value as u16)?,
            ByteWidth::Four => buf.write_u32::<LittleEndian>(value)?,
        }

        Ok(buf)
    }

    /// Decode exactly `width` bytes
    pub fn decode(&self, data: &[u8]) -> CodecResult<u32> {
        if data.len() != self.width.len() {
            return Err(CodecError::InvalidLength {
                expected: self.width.len(),
                actual: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);
        let value = match self.width {
            ByteWidth::One => cursor.read_u8()? as u32,
            ByteWidth::Two => cursor.read_u16::<LittleEndian>()? as u32,
            ByteWidth::Four => cursor.read_u32::<LittleEndian>()?,
        };

        Ok(value)
    }
}

/// Signed 8-bit array codec: one two's-complement byte per entry, no prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayCodec;

impl ArrayCodec {
    pub fn encode(&self, values: &[i8]) -> Vec<u8> {
        values.iter().map(|v| *v as u8).collect()
    }

    pub fn decode(&self, data: &[u8]) -> Vec<i8> {
        data.iter().map(|b| *b as i8).collect()
    }
}

/// A decoded attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Fixed-width unsigned integer
    Unsigned(u32),
    /// Signed 8-bit array
    Levels(Vec<i8>),
    /// Decoded URL
    Url(String),
    /// Opaque payload that carries no value
    Bytes(Vec<u8>),
}

impl AttributeValue {
    pub fn as_unsigned(&self) -> Option<u32> {
        match self {
            AttributeValue::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_levels(&self) -> Option<&[i8]> {
        match self {
            AttributeValue::Levels(levels) => Some(levels),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            AttributeValue::Url(url) => Some(url),
            _ => None,
        }
    }
}

/// The codec attached to an attribute descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Byte(ByteCodec),
    Array(ArrayCodec),
    Url(UrlCodec),
    /// Payload is passed through untouched
    Raw,
}

impl Codec {
    pub const fn byte(width: ByteWidth) -> Self {
        Codec::Byte(ByteCodec::new(width))
    }

    /// Encode a typed value to its wire form
    pub fn encode(&self, value: &AttributeValue) -> CodecResult<Vec<u8>> {
        match (self, value) {
            (Codec::Byte(codec), AttributeValue::Unsigned(v)) => codec.encode(*v),
            (Codec::Array(codec), AttributeValue::Levels(levels)) => Ok(codec.encode(levels)),
            (Codec::Url(codec), AttributeValue::Url(url)) => codec.encode(url),
            (Codec::Raw, AttributeValue::Bytes(bytes)) => Ok(bytes.clone()),
            (Codec::Byte(_), _) => Err(CodecError::TypeMismatch("expected unsigned integer")),
            (Codec::Array(_), _) => Err(CodecError::TypeMismatch("expected level array")),
            (Codec::Url(_), _) => Err(CodecError::TypeMismatch("expected URL")),
            (Codec::Raw, _) => Err(CodecError::TypeMismatch("expected raw bytes")),
        }
    }

    /// Decode a wire payload into a typed value
    pub fn decode(&self, data: &[u8]) -> CodecResult<AttributeValue> {
        match self {
            Codec::Byte(codec) => codec.decode(data).map(AttributeValue::Unsigned),
            Codec::Array(codec) => Ok(AttributeValue::Levels(codec.decode(data))),
            Codec::Url(codec) => codec.decode(data).map(AttributeValue::Url),
            Codec::Raw => Ok(AttributeValue::Bytes(data.to_vec())),
        }
    }
}
