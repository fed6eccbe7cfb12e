//! Configuration attribute table
//!
//! The set of attributes is closed. Each one is described by a single
//! [`AttributeDescriptor`] carrying its address, access properties, length
//! rule and codec; the engine drives every read and write off this table.

use super::constants::*;
use crate::att::{CHAR_PROP_READ, CHAR_PROP_WRITE, CHAR_PROP_WRITE_WITHOUT_RESPONSE};
use crate::codec::{ArrayCodec, ByteWidth, Codec, UrlCodec};
use crate::error::{EddystoneError, EddystoneResult};
use crate::uuid::Uuid;
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Operations an attribute accepts, using the GATT property bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Access: u8 {
        const READ = CHAR_PROP_READ;
        const WRITE_WITHOUT_RESPONSE = CHAR_PROP_WRITE_WITHOUT_RESPONSE;
        const WRITE = CHAR_PROP_WRITE;
    }
}

impl Access {
    pub fn can_read(&self) -> bool {
        self.contains(Access::READ)
    }

    pub fn can_write(&self) -> bool {
        self.intersects(Access::WRITE | Access::WRITE_WITHOUT_RESPONSE)
    }
}

/// Configuration attribute identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    LockState,
    Lock,
    Unlock,
    UriData,
    Flags,
    TxPowerLevel,
    TxPowerMode,
    BeaconPeriod,
    Reset,
}

impl AttributeName {
    pub const ALL: [AttributeName; 9] = [
        AttributeName::LockState,
        AttributeName::Lock,
        AttributeName::Unlock,
        AttributeName::UriData,
        AttributeName::Flags,
        AttributeName::TxPowerLevel,
        AttributeName::TxPowerMode,
        AttributeName::BeaconPeriod,
        AttributeName::Reset,
    ];

    /// Canonical name used by the transport
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeName::LockState => "lockState",
            AttributeName::Lock => "lock",
            AttributeName::Unlock => "unlock",
            AttributeName::UriData => "uriData",
            AttributeName::Flags => "flags",
            AttributeName::TxPowerLevel => "txPowerLevel",
            AttributeName::TxPowerMode => "txPowerMode",
            AttributeName::BeaconPeriod => "beaconPeriod",
            AttributeName::Reset => "reset",
        }
    }

    pub fn descriptor(self) -> &'static AttributeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn uuid(self) -> Uuid {
        self.descriptor().uuid
    }

    /// Look up an attribute by its UUID address
    pub fn from_uuid(uuid: &Uuid) -> Option<AttributeName> {
        DESCRIPTORS
            .iter()
            .find(|descriptor| descriptor.uuid == *uuid)
            .map(|descriptor| descriptor.name)
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = EddystoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| EddystoneError::UnknownAttribute(s.to_string()))
    }
}

/// How a write payload's length is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Generic gate, then exactly this many bytes
    Exact(usize),
    /// Generic gate only
    Variable,
    /// No length check at all
    Unchecked,
}

impl LengthRule {
    /// Check a payload length. `max_len` is the generic write-length gate.
    pub fn check(
        &self,
        attribute: AttributeName,
        len: usize,
        max_len: usize,
    ) -> EddystoneResult<()> {
        let ok = match self {
            LengthRule::Unchecked => true,
            LengthRule::Variable => len > 0 && len <= max_len,
            LengthRule::Exact(expected) => len > 0 && len <= max_len && len == *expected,
        };

        if ok {
            Ok(())
        } else {
            Err(EddystoneError::InvalidLength {
                attribute,
                actual: len,
            })
        }
    }
}

/// Transport-facing description of one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: AttributeName,
    pub uuid: Uuid,
    pub access: Access,
    pub length: LengthRule,
    pub codec: Codec,
}

const READ: Access = Access::READ;
const WRITE: Access = Access::WRITE;
const WRITE_NO_RSP: Access = Access::WRITE_WITHOUT_RESPONSE;
const READ_WRITE: Access = Access::READ.union(Access::WRITE);

/// Descriptor table, in `AttributeName` order
pub static DESCRIPTORS: [AttributeDescriptor; 9] = [
    AttributeDescriptor {
        name: AttributeName::LockState,
        uuid: Uuid::from_u128(LOCK_STATE_UUID),
        access: READ,
        length: LengthRule::Exact(1),
        codec: Codec::byte(ByteWidth::One),
    },
    AttributeDescriptor {
        name: AttributeName::Lock,
        uuid: Uuid::from_u128(LOCK_UUID),
        access: WRITE,
        length: LengthRule::Unchecked,
        codec: Codec::Raw,
    },
    AttributeDescriptor {
        name: AttributeName::Unlock,
        uuid: Uuid::from_u128(UNLOCK_UUID),
        access: WRITE_NO_RSP,
        length: LengthRule::Unchecked,
        codec: Codec::Raw,
    },
    AttributeDescriptor {
        name: AttributeName::UriData,
        uuid: Uuid::from_u128(URI_DATA_UUID),
        access: READ_WRITE,
        length: LengthRule::Variable,
        codec: Codec::Url(UrlCodec),
    },
    AttributeDescriptor {
        name: AttributeName::Flags,
        uuid: Uuid::from_u128(FLAGS_UUID),
        access: READ_WRITE,
        length: LengthRule::Exact(1),
        codec: Codec::byte(ByteWidth::One),
    },
    AttributeDescriptor {
        name: AttributeName::TxPowerLevel,
        uuid: Uuid::from_u128(TX_POWER_LEVEL_UUID),
        access: READ_WRITE,
        length: LengthRule::Exact(4),
        codec: Codec::Array(ArrayCodec),
    },
    AttributeDescriptor {
        name: AttributeName::TxPowerMode,
        uuid: Uuid::from_u128(TX_POWER_MODE_UUID),
        access: READ_WRITE,
        length: LengthRule::Exact(1),
        codec: Codec::byte(ByteWidth::One),
    },
    AttributeDescriptor {
        name: AttributeName::BeaconPeriod,
        uuid: Uuid::from_u128(BEACON_PERIOD_UUID),
        access: READ_WRITE,
        length: LengthRule::Exact(2),
        codec: Codec::byte(ByteWidth::Two),
    },
    AttributeDescriptor {
        name: AttributeName::Reset,
        uuid: Uuid::from_u128(RESET_UUID),
        access: WRITE_NO_RSP,
        length: LengthRule::Exact(1),
        codec: Codec::byte(ByteWidth::One),
    },
];

/// UUID of the configuration service itself
pub fn service_uuid() -> Uuid {
    Uuid::from_u128(CONFIG_SERVICE_UUID)
}
