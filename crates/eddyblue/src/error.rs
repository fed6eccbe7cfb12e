//! Error types for the eddyblue library
//!
//! Every engine operation fails synchronously with an [`EddystoneError`] and
//! leaves the beacon configuration untouched.

use crate::att::AttErrorCode;
use crate::codec::CodecError;
use crate::eddystone::AttributeName;
use thiserror::Error;

/// Errors that can occur when reading or writing the beacon configuration
#[derive(Error, Debug)]
pub enum EddystoneError {
    #[error("Write to {0} rejected: beacon is locked")]
    Locked(AttributeName),

    #[error("Invalid length for {attribute}: {actual} bytes")]
    InvalidLength {
        attribute: AttributeName,
        actual: usize,
    },

    #[error("Write not permitted on {0}")]
    WriteNotPermitted(AttributeName),

    #[error("Read not permitted on {0}")]
    ReadNotPermitted(AttributeName),

    #[error("Tx power level {0} dBm is outside [-100, 20]")]
    TxPowerLevelOutOfRange(i8),

    #[error("Tx power mode {0} is invalid")]
    TxPowerModeOutOfRange(u8),

    #[error("Incomplete configuration: {0} is unset")]
    IncompleteConfig(&'static str),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl EddystoneError {
    /// Convert to the ATT error code the transport reports
    pub fn to_error_code(&self) -> AttErrorCode {
        match self {
            EddystoneError::Locked(_) => AttErrorCode::WriteNotPermitted,
            EddystoneError::InvalidLength { .. } => AttErrorCode::InvalidAttributeValueLength,
            EddystoneError::WriteNotPermitted(_) => AttErrorCode::WriteNotPermitted,
            EddystoneError::ReadNotPermitted(_) => AttErrorCode::ReadNotPermitted,
            EddystoneError::TxPowerLevelOutOfRange(_) => AttErrorCode::ValueNotAllowed,
            EddystoneError::TxPowerModeOutOfRange(_) => AttErrorCode::ValueNotAllowed,
            EddystoneError::IncompleteConfig(_) => AttErrorCode::Unlikely,
            EddystoneError::UnknownAttribute(_) => AttErrorCode::AttributeNotFound,
            EddystoneError::Codec(_) => AttErrorCode::ValueNotAllowed,
        }
    }

    /// Whether this is a range error on the TxPower table
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            EddystoneError::TxPowerLevelOutOfRange(_) | EddystoneError::TxPowerModeOutOfRange(_)
        )
    }
}

/// Result type for engine operations
pub type EddystoneResult<T> = Result<T, EddystoneError>;

/// Outcome of a dispatched write
pub type WriteOutcome = EddystoneResult<()>;
