//! eddyblue - Eddystone-URL beacon configuration engine
//!
//! This library implements the configuration protocol of the Eddystone-URL
//! configuration service: the state machine that decides which attributes can
//! be read or written, the per-attribute wire codecs, lock gating, and beacon
//! period/advertising activation. The Bluetooth transport in front of it hands
//! it one attribute read or write at a time.

pub mod att;
pub mod codec;
pub mod eddystone;
pub mod error;
pub mod uuid;

// Re-export common types for convenience
pub use att::AttErrorCode;
pub use codec::{AttributeValue, CodecError};
pub use eddystone::{
    AdvertisingState, AttributeName, BeaconConfig, BeaconConfigEngine, EngineSettings,
    Notification, PartialConfig, SubscriptionId, TxPowerMode, TxPowerTable,
};
pub use error::{EddystoneError, EddystoneResult, WriteOutcome};
pub use uuid::Uuid;
