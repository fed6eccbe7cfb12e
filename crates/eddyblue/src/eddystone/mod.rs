//! Eddystone-URL configuration service
//!
//! This module implements the configuration protocol engine behind the
//! Eddystone-URL configuration GATT service: the beacon's configuration state,
//! its TxPower calibration table, advertising activation, and the attribute
//! dispatcher that the GATT transport calls into.

pub mod advertising;
pub mod attribute;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod tx_power;


pub use advertising::{Advertising, AdvertisingState, PeriodPolicy, PeriodUpdate};
pub use attribute::{
    service_uuid, Access, AttributeDescriptor, AttributeName, LengthRule, DESCRIPTORS,
};
pub use config::{BeaconConfig, PartialConfig};
pub use engine::{BeaconConfigEngine, EngineSettings};
pub use events::{Notification, NotificationCallback, SubscriptionId};
pub use tx_power::{TxPowerMode, TxPowerTable};
