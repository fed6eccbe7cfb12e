//! Attribute dispatcher
//!
//! [`BeaconConfigEngine`] owns the beacon configuration and is the only way to
//! change it. The attribute transport hands it one read or write at a time;
//! each write is lock-gated, length-checked, decoded and validated before any
//! state is touched, then observers are notified.

use super::advertising::PeriodPolicy;
use super::attribute::AttributeName;
use super::config::{BeaconConfig, PartialConfig};
use super::constants::*;
use super::events::{Notification, NotificationCallback, Observers, SubscriptionId};
use super::tx_power::TxPowerMode;
use crate::codec::{AttributeValue, CodecError};
use crate::error::{EddystoneError, EddystoneResult, WriteOutcome};
use crate::uuid::Uuid;
use log::{debug, info, trace, warn};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Configuration the engine starts from
    pub defaults: BeaconConfig,
    /// Shortest beacon period in ms that activates advertising
    pub period_lowest: u16,
    /// Longest payload accepted by the generic write-length gate
    pub max_write_len: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            defaults: BeaconConfig::default(),
            period_lowest: BEACON_PERIOD_LOWEST,
            max_write_len: MAX_ATTRIBUTE_WRITE_LEN,
        }
    }
}

/// Eddystone-URL configuration protocol engine
pub struct BeaconConfigEngine {
    settings: EngineSettings,
    policy: PeriodPolicy,
    config: BeaconConfig,
    observers: Observers,
}

impl Default for BeaconConfigEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl BeaconConfigEngine {
    /// Create an engine starting from `settings.defaults`.
    ///
    /// A default beacon period under `settings.period_lowest` is raised to
    /// the default period (or the floor, if higher).
    pub fn new(settings: EngineSettings) -> Self {
        let policy = PeriodPolicy::new(settings.period_lowest);
        let mut config = settings.defaults.clone();
        config.advertising_mut().normalize(&policy);

        Self {
            policy,
            config,
            settings,
            observers: Observers::default(),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Replace the engine settings. The current configuration is kept; only
    /// later operations see the new floor and write gate.
    pub fn set_settings(&mut self, settings: EngineSettings) {
        self.policy = PeriodPolicy::new(settings.period_lowest);
        self.settings = settings;
    }

    /// Current configuration
    pub fn config(&self) -> &BeaconConfig {
        &self.config
    }

    /// Register an observer
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Notification) + Send + 'static,
    {
        let callback: NotificationCallback = Box::new(callback);
        self.observers.subscribe(callback)
    }

    /// Remove an observer. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Read an attribute by name
    pub fn read(&self, name: &str) -> EddystoneResult<Vec<u8>> {
        self.read_attribute(name.parse()?)
    }

    /// Read an attribute by UUID address
    pub fn read_uuid(&self, uuid: &Uuid) -> EddystoneResult<Vec<u8>> {
        self.read_attribute(resolve_uuid(uuid)?)
    }

    /// Read an attribute. Never gated by the lock.
    pub fn read_attribute(&self, attribute: AttributeName) -> EddystoneResult<Vec<u8>> {
        let descriptor = attribute.descriptor();
        if !descriptor.access.can_read() {
            return Err(EddystoneError::ReadNotPermitted(attribute));
        }

        let data = descriptor.codec.encode(&self.current_value(attribute))?;
        trace!("Read {} -> {}", attribute, hex::encode(&data));
        Ok(data)
    }

    /// Write an attribute by name
    pub fn write(&mut self, name: &str, data: &[u8]) -> WriteOutcome {
        self.write_attribute(name.parse()?, data)
    }

    /// Write an attribute by UUID address
    pub fn write_uuid(&mut self, uuid: &Uuid, data: &[u8]) -> WriteOutcome {
        self.write_attribute(resolve_uuid(uuid)?, data)
    }

    /// Write an attribute.
    ///
    /// Checks run in order: lock gate (skipped for `unlock`), write access,
    /// payload length, decode, value range. Nothing is changed and nothing is
    /// emitted unless all of them pass.
    pub fn write_attribute(&mut self, attribute: AttributeName, data: &[u8]) -> WriteOutcome {
        trace!("Write {} <- {}", attribute, hex::encode(data));

        let result = self.dispatch_write(attribute, data);
        if let Err(e) = &result {
            warn!("Rejected write to {}: {}", attribute, e);
        }
        result
    }

    fn dispatch_write(&mut self, attribute: AttributeName, data: &[u8]) -> WriteOutcome {
        let descriptor = attribute.descriptor();

        if self.config.is_locked() && attribute != AttributeName::Unlock {
            return Err(EddystoneError::Locked(attribute));
        }

        if !descriptor.access.can_write() {
            return Err(EddystoneError::WriteNotPermitted(attribute));
        }

        descriptor
            .length
            .check(attribute, data.len(), self.settings.max_write_len)?;

        let value = descriptor.codec.decode(data)?;

        match attribute {
            AttributeName::Lock => self.lock(),
            AttributeName::Unlock => self.unlock(),
            AttributeName::Reset => self.reset(),
            AttributeName::UriData => {
                let uri = value
                    .as_url()
                    .ok_or(CodecError::TypeMismatch("expected URL"))?
                    .to_string();
                self.update(attribute, |config| config.set_uri(uri));
            }
            AttributeName::Flags => {
                let flags = unsigned(&value)? as u8;
                self.update(attribute, |config| config.set_flags(flags));
            }
            AttributeName::TxPowerLevel => {
                let levels: [i8; 4] = value
                    .as_levels()
                    .and_then(|levels| levels.try_into().ok())
                    .ok_or(CodecError::TypeMismatch("expected 4 levels"))?;

                // Validate on a copy so a bad entry leaves the table untouched
                let mut table = *self.config.tx_power();
                table.set_levels(levels)?;
                self.update(attribute, |config| *config.tx_power_mut() = table);
            }
            AttributeName::TxPowerMode => {
                let raw = unsigned(&value)? as u8;
                let mode = TxPowerMode::try_from(raw)
                    .map_err(|_| EddystoneError::WriteNotPermitted(attribute))?;
                self.update(attribute, |config| config.tx_power_mut().select_mode(mode));
            }
            AttributeName::BeaconPeriod => {
                let period = unsigned(&value)? as u16;
                self.set_beacon_period(period);
            }
            AttributeName::LockState => {
                return Err(EddystoneError::WriteNotPermitted(attribute));
            }
        }

        debug!("Accepted write to {}", attribute);
        Ok(())
    }

    /// Lock the beacon. Takes effect from the next operation.
    pub fn lock(&mut self) {
        if !self.config.is_locked() {
            info!("Beacon locked");
        }
        self.update(AttributeName::LockState, |config| config.set_lock_state(true));
    }

    /// Unlock the beacon. Takes effect from the next operation.
    pub fn unlock(&mut self) {
        if self.config.is_locked() {
            info!("Beacon unlocked");
        }
        self.update(AttributeName::LockState, |config| config.set_lock_state(false));
    }

    /// Restore flags, TxPower table and beacon period to factory values.
    ///
    /// Name, URI and lock state are left alone.
    pub fn reset(&mut self) {
        const RESET_ATTRIBUTES: [AttributeName; 4] = [
            AttributeName::Flags,
            AttributeName::TxPowerLevel,
            AttributeName::TxPowerMode,
            AttributeName::BeaconPeriod,
        ];

        let previous: Vec<AttributeValue> = RESET_ATTRIBUTES
            .iter()
            .map(|attribute| self.current_value(*attribute))
            .collect();
        let transition = self.config.reset_broadcast();
        info!("Beacon reset, advertising {}", self.config.advertising_state());

        for (attribute, previous) in RESET_ATTRIBUTES.iter().zip(previous) {
            let current = self.current_value(*attribute);
            self.observers.emit(Notification::Changed {
                attribute: *attribute,
                previous,
                current,
            });
        }

        if transition {
            self.emit_disabled();
        }
    }

    /// Merge `partial` over the current configuration.
    ///
    /// Fails without changing anything if the result would have an unset
    /// field or an unencodable URI. A beacon period goes through the same
    /// activation rules as a write. Owner calls like this one and `reset` are
    /// not gated by the lock.
    pub fn configure(&mut self, partial: PartialConfig) -> EddystoneResult<&BeaconConfig> {
        let (candidate, transition) = self.config.merge(partial, &self.policy)?;
        self.config = candidate;
        info!(
            "Configured beacon {:?} -> {}, advertising {}",
            self.config.name(),
            self.config.uri(),
            self.config.advertising_state()
        );

        if transition {
            self.emit_disabled();
        }

        Ok(&self.config)
    }

    fn set_beacon_period(&mut self, period: u16) {
        let update = self.policy.classify(period);
        let mut transition = false;
        self.update(AttributeName::BeaconPeriod, |config| {
            transition = config.advertising_mut().apply(update);
        });

        if transition {
            self.emit_disabled();
        }
    }

    /// Apply `mutate` and notify observers of the attribute's old and new value
    fn update<F>(&mut self, attribute: AttributeName, mutate: F)
    where
        F: FnOnce(&mut BeaconConfig),
    {
        let previous = self.current_value(attribute);
        mutate(&mut self.config);
        let current = self.current_value(attribute);

        self.observers.emit(Notification::Changed {
            attribute,
            previous,
            current,
        });
    }

    fn emit_disabled(&mut self) {
        let frozen = self.config.is_frozen();
        info!("Advertising {}", if frozen { "frozen" } else { "resumed" });
        self.observers.emit(Notification::Disabled { frozen });
    }

    /// Typed value of an attribute as a read would report it
    fn current_value(&self, attribute: AttributeName) -> AttributeValue {
        let config = &self.config;
        match attribute {
            AttributeName::LockState => AttributeValue::Unsigned(config.is_locked() as u32),
            AttributeName::UriData => AttributeValue::Url(config.uri().to_string()),
            AttributeName::Flags => AttributeValue::Unsigned(config.flags() as u32),
            AttributeName::TxPowerLevel => {
                AttributeValue::Levels(config.tx_power().levels().to_vec())
            }
            AttributeName::TxPowerMode => {
                AttributeValue::Unsigned(u8::from(config.tx_power().mode()) as u32)
            }
            AttributeName::BeaconPeriod => {
                AttributeValue::Unsigned(config.advertising_state().reported_period() as u32)
            }
            AttributeName::Lock | AttributeName::Unlock | AttributeName::Reset => {
                AttributeValue::Bytes(Vec::new())
            }
        }
    }
}

fn resolve_uuid(uuid: &Uuid) -> EddystoneResult<AttributeName> {
    AttributeName::from_uuid(uuid).ok_or_else(|| EddystoneError::UnknownAttribute(uuid.to_string()))
}

fn unsigned(value: &AttributeValue) -> EddystoneResult<u32> {
    value
        .as_unsigned()
        .ok_or_else(|| CodecError::TypeMismatch("expected unsigned integer").into())
}
