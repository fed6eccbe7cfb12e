//! Beacon configuration state
//!
//! [`BeaconConfig`] is the single record the engine reads from and writes to.
//! Its fields are only reachable through getters; all mutation is routed
//! through [`BeaconConfigEngine`](super::BeaconConfigEngine).

use super::advertising::{Advertising, AdvertisingState, PeriodPolicy};
use super::constants::*;
use super::tx_power::TxPowerTable;
use crate::codec::UrlCodec;
use crate::error::{EddystoneError, EddystoneResult};

/// The beacon's current configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconConfig {
    name: String,
    uri: String,
    flags: u8,
    tx_power: TxPowerTable,
    advertising: Advertising,
    lock_state: bool,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            uri: DEFAULT_URI.to_string(),
            flags: DEFAULT_FLAGS,
            tx_power: TxPowerTable::default(),
            advertising: Advertising::default(),
            lock_state: false,
        }
    }
}

impl BeaconConfig {
    /// Build a configuration from a partial one, failing if any field is unset.
    ///
    /// A beacon period of zero yields a frozen beacon; a period below the
    /// policy floor leaves the default period in place.
    pub fn from_partial(partial: PartialConfig, policy: &PeriodPolicy) -> EddystoneResult<Self> {
        let name = required_string("name", partial.name)?;
        let uri = required_uri(partial.uri)?;
        let flags = partial.flags.ok_or(EddystoneError::IncompleteConfig("flags"))?;
        let tx_power = partial
            .tx_power
            .ok_or(EddystoneError::IncompleteConfig("txPower"))?;
        let beacon_period = partial
            .beacon_period
            .ok_or(EddystoneError::IncompleteConfig("beaconPeriod"))?;

        Ok(Self {
            name,
            uri,
            flags,
            tx_power,
            advertising: Advertising::from_period(beacon_period, policy),
            lock_state: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn tx_power(&self) -> &TxPowerTable {
        &self.tx_power
    }

    /// Last configured non-zero period, kept while frozen
    pub fn beacon_period(&self) -> u16 {
        self.advertising.stored_period()
    }

    pub fn is_frozen(&self) -> bool {
        self.advertising.is_frozen()
    }

    pub fn advertising_state(&self) -> AdvertisingState {
        self.advertising.state()
    }

    pub fn is_locked(&self) -> bool {
        self.lock_state
    }

    /// Merge `partial` over this configuration into a new candidate.
    ///
    /// Returns the candidate and whether the frozen flag flipped. `self` is
    /// not modified.
    pub(crate) fn merge(
        &self,
        partial: PartialConfig,
        policy: &PeriodPolicy,
    ) -> EddystoneResult<(BeaconConfig, bool)> {
        let name = partial.name.unwrap_or_else(|| self.name.clone());
        let name = required_string("name", Some(name))?;
        let uri = required_uri(Some(partial.uri.unwrap_or_else(|| self.uri.clone())))?;

        let mut advertising = self.advertising;
        let transition = partial
            .beacon_period
            .map_or(false, |period| advertising.apply(policy.classify(period)));

        let candidate = BeaconConfig {
            name,
            uri,
            flags: partial.flags.unwrap_or(self.flags),
            tx_power: partial.tx_power.unwrap_or(self.tx_power),
            advertising,
            lock_state: self.lock_state,
        };

        Ok((candidate, transition))
    }

    /// Restore the broadcast-tuning fields to factory values. Name, URI and
    /// lock state are kept. Returns whether the frozen flag flipped.
    pub(crate) fn reset_broadcast(&mut self) -> bool {
        let was_frozen = self.is_frozen();
        self.flags = DEFAULT_FLAGS;
        self.tx_power = TxPowerTable::default();
        self.advertising = Advertising::default();
        was_frozen != self.is_frozen()
    }

    pub(crate) fn set_uri(&mut self, uri: String) {
        self.uri = uri;
    }

    pub(crate) fn set_flags(&mut self, flags: u8) {
        self.flags = flags;
    }

    pub(crate) fn set_lock_state(&mut self, locked: bool) {
        self.lock_state = locked;
    }

    pub(crate) fn tx_power_mut(&mut self) -> &mut TxPowerTable {
        &mut self.tx_power
    }

    pub(crate) fn advertising_mut(&mut self) -> &mut Advertising {
        &mut self.advertising
    }
}

impl TryFrom<PartialConfig> for BeaconConfig {
    type Error = EddystoneError;

    fn try_from(partial: PartialConfig) -> Result<Self, Self::Error> {
        BeaconConfig::from_partial(partial, &PeriodPolicy::default())
    }
}

fn required_string(field: &'static str, value: Option<String>) -> EddystoneResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(EddystoneError::IncompleteConfig(field)),
    }
}

fn required_uri(value: Option<String>) -> EddystoneResult<String> {
    let uri = required_string("uri", value)?;
    // The URI has to survive the trip back out through a read
    UrlCodec.encode(&uri)?;
    Ok(uri)
}

/// A configuration where every field is optional
///
/// Used both to merge over the current state and to build a fresh
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub flags: Option<u8>,
    pub tx_power: Option<TxPowerTable>,
    pub beacon_period: Option<u16>,
}

impl PartialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_flags(mut self, flags: u8) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn with_tx_power(mut self, tx_power: TxPowerTable) -> Self {
        self.tx_power = Some(tx_power);
        self
    }

    pub fn with_beacon_period(mut self, beacon_period: u16) -> Self {
        self.beacon_period = Some(beacon_period);
        self
    }
}

impl From<&BeaconConfig> for PartialConfig {
    fn from(config: &BeaconConfig) -> Self {
        Self {
            name: Some(config.name.clone()),
            uri: Some(config.uri.clone()),
            flags: Some(config.flags),
            tx_power: Some(config.tx_power),
            beacon_period: Some(config.beacon_period()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eddystone::TxPowerMode;

    #[test]
    fn test_defaults() {
        let config = BeaconConfig::default();
        assert_eq!(config.name(), "Eddystone-URL Configuration Service");
        assert_eq!(config.uri(), "http://google.com");
        assert_eq!(config.flags(), 0);
        assert_eq!(config.tx_power().levels(), [-100, -30, 0, 20]);
        assert_eq!(config.tx_power().mode(), TxPowerMode::Low);
        assert_eq!(config.beacon_period(), 1000);
        assert!(!config.is_locked());
        assert!(!config.is_frozen());
    }

    #[test]
    fn test_from_partial_requires_every_field() {
        let complete = PartialConfig::from(&BeaconConfig::default());
        assert_eq!(
            BeaconConfig::try_from(complete.clone()).unwrap(),
            BeaconConfig::default()
        );

        let missing_flags = PartialConfig {
            flags: None,
            ..complete.clone()
        };
        assert!(matches!(
            BeaconConfig::try_from(missing_flags),
            Err(EddystoneError::IncompleteConfig("flags"))
        ));

        let missing_period = PartialConfig {
            beacon_period: None,
            ..complete.clone()
        };
        assert!(matches!(
            BeaconConfig::try_from(missing_period),
            Err(EddystoneError::IncompleteConfig("beaconPeriod"))
        ));

        assert!(matches!(
            BeaconConfig::try_from(PartialConfig::new().with_name("beacon")),
            Err(EddystoneError::IncompleteConfig("uri"))
        ));
    }

    #[test]
    fn test_from_partial_frozen_period() {
        let partial = PartialConfig::from(&BeaconConfig::default()).with_beacon_period(0);
        let config = BeaconConfig::try_from(partial).unwrap();
        assert!(config.is_frozen());
        assert_eq!(config.beacon_period(), 1000);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let config = BeaconConfig::default();
        let (merged, transition) = config
            .merge(
                PartialConfig::new().with_flags(0x10).with_beacon_period(300),
                &PeriodPolicy::default(),
            )
            .unwrap();

        assert!(!transition);
        assert_eq!(merged.flags(), 0x10);
        assert_eq!(merged.beacon_period(), 300);
        assert_eq!(merged.name(), config.name());
        assert_eq!(merged.uri(), config.uri());
    }

    #[test]
    fn test_merge_rejects_empty_strings() {
        let config = BeaconConfig::default();
        let policy = PeriodPolicy::default();

        assert!(matches!(
            config.merge(PartialConfig::new().with_name(""), &policy),
            Err(EddystoneError::IncompleteConfig("name"))
        ));
        assert!(matches!(
            config.merge(PartialConfig::new().with_uri(""), &policy),
            Err(EddystoneError::IncompleteConfig("uri"))
        ));
        assert!(matches!(
            config.merge(PartialConfig::new().with_uri("gopher://x"), &policy),
            Err(EddystoneError::Codec(_))
        ));
    }

    #[test]
    fn test_reset_broadcast() {
        let mut config = BeaconConfig::default();
        config.set_uri("https://example.org".to_string());
        config.set_flags(0x42);
        config.set_lock_state(true);
        config.tx_power_mut().set_mode(3).unwrap();
        config.advertising_mut().apply(crate::eddystone::PeriodUpdate::Freeze);

        assert!(config.reset_broadcast());
        assert_eq!(config.flags(), 0);
        assert_eq!(*config.tx_power(), TxPowerTable::default());
        assert_eq!(config.advertising_state(), AdvertisingState::Active(1000));
        assert_eq!(config.uri(), "https://example.org");
        assert!(config.is_locked());
    }
}
