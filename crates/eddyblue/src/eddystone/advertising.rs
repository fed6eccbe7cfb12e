//! Advertising activation from beacon period writes
//!
//! A period of zero freezes advertising without forgetting the last real
//! period. Periods at or above the floor (re)activate advertising. Periods in
//! between are accepted and ignored.

use super::constants::*;
use std::fmt;

/// Whether the beacon is advertising
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisingState {
    /// Advertising every `period` ms
    Active(u16),
    /// Advertising suspended
    Frozen,
}

impl AdvertisingState {
    pub fn is_frozen(&self) -> bool {
        matches!(self, AdvertisingState::Frozen)
    }

    /// Period as reported on the wire; zero while frozen
    pub fn reported_period(&self) -> u16 {
        match self {
            AdvertisingState::Active(period) => *period,
            AdvertisingState::Frozen => BEACON_PERIOD_FROZEN,
        }
    }
}

impl fmt::Display for AdvertisingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvertisingState::Active(period) => write!(f, "active ({} ms)", period),
            AdvertisingState::Frozen => f.write_str("frozen"),
        }
    }
}

/// What an incoming period does to the beacon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUpdate {
    /// Store the period and advertise with it
    Activate(u16),
    /// Suspend advertising, keep the stored period
    Freeze,
    /// Below the floor; nothing changes
    Ignore,
}

/// Classifies beacon period writes against a configured floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPolicy {
    lowest: u16,
}

impl Default for PeriodPolicy {
    fn default() -> Self {
        Self {
            lowest: BEACON_PERIOD_LOWEST,
        }
    }
}

impl PeriodPolicy {
    /// Create a policy with the given floor. Zero is the freeze sentinel, so a
    /// floor of zero is raised to one.
    pub fn new(lowest: u16) -> Self {
        Self {
            lowest: lowest.max(1),
        }
    }

    pub fn lowest(&self) -> u16 {
        self.lowest
    }

    pub fn classify(&self, period: u16) -> PeriodUpdate {
        if period == BEACON_PERIOD_FROZEN {
            PeriodUpdate::Freeze
        } else if period >= self.lowest {
            PeriodUpdate::Activate(period)
        } else {
            PeriodUpdate::Ignore
        }
    }
}

/// Stored period plus the frozen flag
///
/// The stored period is never zero; freezing only sets the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advertising {
    period: u16,
    frozen: bool,
}

impl Default for Advertising {
    fn default() -> Self {
        Self {
            period: DEFAULT_BEACON_PERIOD,
            frozen: false,
        }
    }
}

impl Advertising {
    /// Build from a configured period, where zero means frozen at the default
    /// period.
    pub fn from_period(period: u16, policy: &PeriodPolicy) -> Self {
        let mut advertising = Self::default();
        advertising.normalize(policy);
        advertising.apply(policy.classify(period));
        advertising
    }

    /// Raise a stored period under the policy floor to the default period, or
    /// to the floor itself if that is higher. The frozen flag is kept.
    pub fn normalize(&mut self, policy: &PeriodPolicy) {
        if self.period < policy.lowest() {
            self.period = DEFAULT_BEACON_PERIOD.max(policy.lowest());
        }
    }

    /// Last non-zero period, whether or not advertising is frozen
    pub fn stored_period(&self) -> u16 {
        self.period
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn state(&self) -> AdvertisingState {
        if self.frozen {
            AdvertisingState::Frozen
        } else {
            AdvertisingState::Active(self.period)
        }
    }

    /// Apply a classified period. Returns true if the frozen flag flipped.
    pub fn apply(&mut self, update: PeriodUpdate) -> bool {
        let was_frozen = self.frozen;
        match update {
            PeriodUpdate::Activate(period) => {
                self.period = period;
                self.frozen = false;
            }
            PeriodUpdate::Freeze => self.frozen = true,
            PeriodUpdate::Ignore => {}
        }
        was_frozen != self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let policy = PeriodPolicy::default();
        assert_eq!(policy.lowest(), 10);
        assert_eq!(policy.classify(0), PeriodUpdate::Freeze);
        assert_eq!(policy.classify(5), PeriodUpdate::Ignore);
        assert_eq!(policy.classify(9), PeriodUpdate::Ignore);
        assert_eq!(policy.classify(10), PeriodUpdate::Activate(10));
        assert_eq!(policy.classify(u16::MAX), PeriodUpdate::Activate(u16::MAX));

        assert_eq!(PeriodPolicy::new(0).lowest(), 1);
    }

    #[test]
    fn test_freeze_keeps_period() {
        let policy = PeriodPolicy::default();
        let mut adv = Advertising::default();

        assert!(adv.apply(policy.classify(0)));
        assert_eq!(adv.state(), AdvertisingState::Frozen);
        assert_eq!(adv.stored_period(), 1000);
        assert_eq!(adv.state().reported_period(), 0);

        // Freezing twice is not a transition
        assert!(!adv.apply(policy.classify(0)));
    }

    #[test]
    fn test_activate_unfreezes() {
        let policy = PeriodPolicy::default();
        let mut adv = Advertising::default();
        adv.apply(PeriodUpdate::Freeze);

        assert!(adv.apply(policy.classify(250)));
        assert_eq!(adv.state(), AdvertisingState::Active(250));
    }

    #[test]
    fn test_sub_floor_is_ignored() {
        let policy = PeriodPolicy::default();
        let mut adv = Advertising::default();

        assert!(!adv.apply(policy.classify(5)));
        assert_eq!(adv.state(), AdvertisingState::Active(1000));

        // Also while frozen: stays frozen
        adv.apply(PeriodUpdate::Freeze);
        assert!(!adv.apply(policy.classify(5)));
        assert_eq!(adv.state(), AdvertisingState::Frozen);
    }

    #[test]
    fn test_from_period() {
        let policy = PeriodPolicy::default();
        assert_eq!(
            Advertising::from_period(500, &policy).state(),
            AdvertisingState::Active(500)
        );

        let frozen = Advertising::from_period(0, &policy);
        assert!(frozen.is_frozen());
        assert_eq!(frozen.stored_period(), 1000);
    }

    #[test]
    fn test_normalize_to_floor() {
        let mut adv = Advertising::from_period(50, &PeriodPolicy::default());
        adv.normalize(&PeriodPolicy::new(100));
        assert_eq!(adv.state(), AdvertisingState::Active(1000));

        // A floor above the default period becomes the period
        let mut adv = Advertising::default();
        adv.apply(PeriodUpdate::Freeze);
        adv.normalize(&PeriodPolicy::new(2000));
        assert!(adv.is_frozen());
        assert_eq!(adv.stored_period(), 2000);

        let mut adv = Advertising::from_period(500, &PeriodPolicy::default());
        adv.normalize(&PeriodPolicy::new(100));
        assert_eq!(adv.stored_period(), 500);

        // A high floor applies to the default period too
        let adv = Advertising::from_period(5, &PeriodPolicy::new(2000));
        assert_eq!(adv.state(), AdvertisingState::Active(2000));
    }
}
