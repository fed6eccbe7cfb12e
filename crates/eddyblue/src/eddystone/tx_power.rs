//! TxPower calibration table
//!
//! Four calibrated output levels, one per [`TxPowerMode`], plus the mode that
//! is currently active. Single-entry writes keep the table non-decreasing from
//! `Lowest` to `High`; bulk replacement trusts the caller's ordering.

use super::constants::*;
use crate::codec::{ArrayCodec, CodecError};
use crate::error::{EddystoneError, EddystoneResult};
use std::fmt;

/// TxPower mode, indexing the calibration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TxPowerMode {
    Lowest = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl TxPowerMode {
    pub const ALL: [TxPowerMode; 4] = [
        TxPowerMode::Lowest,
        TxPowerMode::Low,
        TxPowerMode::Medium,
        TxPowerMode::High,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for TxPowerMode {
    type Error = EddystoneError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TxPowerMode::Lowest),
            1 => Ok(TxPowerMode::Low),
            2 => Ok(TxPowerMode::Medium),
            3 => Ok(TxPowerMode::High),
            _ => Err(EddystoneError::TxPowerModeOutOfRange(value)),
        }
    }
}

impl From<TxPowerMode> for u8 {
    fn from(mode: TxPowerMode) -> Self {
        mode as u8
    }
}

impl fmt::Display for TxPowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TxPowerMode::Lowest => "lowest",
            TxPowerMode::Low => "low",
            TxPowerMode::Medium => "medium",
            TxPowerMode::High => "high",
        };
        f.write_str(name)
    }
}

fn check_level(level: i8) -> EddystoneResult<i8> {
    if (TX_POWER_LEVEL_MIN..=TX_POWER_LEVEL_MAX).contains(&level) {
        Ok(level)
    } else {
        Err(EddystoneError::TxPowerLevelOutOfRange(level))
    }
}

/// Calibrated TxPower levels and the active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxPowerTable {
    levels: [i8; 4],
    mode: TxPowerMode,
}

impl Default for TxPowerTable {
    fn default() -> Self {
        Self {
            levels: DEFAULT_TX_POWER_LEVELS,
            mode: TxPowerMode::Low,
        }
    }
}

impl TxPowerTable {
    /// Create a table from explicit levels, each range-checked
    pub fn new(levels: [i8; 4], mode: TxPowerMode) -> EddystoneResult<Self> {
        let mut table = Self::default();
        table.set_levels(levels)?;
        table.mode = mode;
        Ok(table)
    }

    pub fn levels(&self) -> [i8; 4] {
        self.levels
    }

    pub fn mode(&self) -> TxPowerMode {
        self.mode
    }

    pub fn level(&self, mode: TxPowerMode) -> i8 {
        self.levels[mode.index()]
    }

    /// Level of the currently active mode
    pub fn active_level(&self) -> i8 {
        self.level(self.mode)
    }

    /// Set the level of a single mode.
    ///
    /// A level that would put the entry out of order with its neighbours is
    /// ignored. Returns the level stored for `mode` afterwards, which is the
    /// previous one if the write was ignored.
    pub fn set_level(&mut self, mode: TxPowerMode, level: i8) -> EddystoneResult<i8> {
        check_level(level)?;

        let idx = mode.index();
        let above_lower = idx == 0 || self.levels[idx - 1] <= level;
        let below_upper = idx == 3 || level <= self.levels[idx + 1];

        if above_lower && below_upper {
            self.levels[idx] = level;
        }

        Ok(self.levels[idx])
    }

    pub fn set_lowest(&mut self, level: i8) -> EddystoneResult<i8> {
        self.set_level(TxPowerMode::Lowest, level)
    }

    pub fn set_low(&mut self, level: i8) -> EddystoneResult<i8> {
        self.set_level(TxPowerMode::Low, level)
    }

    pub fn set_medium(&mut self, level: i8) -> EddystoneResult<i8> {
        self.set_level(TxPowerMode::Medium, level)
    }

    pub fn set_high(&mut self, level: i8) -> EddystoneResult<i8> {
        self.set_level(TxPowerMode::High, level)
    }

    /// Replace all four levels at once.
    ///
    /// Every entry is range-checked before anything is written. Ordering
    /// between entries is not checked.
    pub fn set_levels(&mut self, levels: [i8; 4]) -> EddystoneResult<()> {
        for level in levels {
            check_level(level)?;
        }
        self.levels = levels;
        Ok(())
    }

    /// Select the active mode from its wire value
    pub fn set_mode(&mut self, mode: u8) -> EddystoneResult<TxPowerMode> {
        self.select_mode(TxPowerMode::try_from(mode)?);
        Ok(self.mode)
    }

    pub fn select_mode(&mut self, mode: TxPowerMode) {
        self.mode = mode;
    }

    /// Levels in wire order
    pub fn serialize(&self) -> Vec<u8> {
        ArrayCodec.encode(&self.levels)
    }

    /// Replace the levels from their wire form (exactly 4 bytes)
    pub fn deserialize(&mut self, data: &[u8]) -> EddystoneResult<()> {
        let levels: [i8; 4] = ArrayCodec
            .decode(data)
            .try_into()
            .map_err(|_| CodecError::InvalidLength {
                expected: 4,
                actual: data.len(),
            })?;
        self.set_levels(levels)
    }

    pub fn is_monotonic(&self) -> bool {
        self.levels.windows(2).all(|pair| pair[0] <= pair[1])
    }
}
