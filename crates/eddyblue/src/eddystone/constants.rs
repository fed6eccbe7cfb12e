//! Eddystone-URL configuration service constants

/// Configuration service UUID (`ee0c2080-8786-40ba-ab96-99b91ac981d8`)
pub const CONFIG_SERVICE_UUID: u128 = 0xee0c2080_8786_40ba_ab96_99b91ac981d8;

// Characteristic UUIDs
pub const LOCK_STATE_UUID: u128 = 0xee0c2081_8786_40ba_ab96_99b91ac981d8;
pub const LOCK_UUID: u128 = 0xee0c2082_8786_40ba_ab96_99b91ac981d8;
pub const UNLOCK_UUID: u128 = 0xee0c2083_8786_40ba_ab96_99b91ac981d8;
pub const URI_DATA_UUID: u128 = 0xee0c2084_8786_40ba_ab96_99b91ac981d8;
pub const FLAGS_UUID: u128 = 0xee0c2085_8786_40ba_ab96_99b91ac981d8;
pub const TX_POWER_LEVEL_UUID: u128 = 0xee0c2086_8786_40ba_ab96_99b91ac981d8;
pub const TX_POWER_MODE_UUID: u128 = 0xee0c2087_8786_40ba_ab96_99b91ac981d8;
pub const BEACON_PERIOD_UUID: u128 = 0xee0c2088_8786_40ba_ab96_99b91ac981d8;
pub const RESET_UUID: u128 = 0xee0c2089_8786_40ba_ab96_99b91ac981d8;

// Factory defaults
pub const DEFAULT_NAME: &str = "Eddystone-URL Configuration Service";
pub const DEFAULT_URI: &str = "http://google.com";
pub const DEFAULT_FLAGS: u8 = 0x00;
pub const DEFAULT_BEACON_PERIOD: u16 = 1000;
pub const DEFAULT_TX_POWER_LEVELS: [i8; 4] = [-100, -30, 0, 20];

// TxPower calibration range in dBm
pub const TX_POWER_LEVEL_MIN: i8 = -100;
pub const TX_POWER_LEVEL_MAX: i8 = 20;

/// Shortest beacon period in ms that activates advertising
pub const BEACON_PERIOD_LOWEST: u16 = 10;

/// Beacon period value that freezes advertising
pub const BEACON_PERIOD_FROZEN: u16 = 0;

/// Longest payload accepted by the generic write-length gate
pub const MAX_ATTRIBUTE_WRITE_LEN: usize = 12;
