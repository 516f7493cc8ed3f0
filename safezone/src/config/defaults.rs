//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::monitor::DEFAULT_CHANNEL_CAPACITY as MONITOR_CHANNEL_CAPACITY;

// =============================================================================
// Monitor
// =============================================================================

/// Default debounce between same-kind alerts (2 seconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = 2000;

/// Default first-fix timeout in seconds.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 20;

/// Default permission request timeout in seconds.
pub const DEFAULT_PERMISSION_TIMEOUT_SECS: u64 = 30;

/// Precise fixes are requested by default.
pub const DEFAULT_HIGH_ACCURACY: bool = true;

/// Cached fixes are not accepted by default.
pub const DEFAULT_MAXIMUM_AGE_MS: u64 = 0;

/// Default update/alert channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = MONITOR_CHANNEL_CAPACITY;

// =============================================================================
// Files
// =============================================================================

/// Zone definitions file name inside the config directory.
pub const DEFAULT_ZONES_FILENAME: &str = "zones.ini";

/// Log file name.
pub const DEFAULT_LOG_FILENAME: &str = "safezone.log";

/// Default log directory (~/.safezone/logs).
pub fn default_log_dir() -> PathBuf {
    config_directory().join("logs")
}

/// Default zone file (~/.safezone/zones.ini).
pub fn default_zones_file() -> PathBuf {
    config_directory().join(DEFAULT_ZONES_FILENAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            monitor: MonitorSettings {
                debounce_ms: DEFAULT_DEBOUNCE_MS,
                acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
                permission_timeout_secs: DEFAULT_PERMISSION_TIMEOUT_SECS,
                high_accuracy: DEFAULT_HIGH_ACCURACY,
                maximum_age_ms: DEFAULT_MAXIMUM_AGE_MS,
                channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            },
            zones: ZonesSettings {
                file: default_zones_file(),
            },
            logging: LoggingSettings {
                file: default_log_dir().join(DEFAULT_LOG_FILENAME),
            },
        }
    }
}
