//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;
use std::time::Duration;

use crate::monitor::MonitorConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Monitor and alert settings
    pub monitor: MonitorSettings,
    /// Zone definition file location
    pub zones: ZonesSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Location monitor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSettings {
    /// Minimum milliseconds between two alerts of the same kind.
    pub debounce_ms: u64,
    /// Seconds to wait for the first fix.
    pub acquire_timeout_secs: u64,
    /// Seconds to wait for a permission answer.
    pub permission_timeout_secs: u64,
    /// Ask the provider for precise fixes while watching.
    pub high_accuracy: bool,
    /// Oldest cached fix accepted, in milliseconds. 0 forces fresh fixes.
    pub maximum_age_ms: u64,
    /// Capacity of the update and alert channels.
    pub channel_capacity: usize,
}

impl MonitorSettings {
    /// Convert to the runtime monitor configuration.
    pub fn to_monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            permission_timeout: Duration::from_secs(self.permission_timeout_secs),
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            high_accuracy: self.high_accuracy,
            maximum_age: Duration::from_millis(self.maximum_age_ms),
            channel_capacity: self.channel_capacity,
        }
    }
}

/// Zone definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonesSettings {
    /// Path of the zone INI file
    pub file: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
