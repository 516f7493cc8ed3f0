//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization and zone file
//! loading to reduce duplication across command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use safezone::config::{config_file_path, load_zones, ConfigFile, DEFAULT_LOG_FILENAME};
use safezone::logging::{init_logging, LoggingGuard};
use safezone::monitor::{GeofenceTracker, MonitorConfig};
use safezone::zone::ZoneRegistry;
use tracing::info;

use crate::commands::Output;
use crate::error::CliError;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Config file override
    pub config: Option<PathBuf>,
    /// Zone file override
    pub zones: Option<PathBuf>,
    pub debug: bool,
    pub json: bool,
}

impl GlobalOptions {
    /// Config file in effect.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }

    /// Load the config file in effect, falling back to defaults if absent.
    pub fn load_config(&self) -> Result<ConfigFile, CliError> {
        Ok(ConfigFile::load_from(&self.config_path())?)
    }
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Zone file in effect
    zones_path: PathBuf,
    output: Output,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// Log events go to the log file only, so stdout carries command output.
    pub fn new(options: &GlobalOptions) -> Result<Self, CliError> {
        let config = options.load_config()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_FILENAME.to_string());

        let logging_guard = init_logging(&log_dir, &log_file, false, options.debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        let zones_path = options
            .zones
            .clone()
            .unwrap_or_else(|| config.zones.file.clone());

        Ok(Self {
            logging_guard,
            config,
            zones_path,
            output: Output::new(options.json),
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("SafeZone v{}", safezone::VERSION);
        info!("SafeZone CLI: {} command", command);
    }

    /// Load the zone file in effect.
    pub fn load_registry(&self) -> Result<Arc<ZoneRegistry>, CliError> {
        load_zones(&self.zones_path)
            .map(ZoneRegistry::into_shared)
            .map_err(|error| CliError::Zones {
                path: self.zones_path.clone(),
                error,
            })
    }

    /// Monitor settings from the config file.
    pub fn monitor_config(&self) -> MonitorConfig {
        self.config().monitor.to_monitor_config()
    }

    /// Create a tracker over the loaded zones.
    pub fn create_tracker(&self) -> Result<GeofenceTracker, CliError> {
        let registry = self.load_registry()?;
        info!(zones = registry.len(), "Creating geofence tracker");
        Ok(GeofenceTracker::with_config(registry, self.monitor_config()))
    }
}
