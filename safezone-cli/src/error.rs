//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use safezone::config::{ConfigFileError, ZoneFileError};
use safezone::monitor::{ErrorCause, MonitorError};
use safezone::position::MalformedPosition;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Zone file could not be loaded
    Zones { path: PathBuf, error: ZoneFileError },
    /// Coordinates or accuracy out of range
    InvalidPosition(MalformedPosition),
    /// Simulated input was refused by the monitor
    Monitor(MonitorError),
    /// A GPS session ended in an error state
    Session(ErrorCause),
    /// Failed to serialize output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Zones { .. } => {
                eprintln!();
                eprintln!("Zone files hold one section per zone, for example:");
                eprintln!("  [zone.old-fort]");
                eprintln!("  kind = restricted");
                eprintln!("  vertices = 12.963,77.576 | 12.965,77.576 | 12.965,77.578");
                eprintln!();
                eprintln!("Point at a different file with --zones <path>.");
            }
            CliError::Session(ErrorCause::PermissionDenied) => {
                eprintln!();
                eprintln!("Location permission was refused. Start a new session to ask again.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Zones { path, error } => {
                write!(f, "Failed to load zones from '{}': {}", path.display(), error)
            }
            CliError::InvalidPosition(e) => write!(f, "Invalid position: {}", e),
            CliError::Monitor(e) => write!(f, "Monitor rejected input: {}", e),
            CliError::Session(cause) => write!(f, "Session failed: {}", cause),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Zones { error, .. } => Some(error),
            CliError::InvalidPosition(e) => Some(e),
            CliError::Monitor(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<MalformedPosition> for CliError {
    fn from(e: MalformedPosition) -> Self {
        CliError::InvalidPosition(e)
    }
}

impl From<MonitorError> for CliError {
    fn from(e: MonitorError) -> Self {
        CliError::Monitor(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}
