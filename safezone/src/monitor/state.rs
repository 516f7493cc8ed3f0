//! Session state types for the location monitor.
//!
//! - [`MonitorState`] - Where the session is in its lifecycle
//! - [`ErrorCause`] - Why a session stopped producing positions
//! - [`Generation`] - Session identity used to discard stale events
//! - [`InputMode`] - Real provider or simulated input
//! - [`MonitorSnapshot`] - Full status for consumers

use std::fmt;

use serde::Serialize;

use crate::position::Position;
use crate::resolver::ZoneStatus;

/// Why a session ended in the error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCause {
    /// The user or platform refused location access. Terminal for the session.
    PermissionDenied,
    /// No position could be obtained. Retry by starting again.
    PositionUnavailable,
    /// A permission request or fix did not arrive in time.
    Timeout,
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::PositionUnavailable => write!(f, "position unavailable"),
            Self::Timeout => write!(f, "timed out"),
        }
    }
}

/// Lifecycle state of a monitor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorState {
    /// No session.
    #[default]
    Idle,
    RequestingPermission,
    /// Permission granted, waiting for the first fix.
    Acquiring,
    /// Receiving and classifying positions.
    Tracking,
    /// The session failed; call `stop()` or `start()` again.
    Error(ErrorCause),
}

impl MonitorState {
    /// True while the session may still produce positions.
    pub fn is_running(&self) -> bool {
        matches!(
            self,
            Self::RequestingPermission | Self::Acquiring | Self::Tracking
        )
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::RequestingPermission => write!(f, "Requesting permission"),
            Self::Acquiring => write!(f, "Acquiring"),
            Self::Tracking => write!(f, "Tracking"),
            Self::Error(cause) => write!(f, "Error ({})", cause),
        }
    }
}

/// Monotonic session counter.
///
/// Incremented on every `start()` and every effective `stop()`. Events
/// tagged with an older generation are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which source feeds a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// A real positioning provider.
    Gps,
    /// Positions pushed through `SimulatedInput`.
    Simulated,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gps => write!(f, "GPS"),
            Self::Simulated => write!(f, "Simulated"),
        }
    }
}

/// Point-in-time view of the monitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSnapshot {
    pub state: MonitorState,
    pub mode: Option<InputMode>,
    pub generation: Generation,
    pub current_position: Option<Position>,
    pub current_status: Option<ZoneStatus>,
}
